// Copyright 2024 Karl Sundequist Blomdahl <karl.sundequist.blomdahl@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An in-memory Go board engine: coordinates and moves, a process-wide
//! Zobrist hash table, a union-find group/liberty index, the `Board` itself
//! (setup, legality, play), and a feature extractor that turns a `Board`
//! into the stacked tensor planes and scalar features a neural network
//! training pipeline consumes.
//!
//! This crate has no opinion about where games come from (no SGF or any
//! other record-file parser lives here — only the `GameRecord` data
//! contract in the `record` module) or about search, scoring, or any other
//! downstream consumer of a `Board`.

#[macro_use]
extern crate lazy_static;

pub mod board;
pub mod color;
pub mod config;
pub mod features;
pub mod group_index;
pub mod moves;
pub mod point;
pub mod record;
pub mod ruleset;
pub mod zobrist;

pub use board::{Board, Size};
pub use color::Color;
pub use moves::{Legality, Move};
pub use point::Point;
pub use record::{GameRecord, SetupStone};
pub use ruleset::{
    FirstPassBonusRule, KoRule, Ruleset, ScoringRule, SuicideRule, TaxRule, WhiteHandicapBonusRule
};

/// The largest board size this engine supports on either axis. The padded
/// grid every `Board` allocates is sized for this regardless of the actual
/// board's dimensions, so that `Board::reset` never reallocates (§5, §9).
pub const MAX_BOARD_SIZE: u8 = 19;
