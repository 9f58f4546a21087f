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

//! The data contract a game-record parser hands this crate. There is no
//! parser here — no SGF, no file format, no regex — only the plain struct
//! a parser (living in some other crate) is expected to fill in, and the
//! glue that replays one against a `Board`.

use crate::board::{Board, Size};
use crate::color::Color;
use crate::moves::Move;
use crate::point::Point;
use crate::ruleset::Ruleset;

/// A single stone placed outside of normal play, e.g. a handicap stone or
/// an "AB"/"AW" setup node in an SGF-derived record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SetupStone {
    pub color: Color,
    pub point: Point
}

/// Everything a parsed game record needs to hand this crate in order to
/// reconstruct the final `Board`: the root-level game info plus the setup
/// stones and move sequence, already decoded into this crate's own types.
/// Producing one of these from an actual file format is explicitly out of
/// scope for this crate (§6 "Record parser (external)").
///
/// `moves` is the full move list the parser decoded, not yet split.
/// `Board::replay` plays `moves[..start_turn_index]` into `history` and
/// hands back the remainder, so a training pipeline can treat a mid-game
/// position as its working set without the parser needing to know
/// anything about where training starts. `result` is carried through
/// unused by `Board::replay`, exactly like `Ruleset::tax_rule`: it only
/// matters to whatever scores the finished game, not to replaying it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub size: Size,
    pub komi: f32,
    pub ruleset: Ruleset,
    pub handicap: u8,
    pub setup: Vec<SetupStone>,
    pub moves: Vec<Move>,
    /// How many leading moves of the original record were already replayed
    /// into `history` before this record's `moves` starts.
    pub start_turn_index: u32,
    /// Signed score: positive favors Black, magnitude in points; ±1000
    /// conventionally marks a resignation, 0 a draw or void game.
    pub result: f32
}

impl Board {
    /// Resets `self` to `record`'s size/komi/ruleset/handicap, applies every
    /// setup stone, then plays `record.moves[..start_turn_index]` into
    /// history. Returns the remaining moves, trimmed, for the caller to
    /// step through one at a time as a training pipeline's actual working
    /// set (§6: "the training-time initial state can be mid-game").
    ///
    /// Every setup stone and move must be individually valid for the
    /// position it is applied to — same misuse contract as `setup`/`play`.
    pub fn replay(&mut self, record: &GameRecord) -> Vec<Move> {
        self.reset(record.size, record.komi, record.ruleset, record.handicap);

        for stone in &record.setup {
            self.setup(Move::Play(stone.color, stone.point));
        }

        let split = (record.start_turn_index as usize).min(record.moves.len());
        let (prefix, remainder) = record.moves.split_at(split);

        for &mv in prefix {
            self.play(mv);
        }

        remainder.to_vec()
    }
}
