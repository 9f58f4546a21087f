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

//! Environment-tunable knobs, read once and cached. Mirrors the shape of
//! the teacher's `dg_utils::config` (a `lazy_static!` block of values parsed
//! from the environment with compiled-in defaults).

use std::env;

use crate::MAX_BOARD_SIZE;

lazy_static! {
    /// When set, the global Zobrist table (see `zobrist`) is generated from
    /// a `StdRng` seeded with this value instead of OS entropy, so golden
    /// hashes are reproducible across test runs. Unset by default — real
    /// data-generation runs get a fresh table per process, as spec.md's
    /// non-goals require.
    pub static ref ZOBRIST_SEED: Option<u64> = env::var("GO_ENGINE_ZOBRIST_SEED")
        .ok()
        .and_then(|value| value.parse().ok());

    /// Upper bound on `Board::new`'s requested size, clamped into
    /// `[1, Board::MAX]`. Defaults to `Board::MAX` (19); never relaxes it.
    pub static ref MAX_SIZE: u8 = env::var("GO_ENGINE_MAX_SIZE")
        .ok()
        .and_then(|value| value.parse::<u8>().ok())
        .map(|size| size.clamp(1, MAX_BOARD_SIZE))
        .unwrap_or(MAX_BOARD_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_size_never_exceeds_the_hard_ceiling() {
        assert!(*MAX_SIZE <= MAX_BOARD_SIZE);
        assert!(*MAX_SIZE >= 1);
    }
}
