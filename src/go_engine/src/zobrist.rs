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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::config;
use crate::point::Point;
use crate::MAX_BOARD_SIZE;

const NUM_POINTS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// A process-wide table of 64-bit random values: one per `(point, color)`
/// pair, plus two "side to move" values. Populated once, lazily, and never
/// mutated afterwards (§4.2, §9 "Global Zobrist state").
///
/// The table is sized for the largest legal board (`MAX_BOARD_SIZE`) and
/// reused unchanged for every smaller board a `Board` is constructed with —
/// a `(point, color)` pair is looked up by its unpadded coordinate, so the
/// board's own size never needs to be known here.
pub struct ZobristTable {
    points: Vec<[u64; 2]>,
    side: [u64; 2]
}

impl ZobristTable {
    fn fill_from(rng: &mut impl Rng) -> Self {
        let points = (0..NUM_POINTS).map(|_| [rng.gen(), rng.gen()]).collect();
        let side = [rng.gen(), rng.gen()];

        Self { points, side }
    }

    /// Builds a table from OS entropy.
    pub fn new() -> Self {
        Self::fill_from(&mut rand::thread_rng())
    }

    /// Builds a table deterministically from `seed`, for golden-hash tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::fill_from(&mut StdRng::seed_from_u64(seed))
    }

    fn index_of(p: Point) -> usize {
        p.y as usize * MAX_BOARD_SIZE as usize + p.x as usize
    }

    /// The random value associated with placing `color` at `p`. `color`
    /// must be `Black` or `White`.
    pub fn zkey(&self, p: Point, color: Color) -> u64 {
        let slot = match color {
            Color::Black => 0,
            Color::White => 1,
            _ => panic!("zkey is only defined for Black and White, got {:?}", color)
        };

        self.points[Self::index_of(p)][slot]
    }

    /// The random value associated with "it is `color`'s turn to move".
    /// `color` must be `Black` or `White`.
    pub fn side(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.side[0],
            Color::White => self.side[1],
            _ => panic!("side is only defined for Black and White, got {:?}", color)
        }
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref GLOBAL: ZobristTable = match *config::ZOBRIST_SEED {
        Some(seed) => ZobristTable::with_seed(seed),
        None => ZobristTable::new()
    };
}

/// The single process-wide table, initialized on first use behind a
/// single-shot guard (`lazy_static!`) so that concurrent first-touches from
/// multiple threads still produce exactly one table.
pub fn global() -> &'static ZobristTable {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_points_get_distinct_keys_with_overwhelming_probability() {
        let table = ZobristTable::with_seed(42);
        let a = table.zkey(Point::new(0, 0), Color::Black);
        let b = table.zkey(Point::new(1, 0), Color::Black);

        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_reproduces_the_same_table() {
        let a = ZobristTable::with_seed(1234);
        let b = ZobristTable::with_seed(1234);

        assert_eq!(a.zkey(Point::new(3, 3), Color::White), b.zkey(Point::new(3, 3), Color::White));
        assert_eq!(a.side(Color::Black), b.side(Color::Black));
    }

    #[test]
    fn black_and_white_keys_differ_for_the_same_point() {
        let table = ZobristTable::with_seed(7);
        let p = Point::new(4, 5);

        assert_ne!(table.zkey(p, Color::Black), table.zkey(p, Color::White));
    }

    #[test]
    fn side_values_differ_between_colors() {
        let table = ZobristTable::with_seed(7);

        assert_ne!(table.side(Color::Black), table.side(Color::White));
    }
}
