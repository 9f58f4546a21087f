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

//! Turns a `Board` into the tensor a neural network training pipeline
//! consumes: a stack of per-point planes plus a small scalar feature
//! vector. Purely a read — extraction never mutates the `Board` it is
//! given (besides incidental union-find path compression, which does not
//! touch the logical position, see `GroupIndex::root_of`).

use crate::board::{Board, GRID_LEN, STRIDE};
use crate::color::Color;
use crate::moves::{Legality, Move};
use crate::point::Point;
use crate::ruleset::{FirstPassBonusRule, ScoringRule};

/// The fixed `H`/`W` of the feature tensor: the padded grid's side, so the
/// shape never depends on the board's actual size.
pub const GRID: usize = STRIDE;
pub const NUM_PLANES: usize = 18;
pub const NUM_SCALARS: usize = 8;

/// How the `[H, W, C]` plane stack is laid out in a flat `Vec<f32>`.
/// Mirrors the teacher's `Order`/`CHW`/`CHW_VECT_C` generic-over-memory-
/// layout convention: the semantics (§4.6) never change, only which axis
/// varies fastest in memory.
pub trait Layout {
    fn index(row: usize, col: usize, channel: usize) -> usize;
}

/// Channel-last: `(row * GRID + col) * NUM_PLANES + channel`. The layout
/// spec.md's `[H, W, 18]` shape describes directly.
pub struct Hwc;

impl Layout for Hwc {
    fn index(row: usize, col: usize, channel: usize) -> usize {
        (row * GRID + col) * NUM_PLANES + channel
    }
}

/// Channel-first: `channel * GRID * GRID + row * GRID + col`.
pub struct Chw;

impl Layout for Chw {
    fn index(row: usize, col: usize, channel: usize) -> usize {
        channel * GRID * GRID + row * GRID + col
    }
}

fn plane_len() -> usize {
    GRID * GRID * NUM_PLANES
}

impl Board {
    /// The stacked per-point tensor planes for `to_play`, in layout `L`.
    ///
    /// Plane order (§4.6):
    /// 0. legal for `to_play`
    /// 1. `to_play`'s stone present
    /// 2. opponent's stone present
    /// 3. on-board mask
    /// 4. would be a ko point for `to_play`
    /// 5-8. own-group liberty count, one-hot over `{1, 2, 3, 4+}`
    /// 9-12. opponent-group liberty count, one-hot over `{1, 2, 3, 4+}`
    /// 13-17. move history, one-hot over the 5 most recent moves (oldest to
    ///    most recent is plane 17 down to plane 13); a pass consumes its
    ///    slot without marking any point.
    ///
    /// # Arguments
    ///
    /// * `to_play` - must equal `self.expected_to_move()`; this is a
    ///   feature vector *for the side about to move*, not an arbitrary
    ///   hypothetical perspective.
    ///
    pub fn feature_planes<L: Layout>(&self, to_play: Color) -> Vec<f32> {
        assert_eq!(
            to_play, self.expected_to_move(),
            "feature_planes queried for a color other than the side to move"
        );

        let mut planes = vec![0.0f32; plane_len()];

        for index in 0..GRID_LEN {
            let row = index / STRIDE;
            let col = index % STRIDE;
            let color = self.cells[index];

            if color == Color::OffBoard {
                continue;
            }

            planes[L::index(row, col, 3)] = 1.0;

            match color {
                Color::Black | Color::White => {
                    let own = color == to_play;
                    planes[L::index(row, col, if own { 1 } else { 2 })] = 1.0;

                    let root = self.groups.root_of(index);
                    let liberties = self.groups.liberty_count(root).min(4);
                    let base = if own { 5 } else { 9 };
                    planes[L::index(row, col, base + liberties - 1)] = 1.0;
                },
                Color::Empty => {
                    let p = self.point_of(index);

                    match self.legality(Move::Play(to_play, p)) {
                        Legality::Legal => planes[L::index(row, col, 0)] = 1.0,
                        Legality::Ko => planes[L::index(row, col, 4)] = 1.0,
                        _ => {}
                    }
                },
                Color::OffBoard => unreachable!("off-board cells are skipped above")
            }
        }

        for d in 0..5 {
            if let Some(point) = self.history.iter().rev().nth(d).and_then(|mv| mv.point()) {
                let index = self.index_of(point);
                let row = index / STRIDE;
                let col = index % STRIDE;

                planes[L::index(row, col, 13 + d)] = 1.0;
            }
        }

        #[cfg(feature = "trace-features")]
        {
            eprintln!("-- feature_planes(to_play = {:?}) --", to_play);
            eprintln!("{}", self);
            eprintln!("{} of {} plane entries set", planes.iter().filter(|&&v| v == 1.0).count(), planes.len());
        }

        planes
    }

    /// The 8-element scalar feature vector for `to_play` (§4.6):
    ///
    /// 0. komi (plus the first-pass button, when in effect), signed for
    ///    `to_play` and normalized by `/15`
    /// 1. `1.0` iff some empty on-board point would be a ko for `to_play`
    /// 2. `1.0` under territory scoring, `0.0` under area scoring
    /// 3. the capture differential, signed for `to_play` and normalized by
    ///    `/15`
    /// 4. `(setup_count + history.len()) / (size.x * size.y)`
    /// 5-7. whether each of the 3 most recent moves was a pass
    ///
    pub fn scalar_features(&self, to_play: Color) -> [f32; NUM_SCALARS] {
        assert_eq!(
            to_play, self.expected_to_move(),
            "scalar_features queried for a color other than the side to move"
        );

        let button = self.ruleset.first_pass_bonus_rule == FirstPassBonusRule::Bonus;
        let bonus = if button {
            self.komi()
                - if self.first_to_pass == Color::Black { 0.5 } else { 0.0 }
                + if self.first_to_pass == Color::White { 0.5 } else { 0.0 }
        } else {
            self.komi()
        };
        let signed_bonus = if to_play == Color::White { bonus } else { -bonus };

        let mut any_ko = false;
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let p = Point::new(x, y);

                if self.color_at(p) == Color::Empty
                    && self.legality(Move::Play(to_play, p)) == Legality::Ko
                {
                    any_ko = true;
                }
            }
        }

        let signed_captures = if to_play == Color::White {
            -(self.captures_net as f32)
        } else {
            self.captures_net as f32
        };

        let density = (self.setup_count as f32 + self.history.len() as f32) / self.size.area() as f32;

        let mut out = [0.0f32; NUM_SCALARS];
        out[0] = signed_bonus / 15.0;
        out[1] = if any_ko { 1.0 } else { 0.0 };
        out[2] = if self.ruleset.scoring_rule == ScoringRule::Territory { 1.0 } else { 0.0 };
        out[3] = signed_captures / 15.0;
        out[4] = density;

        for (d, slot) in out[5..8].iter_mut().enumerate() {
            *slot = match self.history.iter().rev().nth(d) {
                Some(mv) if mv.is_pass() => 1.0,
                _ => 0.0
            };
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Size;
    use crate::ruleset::Ruleset;

    #[test]
    fn empty_board_every_point_is_legal_and_on_board() {
        let board = Board::new(Size::square(9), 7.5, Ruleset::TROMP_TAYLOR, 0);
        let planes = board.feature_planes::<Hwc>(Color::Black);

        for y in 0..9usize {
            for x in 0..9usize {
                let row = y + 1;
                let col = x + 1;

                assert_eq!(planes[Hwc::index(row, col, 0)], 1.0);
                assert_eq!(planes[Hwc::index(row, col, 3)], 1.0);
                assert_eq!(planes[Hwc::index(row, col, 1)], 0.0);
                assert_eq!(planes[Hwc::index(row, col, 2)], 0.0);
            }
        }

        assert_eq!(planes[Hwc::index(0, 0, 3)], 0.0, "padding ring must read as off-board");
    }

    #[test]
    fn stone_planes_mark_owner_and_liberties() {
        let mut board = Board::new(Size::square(9), 7.5, Ruleset::TROMP_TAYLOR, 0);
        board.play(Move::Play(Color::Black, Point::new(4, 4)));

        let planes = board.feature_planes::<Hwc>(Color::White);
        let (row, col) = (5, 5); // (4,4) shifted by the one-cell padding

        assert_eq!(planes[Hwc::index(row, col, 2)], 1.0, "opponent stone plane");
        assert_eq!(planes[Hwc::index(row, col, 1)], 0.0);
        assert_eq!(planes[Hwc::index(row, col, 9 + 4 - 1)], 1.0, "4 liberties, opponent one-hot");
    }

    #[test]
    fn history_planes_skip_passes_but_still_consume_a_slot() {
        let mut board = Board::new(Size::square(9), 0.0, Ruleset::TROMP_TAYLOR, 0);
        board.play(Move::Play(Color::Black, Point::new(0, 0)));
        board.play(Move::Pass(Color::White));

        let planes = board.feature_planes::<Hwc>(Color::Black);

        // d=0 is the pass: no point is marked on plane 13.
        assert!(planes[0..(GRID * GRID * NUM_PLANES)]
            .chunks(NUM_PLANES)
            .all(|cell| cell[13] == 0.0));

        // d=1 is the black play at (0,0): plane 14 marks it.
        assert_eq!(planes[Hwc::index(1, 1, 14)], 1.0);
    }

    #[test]
    fn layouts_agree_on_which_cells_are_set() {
        let board = Board::new(Size::square(5), 7.5, Ruleset::TROMP_TAYLOR, 0);
        let hwc = board.feature_planes::<Hwc>(Color::Black);
        let chw = board.feature_planes::<Chw>(Color::Black);

        for row in 0..GRID {
            for col in 0..GRID {
                for channel in 0..NUM_PLANES {
                    assert_eq!(hwc[Hwc::index(row, col, channel)], chw[Chw::index(row, col, channel)]);
                }
            }
        }
    }

    #[test]
    fn scalar_features_reflect_komi_and_scoring_rule() {
        let board = Board::new(Size::square(9), 7.5, Ruleset::JAPANESE, 0);
        let scalars = board.scalar_features(Color::Black);

        assert_eq!(scalars[0], -7.5 / 15.0);
        assert_eq!(scalars[2], 1.0, "territory scoring flag");
    }

    #[test]
    fn scalar_feature_zero_flips_sign_with_to_play() {
        let board = Board::new(Size::square(9), 7.5, Ruleset::TROMP_TAYLOR, 0);

        assert_eq!(board.scalar_features(Color::Black)[0], -7.5 / 15.0);
    }
}
