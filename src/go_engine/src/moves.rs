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

use crate::color::Color;
use crate::point::Point;

/// A move played by one color: either an on-board play, or a pass. There is
/// no separate "pass coordinate" sentinel — a pass simply carries no point,
/// so two passes of the same color compare equal regardless of how they were
/// constructed, exactly as spec.md requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Color, Point),
    Pass(Color)
}

impl Move {
    /// Returns the color to move.
    pub fn color(self) -> Color {
        match self {
            Move::Play(color, _) => color,
            Move::Pass(color) => color
        }
    }

    /// Returns the played coordinate, or `None` if this is a pass.
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Play(_, point) => Some(point),
            Move::Pass(_) => None
        }
    }

    pub fn is_pass(self) -> bool {
        self.point().is_none()
    }
}

/// The outcome of probing a candidate move against the current board state.
/// `Legal` is the only verdict under which `Board::play` may be called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Legality {
    Legal,
    NonEmpty,
    Suicidal,
    Ko
}

impl Legality {
    pub fn is_legal(self) -> bool {
        self == Legality::Legal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_of_same_color_are_equal_regardless_of_origin() {
        let a = Move::Pass(Color::Black);
        let b = Move::Pass(Color::Black);

        assert_eq!(a, b);
    }

    #[test]
    fn passes_of_different_colors_are_not_equal() {
        assert_ne!(Move::Pass(Color::Black), Move::Pass(Color::White));
    }

    #[test]
    fn plays_compare_by_coordinate() {
        let a = Move::Play(Color::Black, Point::new(2, 3));
        let b = Move::Play(Color::Black, Point::new(2, 4));

        assert_ne!(a, b);
    }
}
