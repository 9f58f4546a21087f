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

/// The color of a stone, or the lack of one.
///
/// `OffBoard` marks the one-cell padding ring around the playing area (see
/// `Board`) so that neighbour iteration never needs a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Empty = 0,
    Black = 1,
    White = 2,
    OffBoard = 3,
}

impl Color {
    /// Returns the other playing color. Panics if called on `Empty` or
    /// `OffBoard`, neither of which has an opposite.
    ///
    /// # Arguments
    ///
    /// * `self` -
    ///
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            _ => panic!("`opposite` is only defined for Black and White, got {:?}", self)
        }
    }
}
