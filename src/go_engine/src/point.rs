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

use std::cmp::Ordering;
use std::fmt;

/// A public, unpadded board coordinate. The origin is the top-left
/// intersection, `x` increases rightward (column), `y` increases downward
/// (row). This is the coordinate space every public API (`Board`, `Move`,
/// feature planes) speaks; the one-cell padding ring `Board` keeps
/// internally never leaks out through a `Point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u8,
    pub y: u8
}

impl Point {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Points are ordered row-major (`y` then `x`). Any total order over points
/// would do for the liberty/group set containers (§9 of the design notes);
/// row-major is picked and fixed here.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let col = if self.x < 8 { b'A' + self.x } else { b'B' + self.x };

        write!(f, "{}{}", col as char, self.y + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_row_major() {
        let a = Point::new(5, 0);
        let b = Point::new(0, 1);

        assert!(a < b, "row takes priority over column");
    }

    #[test]
    fn orders_by_column_within_a_row() {
        let a = Point::new(0, 3);
        let b = Point::new(1, 3);

        assert!(a < b);
    }
}
