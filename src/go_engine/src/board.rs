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

use std::collections::HashSet;
use std::fmt;

use crate::color::Color;
use crate::config;
use crate::group_index::GroupIndex;
use crate::moves::{Legality, Move};
use crate::point::Point;
use crate::ruleset::{FirstPassBonusRule, KoRule, Ruleset, SuicideRule};
use crate::zobrist;
use crate::MAX_BOARD_SIZE;

/// One cell of padding surrounds the playing rectangle on every side, so
/// that neighbour lookups never need a bounds check (§9 "padded grid as
/// border sentinel").
pub(crate) const PADDING: usize = 1;

/// The padded grid is always sized for the largest legal board, regardless
/// of the actual board's size, so that `Board::reset` never reallocates.
/// Also the fixed `H`/`W` of the feature tensor `features` produces — see
/// `features::GRID`.
pub(crate) const STRIDE: usize = MAX_BOARD_SIZE as usize + 2 * PADDING;
pub(crate) const GRID_LEN: usize = STRIDE * STRIDE;

const NORTH: isize = -(STRIDE as isize);
const SOUTH: isize = STRIDE as isize;
const WEST: isize = -1;
const EAST: isize = 1;

/// Fixed visiting order for the four orthogonal neighbours of a padded
/// index. The order does not affect correctness (§4.4), only the iteration
/// order of the hash-based liberty/capture sets it feeds, so it is fixed
/// once here rather than left to vary.
const NEIGHBOR_OFFSETS: [isize; 4] = [WEST, EAST, NORTH, SOUTH];

/// The dimensions of a board, in intersections. `x` is the column count,
/// `y` the row count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub x: u8,
    pub y: u8
}

impl Size {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn square(n: u8) -> Self {
        Self::new(n, n)
    }

    pub fn area(self) -> usize {
        self.x as usize * self.y as usize
    }
}

/// The incremental rules evaluator and group/liberty tracker for a single
/// Go position (§3, §4). A `Board` owns every piece of mutable state the
/// core needs: the padded color grid, the union-find group index, move and
/// Zobrist-key history, and the running capture/setup counters.
///
/// `Board` is not `Sync`/shared across threads; every `Board` does however
/// share the single process-wide Zobrist table (`zobrist::global`), which
/// is immutable after its single-shot initialization (§5).
#[derive(Clone)]
pub struct Board {
    pub(crate) size: Size,
    komi: f32,
    pub(crate) ruleset: Ruleset,
    handicap: u8,

    pub(crate) cells: Vec<Color>,
    pub(crate) groups: GroupIndex,
    pub(crate) history: Vec<Move>,
    pub(crate) first_to_pass: Color,
    pub(crate) captures_net: i32,
    pub(crate) setup_count: i32,
    key: u64,
    key_history: Vec<u64>
}

impl Board {
    /// The largest board size this engine supports on either axis.
    pub const MAX: u8 = MAX_BOARD_SIZE;

    /// Constructs a new board of the given size, komi, and ruleset.
    /// `handicap` is carried through unused by the core (reserved for a
    /// downstream scorer, exactly like `Ruleset::tax_rule` and
    /// `Ruleset::white_handicap_bonus_rule` — see SPEC_FULL.md §10.4).
    ///
    /// # Arguments
    ///
    /// * `size` - the playing rectangle's dimensions; each axis must be
    ///   `<= Board::MAX` and `<= config::MAX_SIZE` (the latter defaults to
    ///   the former, but can be narrowed with `GO_ENGINE_MAX_SIZE`).
    /// * `komi` - points compensation for moving second.
    /// * `ruleset` - the ko/suicide/scoring/tax configuration to play under.
    /// * `handicap` - the number of handicap stones the record this board
    ///   was built from declares; not interpreted here.
    ///
    pub fn new(size: Size, komi: f32, ruleset: Ruleset, handicap: u8) -> Self {
        let mut board = Self {
            size: Size::square(0),
            komi,
            ruleset,
            handicap,
            cells: vec![Color::OffBoard; GRID_LEN],
            groups: GroupIndex::new(GRID_LEN),
            history: Vec::new(),
            first_to_pass: Color::Empty,
            captures_net: 0,
            setup_count: 0,
            key: 0,
            key_history: Vec::new()
        };

        board.reset(size, komi, ruleset, handicap);
        board
    }

    /// Reinitializes every field in place, reusing the already-allocated
    /// padded grid rather than reallocating it (§5 resource policy).
    pub fn reset(&mut self, size: Size, komi: f32, ruleset: Ruleset, handicap: u8) {
        assert!(size.x >= 1 && size.y >= 1, "board size must be positive");
        assert!(size.x <= Self::MAX && size.y <= Self::MAX, "maximum size exceeded");

        let ceiling = *config::MAX_SIZE;
        assert!(
            size.x <= ceiling && size.y <= ceiling,
            "board size exceeds the configured GO_ENGINE_MAX_SIZE ceiling"
        );

        self.size = size;
        self.komi = komi;
        self.ruleset = ruleset;
        self.handicap = handicap;

        for row in 0..STRIDE {
            for col in 0..STRIDE {
                let on_board = row >= PADDING
                    && col >= PADDING
                    && row < PADDING + size.y as usize
                    && col < PADDING + size.x as usize;

                self.cells[row * STRIDE + col] = if on_board { Color::Empty } else { Color::OffBoard };
            }
        }

        self.groups.reset();
        self.history.clear();
        self.first_to_pass = Color::Empty;
        self.captures_net = 0;
        self.setup_count = 0;
        self.key = 0;

        self.key_history.clear();
        self.key_history.push(self.history_entry(0, Color::Black));
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn komi(&self) -> f32 {
        self.komi
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn handicap(&self) -> u8 {
        self.handicap
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn captures_net(&self) -> i32 {
        self.captures_net
    }

    pub fn setup_count(&self) -> i32 {
        self.setup_count
    }

    pub fn first_to_pass(&self) -> Color {
        self.first_to_pass
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn key_history(&self) -> &[u64] {
        &self.key_history
    }

    /// The color expected to play the next move: `Black` if no move has
    /// been played yet, otherwise the opposite of the last move's color.
    pub fn expected_to_move(&self) -> Color {
        match self.history.last() {
            None => Color::Black,
            Some(mv) => mv.color().opposite()
        }
    }

    pub fn color_at(&self, p: Point) -> Color {
        self.cells[self.index_of(p)]
    }

    pub fn is_on_board(&self, p: Point) -> bool {
        self.color_at(p) != Color::OffBoard
    }

    /// The number of liberties of the group occupying `p`, or `None` if `p`
    /// does not hold a stone.
    pub fn liberties_at(&self, p: Point) -> Option<usize> {
        let idx = self.index_of(p);

        match self.cells[idx] {
            Color::Black | Color::White => {
                let root = self.groups.root_of(idx);
                Some(self.groups.liberty_count(root))
            },
            _ => None
        }
    }

    pub(crate) fn index_of(&self, p: Point) -> usize {
        (p.y as usize + PADDING) * STRIDE + (p.x as usize + PADDING)
    }

    pub(crate) fn point_of(&self, index: usize) -> Point {
        let row = index / STRIDE;
        let col = index % STRIDE;

        Point::new((col - PADDING) as u8, (row - PADDING) as u8)
    }

    pub(crate) fn neighbors(&self, index: usize) -> [usize; 4] {
        let index = index as isize;

        [
            (index + NEIGHBOR_OFFSETS[0]) as usize,
            (index + NEIGHBOR_OFFSETS[1]) as usize,
            (index + NEIGHBOR_OFFSETS[2]) as usize,
            (index + NEIGHBOR_OFFSETS[3]) as usize
        ]
    }

    /// The value appended to `key_history` for a post-move (or initial)
    /// board state of `key`, given that `next_to_move` is to play next
    /// (§3 invariants, §4.4 step 5).
    fn history_entry(&self, key: u64, next_to_move: Color) -> u64 {
        match self.ruleset.ko_rule {
            KoRule::PositionalSuperko => key,
            KoRule::Simple | KoRule::SituationalSuperko => key ^ zobrist::global().side(next_to_move)
        }
    }

    /// Probes whether `mv` may be played right now. Purely a read: does not
    /// mutate the board, and is safe to call densely (feature extraction
    /// calls this at every empty on-board point).
    ///
    /// # Arguments
    ///
    /// * `mv` - the candidate move; `mv.color()` must equal
    ///   `self.expected_to_move()`.
    ///
    pub fn legality(&self, mv: Move) -> Legality {
        assert_eq!(
            mv.color(), self.expected_to_move(),
            "legality queried with a color contradicting the expected side to move"
        );

        let p = match mv.point() {
            None => return Legality::Legal,
            Some(p) => p
        };
        let c = mv.color();
        let idx = self.index_of(p);

        if self.cells[idx] != Color::Empty {
            return Legality::NonEmpty;
        }

        let opp = c.opposite();
        let mut new_key = self.key ^ zobrist::global().zkey(p, c);

        // Two-pass structure (§9): first collect hypothetical liberties and
        // the capture set without mutating anything, then apply the
        // capture hashes once each so repeated captures never XOR the same
        // key twice.
        let mut added_liberties: HashSet<usize> = HashSet::new();
        let mut captures: HashSet<usize> = HashSet::new();
        let mut connects_to_own_group = false;

        for n in self.neighbors(idx) {
            match self.cells[n] {
                Color::Empty => {
                    added_liberties.insert(n);
                },
                color if color == c => {
                    connects_to_own_group = true;
                    let root = self.groups.root_of(n);
                    added_liberties.extend(self.groups.liberties(root));
                },
                color if color == opp => {
                    let root = self.groups.root_of(n);
                    if self.groups.liberty_count(root) == 1 {
                        captures.insert(root);
                    }
                },
                _ => {}
            }
        }

        if captures.is_empty() {
            added_liberties.remove(&idx);

            if added_liberties.is_empty() {
                if self.ruleset.suicide_rule == SuicideRule::Disallowed || !connects_to_own_group {
                    return Legality::Suicidal;
                }

                // Legal suicide: the played stone is never really placed,
                // so un-XOR it, and every adjacent same-color component
                // dies with it instead.
                new_key ^= zobrist::global().zkey(p, c);

                for n in self.neighbors(idx) {
                    if self.cells[n] == c {
                        captures.insert(self.groups.root_of(n));
                    }
                }
            }
        }

        for &root in &captures {
            for &stone in self.groups.roster(root) {
                new_key ^= zobrist::global().zkey(self.point_of(stone), self.cells[stone]);
            }
        }

        if matches!(self.ruleset.ko_rule, KoRule::Simple | KoRule::SituationalSuperko) {
            new_key ^= zobrist::global().side(opp);
        }

        match self.ruleset.ko_rule {
            KoRule::Simple => {
                let len = self.key_history.len();

                if len >= 2 && new_key == self.key_history[len - 2] {
                    return Legality::Ko;
                }
            },
            KoRule::PositionalSuperko | KoRule::SituationalSuperko => {
                if self.key_history.contains(&new_key) {
                    return Legality::Ko;
                }
            }
        }

        Legality::Legal
    }

    /// Plays `mv`, which must be `Legal` (checked by an assertion — a
    /// non-legal `play` is a programmer error per §7).
    pub fn play(&mut self, mv: Move) {
        assert_eq!(
            mv.color(), self.expected_to_move(),
            "play called with a color contradicting the expected side to move"
        );
        assert!(self.legality(mv).is_legal(), "play called with a non-legal move");

        let c = mv.color();
        let opp = c.opposite();

        let p = match mv.point() {
            None => {
                if self.ruleset.first_pass_bonus_rule == FirstPassBonusRule::Bonus
                    && self.first_to_pass == Color::Empty
                {
                    self.key_history.clear();
                    self.key_history.push(self.history_entry(self.key, opp));
                }

                if self.first_to_pass == Color::Empty {
                    self.first_to_pass = c;
                }

                self.history.push(mv);
                return;
            },
            Some(p) => p
        };

        let idx = self.index_of(p);

        self.cells[idx] = c;
        self.key ^= zobrist::global().zkey(p, c);
        self.groups.new_singleton(idx);

        let mut capture_roots: Vec<usize> = Vec::with_capacity(4);

        for n in self.neighbors(idx) {
            match self.cells[n] {
                Color::Empty => {
                    let root = self.groups.find(idx);
                    self.groups.add_liberty(root, n);
                },
                color if color == c => {
                    let root = self.groups.find(n);
                    self.groups.remove_liberty(root, idx);
                    self.groups.unite(idx, n);
                },
                color if color == opp => {
                    let root = self.groups.find(n);
                    self.groups.remove_liberty(root, idx);

                    if self.groups.liberty_count(root) == 0 && !capture_roots.contains(&root) {
                        capture_roots.push(root);
                    }
                },
                _ => {}
            }
        }

        let own_root = self.groups.find(idx);
        if capture_roots.is_empty() && self.groups.liberty_count(own_root) == 0 {
            capture_roots.push(own_root);
        }

        for root in capture_roots {
            let stones: Vec<usize> = self.groups.roster(root).to_vec();
            let removed_color = self.cells[stones[0]];

            // The capture differential is tracked from the perspective of
            // the stone color removed, not the color that moved: a legal
            // suicide removes the mover's own stones, which must credit the
            // opponent (spec.md §8 scenario 3) exactly as if they had
            // captured them.
            let sign: i32 = if removed_color == Color::White { 1 } else { -1 };
            self.captures_net += sign * stones.len() as i32;

            for &stone in &stones {
                self.cells[stone] = Color::Empty;
                self.key ^= zobrist::global().zkey(self.point_of(stone), removed_color);

                for m in self.neighbors(stone) {
                    if self.cells[m] == removed_color.opposite() {
                        let mroot = self.groups.find(m);
                        self.groups.add_liberty(mroot, stone);
                    }
                }
            }

            self.groups.clear(root);
        }

        self.key_history.push(self.history_entry(self.key, opp));
        self.history.push(mv);
    }

    /// Places or erases a stone outside of normal play: no legality or ko
    /// accounting, no captures. See §4.5. Any invariant violation (an
    /// out-of-board target, overwriting one stone directly with another
    /// instead of erasing first, or placing a stone with zero resulting
    /// liberties) is a programmer error and asserts.
    pub fn setup(&mut self, mv: Move) {
        let p = match mv.point() {
            None => return,
            Some(p) => p
        };
        let c = mv.color();
        let idx = self.index_of(p);

        assert_ne!(self.cells[idx], Color::OffBoard, "setup target is off the playing rectangle");

        match c {
            Color::Black | Color::White => {
                assert_eq!(
                    self.cells[idx], Color::Empty,
                    "setup requires an empty target to place a stone; erase it first"
                );

                self.cells[idx] = c;
                self.key ^= zobrist::global().zkey(p, c);
                self.setup_count += 1;
                self.groups.new_singleton(idx);

                for n in self.neighbors(idx) {
                    match self.cells[n] {
                        Color::Empty => {
                            let root = self.groups.find(idx);
                            self.groups.add_liberty(root, n);
                        },
                        color if color == c => {
                            let root = self.groups.find(n);
                            self.groups.remove_liberty(root, idx);
                            self.groups.unite(idx, n);
                        },
                        color if color == c.opposite() => {
                            let root = self.groups.find(n);
                            self.groups.remove_liberty(root, idx);
                        },
                        _ => {}
                    }
                }

                let root = self.groups.find(idx);
                assert!(
                    self.groups.liberty_count(root) > 0,
                    "setup must not place a stone with zero resulting liberties"
                );
            },
            Color::Empty => {
                let removed = self.cells[idx];
                assert!(
                    removed == Color::Black || removed == Color::White,
                    "setup erase requires an existing stone at the target"
                );

                // A single erasure can split one group into several; there
                // is no cheap incremental "un-union", so the affected
                // group is rebuilt from its remaining members.
                let root = self.groups.find(idx);
                let remaining: Vec<usize> = self.groups.roster(root)
                    .iter()
                    .copied()
                    .filter(|&s| s != idx)
                    .collect();

                self.cells[idx] = Color::Empty;
                self.key ^= zobrist::global().zkey(p, removed);
                self.setup_count -= 1;
                self.groups.clear(root);

                for &s in &remaining {
                    self.groups.new_singleton(s);
                }

                for &s in &remaining {
                    for n in self.neighbors(s) {
                        if self.cells[n] == Color::Empty {
                            let r = self.groups.find(s);
                            self.groups.add_liberty(r, n);
                        } else if self.cells[n] == removed && remaining.contains(&n) {
                            self.groups.unite(s, n);
                        }
                    }
                }

                for n in self.neighbors(idx) {
                    if self.cells[n] == Color::Black || self.cells[n] == Color::White {
                        let r = self.groups.find(n);
                        self.groups.add_liberty(r, idx);
                    }
                }
            },
            Color::OffBoard => panic!("setup called with invalid color {:?}", c)
        }
    }

    /// A human-readable per-group liberty-count grid, used by the
    /// `trace-features` diagnostics path and by test failure messages.
    /// Grounded in the original's `BoardPrinter::print_liberties`
    /// (`examples/original_source/include/go_data_gen/board_print.hpp`).
    pub fn debug_liberties(&self) -> String {
        let mut out = String::new();

        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let idx = self.index_of(Point::new(x, y));

                match self.cells[idx] {
                    Color::Black | Color::White => {
                        let root = self.groups.root_of(idx);
                        out.push_str(&format!("{:2} ", self.groups.liberty_count(root)));
                    },
                    _ => out.push_str(" . ")
                }
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let symbol = match self.color_at(Point::new(x, y)) {
                    Color::Empty => '.',
                    Color::Black => 'X',
                    Color::White => 'O',
                    Color::OffBoard => unreachable!("on-board point reported as off-board")
                };

                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
