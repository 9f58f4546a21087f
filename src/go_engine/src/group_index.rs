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

/// Union-find over the padded grid's flat indices (§4.1). For every on-board
/// stone, `find` gives the root of its group; `roster`/`liberties` are only
/// authoritative at a root — entries for non-root members are stale and
/// must not be read directly.
///
/// Indices here are the padded grid's flat `usize` indices (row-major,
/// `y * stride + x`), not public `Point`s — `Board` is the only thing that
/// knows how to translate between the two. A small `HashSet` is used for
/// liberties rather than an ordered set: group liberty counts are small in
/// practice and membership/size are all that is ever needed (§9).
pub struct GroupIndex {
    parent: Vec<usize>,
    roster: Vec<Vec<usize>>,
    liberties: Vec<HashSet<usize>>
}

impl GroupIndex {
    /// Builds an index over a padded grid of `len` cells. Every cell starts
    /// out as its own (empty) singleton; `new_singleton` must be called
    /// before a cell's roster/liberties are meaningful.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            roster: vec![Vec::new(); len],
            liberties: vec![HashSet::new(); len]
        }
    }

    /// Resets every cell back to an empty, disjoint singleton. Reuses the
    /// already-allocated storage rather than reallocating it.
    pub fn reset(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i;
        }
        for roster in self.roster.iter_mut() {
            roster.clear();
        }
        for liberties in self.liberties.iter_mut() {
            liberties.clear();
        }
    }

    /// Returns the root of `index`'s component, compressing the path from
    /// `index` to the root as it goes.
    pub fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Returns the root of `index`'s component without compressing the
    /// path. Used by read-only callers (`Board::legality`, feature
    /// extraction) that must leave the board bitwise unchanged — `find`'s
    /// path compression is a mutation, harmless to the logical partition
    /// but not to that invariant.
    pub fn root_of(&self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Marks `index` as a freshly-placed stone's own group: a singleton with
    /// no liberties yet (the caller adds them per neighbour).
    pub fn new_singleton(&mut self, index: usize) {
        self.parent[index] = index;
        self.roster[index].clear();
        self.roster[index].push(index);
        self.liberties[index].clear();
    }

    /// Restores `index` to an empty, disjoint singleton after its stone has
    /// been removed (capture or erasing setup). The former root's roster
    /// and liberties are dropped; non-root members of the removed group are
    /// expected to also have `clear` called on them (a captured group is
    /// always removed in full).
    pub fn clear(&mut self, index: usize) {
        self.parent[index] = index;
        self.roster[index].clear();
        self.liberties[index].clear();
    }

    /// Unions the components containing `a` and `b`, merging the smaller
    /// roster/liberty set into the larger so that costs amortise (§9). A
    /// no-op if `a` and `b` are already in the same component. Ties break
    /// towards keeping `a`'s former root as the new root, which is
    /// deterministic given equal history.
    pub fn unite(&mut self, a: usize, b: usize) {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);

        if root_a == root_b {
            return;
        }

        if self.roster[root_a].len() < self.roster[root_b].len() {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parent[root_b] = root_a;

        let absorbed_roster = std::mem::take(&mut self.roster[root_b]);
        self.roster[root_a].extend(absorbed_roster);

        let absorbed_liberties = std::mem::take(&mut self.liberties[root_b]);
        self.liberties[root_a].extend(absorbed_liberties);
    }

    /// The stones belonging to the group rooted at `root`. `root` must
    /// already be a root (call `find` first).
    pub fn roster(&self, root: usize) -> &[usize] {
        &self.roster[root]
    }

    /// The empty points adjacent to the group rooted at `root`. `root` must
    /// already be a root (call `find` first).
    pub fn liberties(&self, root: usize) -> &HashSet<usize> {
        &self.liberties[root]
    }

    pub fn liberty_count(&self, root: usize) -> usize {
        self.liberties[root].len()
    }

    pub fn add_liberty(&mut self, root: usize, liberty: usize) {
        self.liberties[root].insert(liberty);
    }

    pub fn remove_liberty(&mut self, root: usize, liberty: usize) {
        self.liberties[root].remove(&liberty);
    }
}
