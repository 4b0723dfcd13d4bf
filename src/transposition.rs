/*
  Marrow, a chess engine core.
  Copyright (C) 2026 The Marrow Authors

  Marrow is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Marrow is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! A transposition table for caching search results by position hash.
//!
//! The teacher's table uses an unsafe, cache-line-bucketed lock-free layout sized for concurrent
//! probing from multiple search threads. This crate performs single-threaded search only, so the
//! table here is a plain safe `Vec` sized to a power of two, indexed by `hash & mask`, with one
//! entry per slot and always-replace on collision.

use crate::moves::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which side of the true minimax value a stored score bounds.
pub enum BoundType {
    /// The stored score is exact: a principal-variation value.
    Exact,
    /// The stored score is an upper bound (search failed low against alpha).
    AlphaUpper,
    /// The stored score is a lower bound (search failed high against beta).
    BetaLower,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: BoundType,
    pub best_move: Option<Move>,
}

/// A direct-mapped transposition table keyed by Zobrist hash.
pub struct TTable {
    slots: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TTable {
    #[must_use]
    /// Build a table sized to hold at least `capacity` entries, rounded up to the next power of
    /// two so that the slot index is a cheap `hash & mask` rather than a modulo.
    pub fn with_capacity(capacity: usize) -> TTable {
        let slot_count = capacity.max(1).next_power_of_two();
        TTable { slots: vec![None; slot_count], mask: slot_count - 1 }
    }

    fn slot_index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    #[must_use]
    /// Look up an entry by `hash`. Returns `None` both on a true miss and on an index collision
    /// with a different hash (the slot stores only one entry, and its `hash` field disambiguates).
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let entry = self.slots[self.slot_index(hash)]?;
        if entry.hash == hash {
            Some(entry)
        } else {
            None
        }
    }

    /// Store `entry`, always replacing whatever previously occupied that slot. A simple
    /// always-replace policy is adequate at the depths this crate's iterative deepening reaches
    /// without a parallel search competing for the same slots.
    pub fn store(&mut self, entry: TTEntry) {
        let idx = self.slot_index(entry.hash);
        self.slots[idx] = Some(entry);
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sample_move() -> Move {
        use crate::moves::MoveFlags;
        Move::new(Square::E1, Square::H1, Piece::King, None, None, false, MoveFlags::default())
    }

    #[test]
    fn store_then_probe_round_trips() {
        let mut tt = TTable::with_capacity(1024);
        let entry = TTEntry {
            hash: 0xdead_beef,
            depth: 4,
            score: 120,
            bound: BoundType::Exact,
            best_move: Some(sample_move()),
        };
        tt.store(entry);
        let probed = tt.probe(0xdead_beef).unwrap();
        assert_eq!(probed.score, 120);
        assert_eq!(probed.depth, 4);
    }

    #[test]
    fn probe_miss_returns_none() {
        let tt = TTable::with_capacity(1024);
        assert!(tt.probe(42).is_none());
    }

    #[test]
    fn colliding_hash_at_same_slot_is_reported_as_a_miss() {
        let mut tt = TTable::with_capacity(1);
        let entry = TTEntry {
            hash: 7,
            depth: 1,
            score: 0,
            bound: BoundType::Exact,
            best_move: None,
        };
        tt.store(entry);
        assert!(tt.probe(8).is_none());
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut tt = TTable::with_capacity(16);
        tt.store(TTEntry { hash: 1, depth: 1, score: 1, bound: BoundType::Exact, best_move: None });
        tt.clear();
        assert!(tt.probe(1).is_none());
    }
}
