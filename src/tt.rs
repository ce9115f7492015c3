//! Transposition table: a fixed-capacity cache of search results keyed by
//! position hash.
//!
//! Replacement policy: a slot holding the same key is always overwritten; a
//! slot holding a different key is overwritten only when the incoming entry
//! was searched at least as deep ("depth-preferred"). The table never grows.

use crate::board::Move;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Score is the exact value of the node.
    Exact,
    /// Score is a lower bound (the node failed high).
    Lower,
    /// Score is an upper bound (the node failed low).
    Upper,
}

/// A probe result.
#[derive(Clone, Copy, Debug)]
pub struct TtEntry {
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Clone, Copy)]
struct Slot {
    key: u64,
    depth: u8,
    score: i16,
    bound: Option<Bound>,
    best_move: Move,
}

const EMPTY_SLOT: Slot = Slot {
    key: 0,
    depth: 0,
    score: 0,
    bound: None,
    best_move: Move::null(),
};

/// Default table size in megabytes.
pub const DEFAULT_TT_MB: usize = 64;

pub struct TranspositionTable {
    slots: Vec<Slot>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table using roughly `size_mb` megabytes; capacity is rounded
    /// down to a power of two.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        let count = (bytes / std::mem::size_of::<Slot>())
            .next_power_of_two()
            .max(2)
            / 2;
        TranspositionTable {
            slots: vec![EMPTY_SLOT; count],
            mask: count - 1,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Look up a previously stored result for `hash`.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TtEntry> {
        let slot = &self.slots[self.index(hash)];
        let bound = slot.bound?;
        if slot.key != hash {
            return None;
        }
        Some(TtEntry {
            depth: u32::from(slot.depth),
            score: i32::from(slot.score),
            bound,
            best_move: if slot.best_move == Move::null() {
                None
            } else {
                Some(slot.best_move)
            },
        })
    }

    /// Record a search result for `hash`.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound: Bound, best_move: Option<Move>) {
        let idx = self.index(hash);
        let slot = &mut self.slots[idx];
        let depth = depth.min(255) as u8;
        if slot.bound.is_some() && slot.key != hash && depth < slot.depth {
            return;
        }
        *slot = Slot {
            key: hash,
            depth,
            score: score.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16,
            bound: Some(bound),
            best_move: best_move.unwrap_or(Move::null()),
        };
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.slots.fill(EMPTY_SLOT);
    }

    /// Occupied slots per mille, sampling the front of the table.
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        let sample = self.slots.len().min(1000);
        let occupied = self.slots[..sample]
            .iter()
            .filter(|slot| slot.bound.is_some())
            .count();
        (occupied * 1000 / sample) as u32
    }
}
