//! Zobrist hashing for positions.
//!
//! A position's hash is the XOR of one key per (color, piece, square)
//! placement, a side-to-move key when black is to move, and one key per file
//! when an en passant target is set. Keys are drawn once from a fixed-seed
//! generator, so hashes are stable across runs and the incremental updates in
//! make/unmake stay consistent with a from-scratch recomputation.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    piece_keys: [[[u64; 64]; 6]; 2],
    black_to_move_key: u64,
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x0DD5_EED5_1234_5678);
        let mut piece_keys = [[[0u64; 64]; 6]; 2];
        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        let black_to_move_key = rng.gen();
        let mut en_passant_keys = [0u64; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }
        ZobristKeys {
            piece_keys,
            black_to_move_key,
            en_passant_keys,
        }
    }

    /// Key for a piece of `color` standing on `sq`.
    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    /// Key toggled whenever the side to move flips.
    #[inline]
    pub(crate) fn side_to_move(&self) -> u64 {
        self.black_to_move_key
    }

    /// Key for an active en passant target on `file`.
    #[inline]
    pub(crate) fn en_passant_file(&self, file: usize) -> u64 {
        self.en_passant_keys[file]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
