//! Castling rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const WHITE_KINGSIDE: u8 = 1 << 0;
const WHITE_QUEENSIDE: u8 = 1 << 1;
const BLACK_KINGSIDE: u8 = 1 << 2;
const BLACK_QUEENSIDE: u8 = 1 << 3;

/// The four castling permissions as a 4-bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit(color, kingside) != 0
    }

    #[inline]
    pub fn grant(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit(color, kingside);
    }

    /// Drop every right whose king or rook home square is `sq`.
    ///
    /// Applied to both ends of a move, this covers the king moving, a rook
    /// moving, and a rook being captured on its home square.
    #[inline]
    pub fn clear_for_square(&mut self, sq: Square) {
        self.0 &= !Self::SQUARE_RIGHTS[sq.index()];
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn bit(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_KINGSIDE,
            (Color::White, false) => WHITE_QUEENSIDE,
            (Color::Black, true) => BLACK_KINGSIDE,
            (Color::Black, false) => BLACK_QUEENSIDE,
        }
    }

    /// Rights lost when a given square is vacated or captured on.
    const SQUARE_RIGHTS: [u8; 64] = {
        let mut table = [0u8; 64];
        table[0] = WHITE_QUEENSIDE; // a1
        table[4] = WHITE_KINGSIDE | WHITE_QUEENSIDE; // e1
        table[7] = WHITE_KINGSIDE; // h1
        table[56] = BLACK_QUEENSIDE; // a8
        table[60] = BLACK_KINGSIDE | BLACK_QUEENSIDE; // e8
        table[63] = BLACK_KINGSIDE; // h8
        table
    };
}
