//! Static evaluation: material plus piece-square tables.

use super::pst::PST;
use super::types::{Color, Piece};
use super::Board;

impl Board {
    /// Static score of the position from the side to move's perspective, in
    /// centipawns.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut white_score = 0;
        for color in Color::BOTH {
            let mut side_score = 0;
            for piece in Piece::ALL {
                let table = &PST[piece.index()];
                for sq in self.pieces(color, piece) {
                    // Tables are written rank-8 first; mirror for white.
                    let idx = match color {
                        Color::White => sq.index() ^ 56,
                        Color::Black => sq.index(),
                    };
                    side_score += piece.value() + table[idx];
                }
            }
            white_score += color.sign() * side_score;
        }
        white_score * self.side_to_move.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new();
        assert_eq!(board.evaluate(), 0);
    }

    #[test]
    fn evaluation_is_symmetric_in_side_to_move() {
        let white_up: Board = "4k3/8/8/8/8/8/8/QQQQK3 w - - 0 1".parse().unwrap();
        let same_but_black: Board = "4k3/8/8/8/8/8/8/QQQQK3 b - - 0 1".parse().unwrap();
        assert_eq!(white_up.evaluate(), -same_but_black.evaluate());
        assert!(white_up.evaluate() > 0);
    }

    #[test]
    fn material_dominates_placement() {
        let rook_up: Board = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        assert!(rook_up.evaluate() > 400);
    }

    #[test]
    fn centralized_knight_beats_cornered_knight() {
        let centered: Board = "4k3/8/8/3N4/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let cornered: Board = "4k3/8/8/8/8/8/8/N3K3 w - - 0 1".parse().unwrap();
        assert!(centered.evaluate() > cornered.evaluate());
    }
}
