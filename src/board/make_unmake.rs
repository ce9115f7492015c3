//! Reversible move application.
//!
//! `make_move` applies a pseudo-legal move unconditionally; whether the mover
//! left their own king in check is the caller's concern (see
//! [`Board::checkers`]). Every `make_move` must be paired with exactly one
//! `unmake_move`, innermost first.

use crate::zobrist::ZOBRIST;

use super::state::UnmakeInfo;
use super::types::{Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// The square an en passant capture removes a pawn from: the capture
    /// target's file on the capturing pawn's starting rank.
    fn en_passant_victim_square(mv: Move) -> Square {
        Square::new(mv.from().rank(), mv.to().file()).expect("squares are on the board")
    }

    /// Apply `mv` and return the information needed to reverse it.
    ///
    /// # Panics
    /// Panics if `mv`'s from square is empty; callers must pass moves
    /// generated for the current position.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let from = mv.from();
        let to = mv.to();

        let info_template = (
            self.en_passant,
            self.castling,
            self.halfmove_clock,
            self.hash,
        );

        let mut hash = self.hash;
        hash ^= ZOBRIST.side_to_move();
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.en_passant_file(ep.file());
        }

        let (_, piece) = self
            .piece_at(from)
            .expect("make_move: from square is empty");

        let mut captured = None;
        if mv.is_en_passant() {
            let victim_sq = Self::en_passant_victim_square(mv);
            self.remove_piece(victim_sq, opponent, Piece::Pawn);
            hash ^= ZOBRIST.piece(opponent, Piece::Pawn, victim_sq);
            captured = Some(Piece::Pawn);
        } else if mv.is_capture() {
            let (_, victim) = self
                .piece_at(to)
                .expect("capture move: to square is empty");
            self.remove_piece(to, opponent, victim);
            hash ^= ZOBRIST.piece(opponent, victim, to);
            captured = Some(victim);
        }

        self.remove_piece(from, mover, piece);
        hash ^= ZOBRIST.piece(mover, piece, from);
        let placed = mv.promotion_piece().unwrap_or(piece);
        self.set_piece(to, mover, placed);
        hash ^= ZOBRIST.piece(mover, placed, to);

        if mv.is_castle() {
            let back = mover.back_rank();
            let (rook_from_file, rook_to_file) = if mv.is_castle_kingside() {
                (7, 5)
            } else {
                (0, 3)
            };
            let rook_from = Square::new(back, rook_from_file).unwrap();
            let rook_to = Square::new(back, rook_to_file).unwrap();
            self.remove_piece(rook_from, mover, Piece::Rook);
            self.set_piece(rook_to, mover, Piece::Rook);
            hash ^= ZOBRIST.piece(mover, Piece::Rook, rook_from);
            hash ^= ZOBRIST.piece(mover, Piece::Rook, rook_to);
        }

        // Touching a king or rook home square, from either end, drops the
        // associated castling rights. Rights are not part of the hash.
        self.castling.clear_for_square(from);
        self.castling.clear_for_square(to);

        self.en_passant = None;
        if mv.is_double_pawn_push() {
            let ep = from
                .offset_rank(mover.pawn_direction())
                .expect("double push passes over the board");
            self.en_passant = Some(ep);
            hash ^= ZOBRIST.en_passant_file(ep.file());
        }

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = opponent;
        self.hash = hash;

        let (prev_en_passant, prev_castling, prev_halfmove_clock, prev_hash) = info_template;
        UnmakeInfo {
            mv,
            captured,
            prev_en_passant,
            prev_castling,
            prev_halfmove_clock,
            prev_hash,
        }
    }

    /// Reverse the most recent `make_move`. Calls must nest LIFO.
    pub fn unmake_move(&mut self, info: UnmakeInfo) {
        let mv = info.mv;
        let mover = self.side_to_move.opponent();
        let opponent = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        self.side_to_move = mover;
        self.en_passant = info.prev_en_passant;
        self.castling = info.prev_castling;
        self.halfmove_clock = info.prev_halfmove_clock;
        self.hash = info.prev_hash;
        if mover == Color::Black {
            self.fullmove_number -= 1;
        }

        let placed = if let Some(promoted) = mv.promotion_piece() {
            promoted
        } else {
            self.piece_at(to)
                .expect("unmake_move: to square is empty")
                .1
        };
        self.remove_piece(to, mover, placed);
        let moved = if mv.is_promotion() {
            Piece::Pawn
        } else {
            placed
        };
        self.set_piece(from, mover, moved);

        if mv.is_castle() {
            let back = mover.back_rank();
            let (rook_from_file, rook_to_file) = if mv.is_castle_kingside() {
                (7, 5)
            } else {
                (0, 3)
            };
            self.remove_piece(Square::new(back, rook_to_file).unwrap(), mover, Piece::Rook);
            self.set_piece(Square::new(back, rook_from_file).unwrap(), mover, Piece::Rook);
        }

        if mv.is_en_passant() {
            self.set_piece(Self::en_passant_victim_square(mv), opponent, Piece::Pawn);
        } else if let Some(victim) = info.captured {
            self.set_piece(to, opponent, victim);
        }

        debug_assert_eq!(self.hash, self.calculate_hash());
    }
}
