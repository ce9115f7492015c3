//! Pseudo-legal move generation and attack queries.
//!
//! Generation comes in two disjoint modes, captures and quiet moves, whose
//! union is the full pseudo-legal set. Moves are not filtered for leaving the
//! mover's own king in check; callers apply that filter (the search does it
//! inline, [`Board::generate_legal_moves`] does it for everyone else).

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use super::types::{Bitboard, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use super::Board;

impl Board {
    /// Squares of `by`'s pieces that attack `sq` under the current occupancy.
    #[must_use]
    pub fn attackers_to(&self, sq: Square, by: Color) -> Bitboard {
        let occupancy = self.all_occupied.0;
        let them = by.index();
        let pieces = &self.pieces[them];

        // A pawn of `by` attacks sq exactly when a pawn of the other color
        // standing on sq would attack the pawn's square.
        let mut attackers = pawn_attacks(by.opponent(), sq) & pieces[Piece::Pawn.index()].0;
        attackers |= knight_attacks(sq) & pieces[Piece::Knight.index()].0;
        attackers |= king_attacks(sq) & pieces[Piece::King.index()].0;
        attackers |= bishop_attacks(sq, occupancy)
            & (pieces[Piece::Bishop.index()].0 | pieces[Piece::Queen.index()].0);
        attackers |= rook_attacks(sq, occupancy)
            & (pieces[Piece::Rook.index()].0 | pieces[Piece::Queen.index()].0);
        Bitboard(attackers)
    }

    /// Opposing pieces giving check to `side`'s king; empty iff not in check.
    #[must_use]
    pub fn checkers(&self, side: Color) -> Bitboard {
        self.attackers_to(self.king_square(side), side.opponent())
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self, side: Color) -> bool {
        !self.checkers(side).is_empty()
    }

    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.push_captures(&mut moves);
        self.push_quiet_moves(&mut moves);
        moves
    }

    /// Pseudo-legal captures only (including en passant and capturing
    /// promotions).
    #[must_use]
    pub fn generate_captures(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.push_captures(&mut moves);
        moves
    }

    /// Pseudo-legal non-capturing moves only (including quiet promotions,
    /// double pushes, and castles).
    #[must_use]
    pub fn generate_quiet_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.push_quiet_moves(&mut moves);
        moves
    }

    fn push_captures(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let enemy = self.occupied[us.opponent().index()];
        let occupancy = self.all_occupied.0;
        let promotion_rank = us.promotion_rank();

        for from in self.pieces(us, Piece::Pawn) {
            let targets = Bitboard(pawn_attacks(us, from)) & enemy;
            for to in targets {
                if to.rank() == promotion_rank {
                    for piece in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, to, piece, true));
                    }
                } else {
                    moves.push(Move::capture(from, to));
                }
            }
            if let Some(ep) = self.en_passant {
                if pawn_attacks(us, from) & Bitboard::from_square(ep).0 != 0 {
                    moves.push(Move::en_passant(from, ep));
                }
            }
        }

        for from in self.pieces(us, Piece::Knight) {
            push_targets(moves, from, Bitboard(knight_attacks(from)) & enemy, true);
        }
        for from in self.pieces(us, Piece::Bishop) {
            push_targets(
                moves,
                from,
                Bitboard(bishop_attacks(from, occupancy)) & enemy,
                true,
            );
        }
        for from in self.pieces(us, Piece::Rook) {
            push_targets(
                moves,
                from,
                Bitboard(rook_attacks(from, occupancy)) & enemy,
                true,
            );
        }
        for from in self.pieces(us, Piece::Queen) {
            push_targets(
                moves,
                from,
                Bitboard(queen_attacks(from, occupancy)) & enemy,
                true,
            );
        }
        for from in self.pieces(us, Piece::King) {
            push_targets(moves, from, Bitboard(king_attacks(from)) & enemy, true);
        }
    }

    fn push_quiet_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let empty = !self.all_occupied;
        let occupancy = self.all_occupied.0;
        let promotion_rank = us.promotion_rank();
        let start_rank = us.pawn_start_rank();
        let direction = us.pawn_direction();

        for from in self.pieces(us, Piece::Pawn) {
            let Some(one) = from.offset_rank(direction) else {
                continue;
            };
            if !self.is_square_empty(one) {
                continue;
            }
            if one.rank() == promotion_rank {
                for piece in PROMOTION_PIECES {
                    moves.push(Move::promotion(from, one, piece, false));
                }
            } else {
                moves.push(Move::quiet(from, one));
                if from.rank() == start_rank {
                    let two = one.offset_rank(direction).expect("still on the board");
                    if self.is_square_empty(two) {
                        moves.push(Move::double_pawn_push(from, two));
                    }
                }
            }
        }

        for from in self.pieces(us, Piece::Knight) {
            push_targets(moves, from, Bitboard(knight_attacks(from)) & empty, false);
        }
        for from in self.pieces(us, Piece::Bishop) {
            push_targets(
                moves,
                from,
                Bitboard(bishop_attacks(from, occupancy)) & empty,
                false,
            );
        }
        for from in self.pieces(us, Piece::Rook) {
            push_targets(
                moves,
                from,
                Bitboard(rook_attacks(from, occupancy)) & empty,
                false,
            );
        }
        for from in self.pieces(us, Piece::Queen) {
            push_targets(
                moves,
                from,
                Bitboard(queen_attacks(from, occupancy)) & empty,
                false,
            );
        }
        for from in self.pieces(us, Piece::King) {
            push_targets(moves, from, Bitboard(king_attacks(from)) & empty, false);
        }

        self.push_castles(moves);
    }

    fn push_castles(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let back = us.back_rank();
        let king_home = Square::new(back, 4).unwrap();
        if self.pieces(us, Piece::King) != Bitboard::from_square(king_home) {
            return;
        }

        if self.castling.has(us, true)
            && self.is_square_empty(Square::new(back, 5).unwrap())
            && self.is_square_empty(Square::new(back, 6).unwrap())
            && self.piece_at(Square::new(back, 7).unwrap()) == Some((us, Piece::Rook))
        {
            moves.push(Move::castle_kingside(
                king_home,
                Square::new(back, 6).unwrap(),
            ));
        }
        if self.castling.has(us, false)
            && self.is_square_empty(Square::new(back, 1).unwrap())
            && self.is_square_empty(Square::new(back, 2).unwrap())
            && self.is_square_empty(Square::new(back, 3).unwrap())
            && self.piece_at(Square::new(back, 0).unwrap()) == Some((us, Piece::Rook))
        {
            moves.push(Move::castle_queenside(
                king_home,
                Square::new(back, 2).unwrap(),
            ));
        }
    }

    /// Whether the king's path for a castle move is free of enemy attacks.
    ///
    /// Castle generation only checks occupancy; this covers the "not castling
    /// out of, through, or into check" rule and is applied by the legality
    /// filter and by the search.
    #[must_use]
    pub fn castle_path_is_safe(&self, mv: Move) -> bool {
        debug_assert!(mv.is_castle());
        let us = self.side_to_move;
        let them = us.opponent();
        let back = mv.from().rank();
        let mid_file = if mv.is_castle_kingside() { 5 } else { 3 };
        let mid = Square::new(back, mid_file).unwrap();
        self.attackers_to(mv.from(), them).is_empty()
            && self.attackers_to(mid, them).is_empty()
            && self.attackers_to(mv.to(), them).is_empty()
    }

    /// Fully legal moves: pseudo-legal moves minus those leaving the mover's
    /// king in check, with castle paths verified.
    #[must_use]
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let us = self.side_to_move;
        let mut legal = MoveList::new();
        for &mv in &self.generate_moves() {
            if mv.is_castle() && !self.castle_path_is_safe(mv) {
                continue;
            }
            let info = self.make_move(mv);
            if self.checkers(us).is_empty() {
                legal.push(mv);
            }
            self.unmake_move(info);
        }
        legal
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for &mv in &moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(info);
        }
        nodes
    }
}

fn push_targets(moves: &mut MoveList, from: Square, targets: Bitboard, captures: bool) {
    for to in targets {
        moves.push(if captures {
            Move::capture(from, to)
        } else {
            Move::quiet(from, to)
        });
    }
}
