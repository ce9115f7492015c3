//! Move ordering: transposition-table move, then captures by MVV-LVA, then
//! quiet moves.

use crate::board::types::{Move, MoveList, Piece, ScoredMoveList};
use crate::board::Board;

use super::constants::{CAPTURE_SCORE, TT_MOVE_SCORE};

/// Most-valuable-victim / least-valuable-attacker score for a capture.
fn mvv_lva(board: &Board, mv: Move) -> i32 {
    let victim = if mv.is_en_passant() {
        Piece::Pawn
    } else {
        board
            .piece_at(mv.to())
            .map_or(Piece::Pawn, |(_, piece)| piece)
    };
    let attacker = board
        .piece_at(mv.from())
        .map_or(Piece::Pawn, |(_, piece)| piece);
    victim.value() * 10 - attacker.value()
}

/// Attach ordering scores and sort descending. Ties resolve on the packed
/// move value, keeping the order deterministic.
pub(crate) fn order_moves(board: &Board, moves: &MoveList, tt_move: Option<Move>) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        let score = if Some(mv) == tt_move {
            TT_MOVE_SCORE
        } else if mv.is_capture() {
            CAPTURE_SCORE + mvv_lva(board, mv)
        } else {
            0
        };
        scored.push(mv, score);
    }
    scored.sort_by_score_desc();
    scored
}
