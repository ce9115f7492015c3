//! Reversible move application tests.

use rand::prelude::*;

use crate::board::{Board, Color, Move, Piece, Square, UnmakeInfo};

fn find_move(board: &mut Board, text: &str) -> Move {
    board
        .parse_move(text)
        .unwrap_or_else(|err| panic!("move {text} not found: {err}"))
}

#[test]
fn quiet_move_round_trips() {
    let mut board = Board::new();
    let before = board.clone();
    let mv = find_move(&mut board, "g1f3");
    let info = board.make_move(mv);
    assert_ne!(board.hash(), before.hash());
    board.unmake_move(info);
    assert_eq!(board, before);
}

#[test]
fn capture_round_trips() {
    let mut board: Board = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"
        .parse()
        .unwrap();
    let before = board.clone();
    let mv = find_move(&mut board, "e4d5");
    assert!(mv.is_capture());
    let info = board.make_move(mv);
    board.unmake_move(info);
    assert_eq!(board, before);
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut board: Board = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3"
        .parse()
        .unwrap();
    let before = board.clone();
    let mv = find_move(&mut board, "e5f6");
    assert!(mv.is_en_passant());
    let info = board.make_move(mv);
    // The captured pawn sat on f5, not on the destination square.
    assert!(board.piece_at("f5".parse().unwrap()).is_none());
    assert_eq!(
        board.piece_at("f6".parse().unwrap()),
        Some((Color::White, Piece::Pawn))
    );
    board.unmake_move(info);
    assert_eq!(board, before);
}

#[test]
fn promotion_round_trips() {
    let mut board: Board = "8/P7/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
    let before = board.clone();
    let mv = find_move(&mut board, "a7a8q");
    let info = board.make_move(mv);
    assert_eq!(
        board.piece_at(Square::A8),
        Some((Color::White, Piece::Queen))
    );
    assert!(board.pieces(Color::White, Piece::Pawn).is_empty());
    board.unmake_move(info);
    assert_eq!(board, before);
}

#[test]
fn castling_moves_the_rook_both_ways() {
    let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
    let before = board.clone();

    let mv = find_move(&mut board, "e1g1");
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square::G1), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square::F1), Some((Color::White, Piece::Rook)));
    assert!(board.piece_at(Square::H1).is_none());
    assert!(!board.castling_rights().has(Color::White, true));
    board.unmake_move(info);
    assert_eq!(board, before);

    let mv = find_move(&mut board, "e1c1");
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square::C1), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square::D1), Some((Color::White, Piece::Rook)));
    board.unmake_move(info);
    assert_eq!(board, before);
}

#[test]
fn clocks_update_and_restore() {
    let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 7 11".parse().unwrap();
    let mv = find_move(&mut board, "a1a2");
    let info = board.make_move(mv);
    assert_eq!(board.halfmove_clock(), 8);
    assert_eq!(board.fullmove_number(), 11);
    let mv2 = find_move(&mut board, "a8a7");
    let info2 = board.make_move(mv2);
    assert_eq!(board.fullmove_number(), 12);
    board.unmake_move(info2);
    board.unmake_move(info);
    assert_eq!(board.halfmove_clock(), 7);
    assert_eq!(board.fullmove_number(), 11);
}

#[test]
fn hash_matches_recompute_after_random_playout() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut history: Vec<UnmakeInfo> = Vec::new();

    for _ in 0..60 {
        let moves = board.generate_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        history.push(board.make_move(mv));
        assert_eq!(board.hash(), board.calculate_hash());
    }

    while let Some(info) = history.pop() {
        board.unmake_move(info);
        assert_eq!(board.hash(), board.calculate_hash());
    }
    assert_eq!(board, Board::new());
}

#[test]
fn legal_move_set_is_stable_across_make_unmake() {
    let mut board = Board::new();
    let initial: Vec<String> = board
        .generate_legal_moves()
        .iter()
        .map(|m| m.extended())
        .collect();

    for &mv in &board.generate_legal_moves() {
        let info = board.make_move(mv);
        board.unmake_move(info);
    }

    let after: Vec<String> = board
        .generate_legal_moves()
        .iter()
        .map(|m| m.extended())
        .collect();
    assert_eq!(initial, after);
}
