//! Search behavior tests: terminal scores, mate preference, caching.

use crate::board::{find_best_move, Board, SearchOptions, MATE_SCORE, MATE_THRESHOLD};
use crate::tt::TranspositionTable;

fn search(board: &mut Board, depth: u32) -> crate::board::SearchReport {
    let mut tt = TranspositionTable::new(8);
    let options = SearchOptions {
        depth,
        ..SearchOptions::default()
    };
    find_best_move(board, &mut tt, &options)
}

#[test]
fn finds_a_mate_in_one() {
    let mut board: Board = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1".parse().unwrap();
    let report = search(&mut board, 3);
    assert_eq!(report.best_move.unwrap().to_string(), "a1a8");
    assert_eq!(report.score, MATE_SCORE - 1);
}

#[test]
fn checkmated_root_scores_negative_mate() {
    // Fool's mate delivered; white has no legal moves.
    let mut board: Board =
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
    assert!(board.is_checkmate());
    let report = search(&mut board, 4);
    assert_eq!(report.best_move, None);
    assert_eq!(report.score, -MATE_SCORE);
}

#[test]
fn stalemated_root_scores_zero() {
    let mut board: Board = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
    assert!(board.is_stalemate());
    let report = search(&mut board, 4);
    assert_eq!(report.best_move, None);
    assert_eq!(report.score, 0);
}

#[test]
fn prefers_the_faster_mate() {
    // Mate in one is available; deeper mates must not be preferred to it.
    let mut board: Board = "3r2k1/5ppp/8/8/8/8/5PPP/3Q2K1 w - - 0 1".parse().unwrap();
    let report = search(&mut board, 5);
    assert_eq!(report.score, MATE_SCORE - 1);
    let mv = report.best_move.unwrap();
    let info = board.make_move(mv);
    assert!(board.is_checkmate());
    board.unmake_move(info);
}

#[test]
fn quiescence_sees_the_recapture_past_the_horizon() {
    // The d5 pawn is defended; grabbing it loses the queen to the recapture,
    // which only quiescence can see at depth 1.
    let mut board: Board = "4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1".parse().unwrap();
    let report = search(&mut board, 1);
    let mv = report.best_move.unwrap();
    assert_ne!(mv.to_string(), "d1d5");
    assert!(report.score.abs() < MATE_THRESHOLD);
}

#[test]
fn warm_transposition_table_changes_work_not_results() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let options = SearchOptions {
        depth: 4,
        ..SearchOptions::default()
    };

    let mut tt = TranspositionTable::new(8);
    let mut board: Board = fen.parse().unwrap();
    let cold = find_best_move(&mut board, &mut tt, &options);

    // Same table, same position: warm probe hits replace whole subtrees.
    let mut board: Board = fen.parse().unwrap();
    let warm = find_best_move(&mut board, &mut tt, &options);

    assert_eq!(cold.best_move, warm.best_move);
    assert_eq!(cold.score, warm.score);
    assert!(warm.nodes <= cold.nodes);

    // A cleared table reproduces the cold run exactly.
    tt.clear();
    let mut board: Board = fen.parse().unwrap();
    let fresh = find_best_move(&mut board, &mut tt, &options);
    assert_eq!(fresh.best_move, cold.best_move);
    assert_eq!(fresh.score, cold.score);
    assert_eq!(fresh.nodes, cold.nodes);
}

#[test]
fn search_leaves_the_board_unchanged() {
    let mut board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
        .parse()
        .unwrap();
    let before = board.clone();
    search(&mut board, 3);
    assert_eq!(board, before);
}

#[test]
fn deeper_search_still_finds_the_hanging_queen() {
    let mut board: Board = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1".parse().unwrap();
    for depth in 1..=4 {
        let report = search(&mut board, depth);
        assert_eq!(
            report.best_move.unwrap().to_string(),
            "d2d5",
            "depth {depth} should take the queen"
        );
    }
}
