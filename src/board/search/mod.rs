//! Negamax search with alpha-beta pruning, transposition-table caching, and
//! a capture-only quiescence extension at the depth horizon.
//!
//! The search drives the position through make/unmake pairs; it owns the
//! board and transposition table exclusively for the duration of one call
//! and runs single-threaded to completion of the requested depth.

mod constants;
mod ordering;

use crate::tt::{Bound, TranspositionTable};

use self::constants::{DEFAULT_DEPTH, DEFAULT_LOG_EVERY, INFINITY};
use self::ordering::order_moves;

use super::types::{Color, Move};
use super::Board;

pub use self::constants::{MATE_SCORE, MATE_THRESHOLD};

/// Search configuration.
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Full-width search depth in plies.
    pub depth: u32,
    /// Emit a progress log record every this many nodes.
    pub log_every: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_DEPTH,
            log_every: DEFAULT_LOG_EVERY,
        }
    }
}

/// Outcome of a completed search.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    /// Best move found, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score of the position from the side to move's perspective. With no
    /// legal moves this is the terminal score: `-MATE_SCORE` in check
    /// (checkmate), `0` otherwise (stalemate).
    pub score: i32,
    /// Nodes visited, including quiescence nodes.
    pub nodes: u64,
}

/// Search `board` to `options.depth` and return the best move found.
///
/// The transposition table is only a cache: warm or cold, the same position
/// and options produce the same move and score, only the node count differs.
pub fn find_best_move(
    board: &mut Board,
    tt: &mut TranspositionTable,
    options: &SearchOptions,
) -> SearchReport {
    let mut searcher = Searcher {
        board,
        tt,
        log_every: options.log_every.max(1),
        nodes: 0,
    };
    searcher.root(options.depth.max(1))
}

struct Searcher<'a> {
    board: &'a mut Board,
    tt: &'a mut TranspositionTable,
    log_every: u64,
    nodes: u64,
}

impl Searcher<'_> {
    fn root(&mut self, depth: u32) -> SearchReport {
        let us = self.board.side_to_move();
        let hash = self.board.hash();
        let tt_move = self.tt.probe(hash).and_then(|entry| entry.best_move);

        let mut alpha = -INFINITY;
        let mut best_move = None;
        let moves = self.board.generate_moves();
        for (mv, _) in order_moves(self.board, &moves, tt_move).iter() {
            if mv.is_castle() && !self.board.castle_path_is_safe(mv) {
                continue;
            }
            let info = self.board.make_move(mv);
            if !self.board.checkers(us).is_empty() {
                self.board.unmake_move(info);
                continue;
            }
            let score = -self.negamax(depth - 1, 1, -INFINITY, -alpha);
            self.board.unmake_move(info);
            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }
        }

        let score = match best_move {
            Some(mv) => {
                self.tt
                    .store(hash, depth, score_to_tt(alpha, 0), Bound::Exact, Some(mv));
                alpha
            }
            None => terminal_score(self.board, us, 0),
        };

        log::debug!(
            "search done: depth {depth} score {score} nodes {} best {:?}",
            self.nodes,
            best_move
        );
        SearchReport {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn negamax(&mut self, depth: u32, ply: u32, mut alpha: i32, beta: i32) -> i32 {
        self.count_node();

        let hash = self.board.hash();
        let mut tt_move = None;
        if let Some(entry) = self.tt.probe(hash) {
            tt_move = entry.best_move;
            if entry.depth >= depth {
                let score = score_from_tt(entry.score, ply);
                match entry.bound {
                    Bound::Exact => return score,
                    Bound::Lower if score >= beta => return score,
                    Bound::Upper if score <= alpha => return score,
                    _ => {}
                }
            }
        }

        if depth == 0 {
            return self.quiesce(ply, alpha, beta);
        }

        let us = self.board.side_to_move();
        let original_alpha = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        let moves = self.board.generate_moves();
        for (mv, _) in order_moves(self.board, &moves, tt_move).iter() {
            if mv.is_castle() && !self.board.castle_path_is_safe(mv) {
                continue;
            }
            let info = self.board.make_move(mv);
            if !self.board.checkers(us).is_empty() {
                self.board.unmake_move(info);
                continue;
            }
            let score = -self.negamax(depth - 1, ply + 1, -beta, -alpha);
            self.board.unmake_move(info);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                // Fail high: best_score is only a lower bound.
                self.tt
                    .store(hash, depth, score_to_tt(best_score, ply), Bound::Lower, best_move);
                return best_score;
            }
        }

        if best_move.is_none() {
            return terminal_score(self.board, us, ply);
        }

        let bound = if alpha > original_alpha {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.tt
            .store(hash, depth, score_to_tt(best_score, ply), bound, best_move);
        best_score
    }

    /// Capture-only extension search past the depth horizon. The static
    /// evaluation stands pat as the score floor so quiet positions terminate
    /// immediately.
    fn quiesce(&mut self, ply: u32, mut alpha: i32, beta: i32) -> i32 {
        self.count_node();

        let stand_pat = self.board.evaluate();
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let us = self.board.side_to_move();
        let mut best_score = stand_pat;
        let captures = self.board.generate_captures();
        for (mv, _) in order_moves(self.board, &captures, None).iter() {
            let info = self.board.make_move(mv);
            if !self.board.checkers(us).is_empty() {
                self.board.unmake_move(info);
                continue;
            }
            let score = -self.quiesce(ply + 1, -beta, -alpha);
            self.board.unmake_move(info);

            if score > best_score {
                best_score = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }
        best_score
    }

    #[inline]
    fn count_node(&mut self) {
        self.nodes += 1;
        if self.nodes % self.log_every == 0 {
            log::debug!("search progress: {} nodes", self.nodes);
        }
    }
}

/// Score for a side with no legal moves: mated (biased so shallower mates
/// score worse for the mated side) or stalemated.
fn terminal_score(board: &Board, us: Color, ply: u32) -> i32 {
    if board.is_in_check(us) {
        -(MATE_SCORE - ply as i32)
    } else {
        0
    }
}

/// Convert a root-relative mate score to a node-relative one for storage.
fn score_to_tt(score: i32, ply: u32) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

/// Inverse of [`score_to_tt`].
fn score_from_tt(score: i32, ply: u32) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}
