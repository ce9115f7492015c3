//! Board representation and game logic.
//!
//! Bitboard-based position with reversible move application, pseudo-legal
//! move generation backed by precomputed attack tables, and an alpha-beta
//! search on top.
//!
//! # Example
//! ```
//! use garnet::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod search;
mod state;
pub(crate) mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use search::{find_best_move, SearchOptions, SearchReport, MATE_SCORE, MATE_THRESHOLD};
pub use state::{Board, UnmakeInfo};
pub use types::{Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, Piece, Square};
