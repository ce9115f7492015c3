//! Search constants.

use crate::board::types::MAX_PLY;

/// Widest score window; no real score reaches it.
pub(crate) const INFINITY: i32 = 30000;

/// Score for the side to move being checkmated at the root. A mate found at
/// ply `p` scores `-(MATE_SCORE - p)`, so faster mates score better.
pub const MATE_SCORE: i32 = 29000;

/// Scores at or beyond this magnitude are mate scores and carry a distance
/// component that must be re-based when passing through the transposition
/// table.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Ordering score for the transposition-table move; above every capture.
pub(crate) const TT_MOVE_SCORE: i32 = 1 << 20;

/// Base ordering score for captures; keeps the worst capture above every
/// quiet move.
pub(crate) const CAPTURE_SCORE: i32 = 100_000;

/// Default search depth in plies.
pub(crate) const DEFAULT_DEPTH: u32 = 5;

/// Default node interval between progress log records.
pub(crate) const DEFAULT_LOG_EVERY: u64 = 1 << 16;
