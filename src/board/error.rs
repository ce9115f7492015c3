//! Error types for board operations.

use std::fmt;

/// FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly 6 space-separated fields.
    WrongFieldCount { found: usize },
    /// Placement field must have exactly 8 ranks.
    WrongRankCount { found: usize },
    /// A rank did not describe exactly 8 files.
    WrongFileCount { rank: usize, files: usize },
    /// Unrecognized character in the placement field.
    InvalidPiece { letter: char },
    /// Side to move must be `w` or `b`.
    InvalidSideToMove { found: String },
    /// Castling field may only contain `KQkq` or `-`.
    InvalidCastling { letter: char },
    /// En passant field must be `-` or a valid square.
    InvalidEnPassant { found: String },
    /// Halfmove clock must be a non-negative integer.
    InvalidHalfmoveClock { found: String },
    /// Fullmove number must be a positive integer.
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "rank {rank} of FEN placement describes {files} files, expected 8")
            }
            FenError::InvalidPiece { letter } => {
                write!(f, "invalid piece character '{letter}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { letter } => {
                write!(f, "invalid castling character '{letter}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Move text parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move text must be 4-6 characters.
    InvalidLength { len: usize },
    /// A square within the move text did not parse.
    InvalidSquare { notation: String },
    /// Promotion letter must be one of `n`, `b`, `r`, `q`.
    InvalidPromotion { letter: char },
    /// Unrecognized extended flag tag.
    InvalidFlagTag { tag: char },
    /// No legal move in the current position matches the text.
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move text must be 4-6 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square in move '{notation}'")
            }
            MoveParseError::InvalidPromotion { letter } => {
                write!(f, "invalid promotion letter '{letter}'")
            }
            MoveParseError::InvalidFlagTag { tag } => {
                write!(f, "invalid move flag tag '{tag}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "no legal move matches '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Square notation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Text is not a file letter followed by a rank digit.
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_errors_describe_the_problem() {
        let err = FenError::WrongFieldCount { found: 3 };
        assert!(err.to_string().contains('3'));
        let err = FenError::InvalidPiece { letter: 'z' };
        assert!(err.to_string().contains("'z'"));
        let err = FenError::WrongFileCount { rank: 2, files: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn move_errors_describe_the_problem() {
        let err = MoveParseError::InvalidLength { len: 7 };
        assert!(err.to_string().contains('7'));
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }
}
