//! FEN parsing and formatting, plus protocol move resolution.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::types::{CastlingRights, Color, Move, Piece, Square};
use super::Board;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a position from a 6-field FEN string.
    ///
    /// The placement field must describe exactly 8 ranks of exactly 8 files;
    /// the remaining fields are validated per their grammar. Errors name the
    /// offending field.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (i, rank_text) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(FenError::InvalidPiece { letter: c });
                    }
                    file += run as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or(FenError::InvalidPiece { letter: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let sq = Square::new(rank, file).ok_or(FenError::WrongFileCount {
                        rank: i,
                        files: file + 1,
                    })?;
                    board.set_piece(sq, color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount { rank: i, files: file });
            }
        }

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling = CastlingRights::none();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => board.castling.grant(Color::White, true),
                    'Q' => board.castling.grant(Color::White, false),
                    'k' => board.castling.grant(Color::Black, true),
                    'q' => board.castling.grant(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { letter: c }),
                }
            }
        }

        board.en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                fields[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: fields[3].to_string(),
                    })?,
            )
        };

        board.halfmove_clock =
            fields[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: fields[4].to_string(),
                })?;

        board.fullmove_number =
            fields[5]
                .parse::<u32>()
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| FenError::InvalidFullmoveNumber {
                    found: fields[5].to_string(),
                })?;

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Parse a position from FEN, panicking on malformed input.
    ///
    /// # Panics
    /// Panics if the FEN is invalid; use [`Board::try_from_fen`] to handle
    /// errors.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Board::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Format the position as a 6-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file).unwrap();
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(piece.to_fen_char(color));
                } else {
                    empty_run += 1;
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side} {castling} {en_passant} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }

    /// Resolve protocol move text (`e2e4`, `e7e8q`) against the current legal
    /// moves.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let parsed = Move::from_uci(text)?;
        for &mv in &self.generate_legal_moves() {
            if mv.from() == parsed.from()
                && mv.to() == parsed.to()
                && mv.promotion_piece() == parsed.promotion_piece()
            {
                return Ok(mv);
            }
        }
        Err(MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }

    /// Parse a protocol move and apply it in one step.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
