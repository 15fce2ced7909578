//! FEN piece-placement parsing and serialization.
//!
//! Only the placement field is handled here; side to move, castling
//! rights, the en passant target, and the clocks are the caller's to
//! parse and hold.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, File, Piece, Rank, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Accepts a full FEN record and reads only its first
    /// whitespace-delimited token. The placement must have exactly 8
    /// '/'-separated ranks, each summing to exactly 8 files via empty-run
    /// digits 1-8 and piece letters.
    ///
    /// The parse is atomic: pieces accumulate in a scratch board that is
    /// returned only on full success, so an error never leaves a
    /// half-populated position behind.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::EmptyPlacement)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            #[cfg(feature = "logging")]
            log::debug!("rejected FEN placement with {} ranks", ranks.len());
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first.
        for (rank, rank_str) in Rank::ALL.iter().rev().zip(&ranks) {
            let rank_number = rank.index() + 1;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidDigit { char: c });
                    }
                    file += digit as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_number,
                            files: file,
                        });
                    }
                } else {
                    let (color, piece) =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_number,
                            files: file + 1,
                        });
                    }
                    board.place_piece(Square::new(File::ALL[file], *rank), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_number,
                    files: file,
                });
            }
        }

        Ok(board)
    }

    /// Serialize the position to FEN placement text, scanning ranks 8
    /// down to 1 and emitting run-length digits for empty squares.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in Rank::ALL.iter().rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in File::ALL {
                let sq = Square::new(file, *rank);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
