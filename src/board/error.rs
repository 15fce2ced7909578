//! Error types for board operations.

use std::fmt;

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Input contained no placement field
    EmptyPlacement,
    /// Placement did not have exactly 8 '/'-separated ranks
    InvalidRankCount { found: usize },
    /// Digit outside 1-8 in a rank string
    InvalidDigit { char: char },
    /// Character that is neither a digit nor a FEN piece letter
    InvalidPiece { char: char },
    /// A rank described more than 8 files
    TooManyFiles { rank: usize, files: usize },
    /// A rank described fewer than 8 files
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::EmptyPlacement => write!(f, "FEN has no piece placement field"),
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidDigit { char } => {
                write!(f, "Invalid empty-run digit '{char}' in FEN (must be 1-8)")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Rank {rank} describes only {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
