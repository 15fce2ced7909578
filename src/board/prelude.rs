//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_board::board::prelude::*;
//! ```

pub use super::{
    Bitboard, Board, Color, FenError, File, Move, MoveFlag, Piece, Rank, Square, SquareError,
};
