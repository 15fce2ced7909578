//! Chess position representation built on bitboards.
//!
//! The board stores twelve bitboards, one per (color, piece type) pair,
//! and applies moves that a caller has already constructed and validated.
//! Legal-move generation and check detection live outside this crate; the
//! board trusts the moves it is handed.
//!
//! # Example
//! ```
//! use chess_board::board::{Board, Color, Move, Piece, Square};
//!
//! let mut board = Board::starting_position();
//! let from: Square = "e2".parse().unwrap();
//! let to: Square = "e4".parse().unwrap();
//! board.apply_move(&Move::double_pawn_push(from, to, Color::White));
//! assert_eq!(board.piece_at(to), Some((Color::White, Piece::Pawn)));
//! ```

mod apply;
mod debug;
mod error;
mod fen;
mod path;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, SquareError};
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, File, Move, MoveFlag, Piece, Rank, Square};
