//! Core value types.
//!
//! - `File`, `Rank`, `Square` - validated board coordinates
//! - `Bitboard` - 64-bit square set
//! - `Piece` and `Color` - piece model with FEN character mapping
//! - `Move` and `MoveFlag` - the move descriptor `Board::apply_move` consumes

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveFlag};
pub use piece::{Color, Piece};
pub use square::{File, Rank, Square};
