pub mod board;

pub use board::{
    Bitboard, Board, Color, FenError, File, Move, MoveFlag, Piece, Rank, Square, SquareError,
};
