//! The board: twelve bitboards, one per (color, piece type) pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Color, Piece};

// Starting-position masks, one per piece/color pair.
const WHITE_PAWNS: Bitboard = Bitboard(0x0000_0000_0000_FF00);
const WHITE_KNIGHTS: Bitboard = Bitboard(0x0000_0000_0000_0042);
const WHITE_BISHOPS: Bitboard = Bitboard(0x0000_0000_0000_0024);
const WHITE_ROOKS: Bitboard = Bitboard(0x0000_0000_0000_0081);
const WHITE_QUEENS: Bitboard = Bitboard(0x0000_0000_0000_0008);
const WHITE_KINGS: Bitboard = Bitboard(0x0000_0000_0000_0010);
const BLACK_PAWNS: Bitboard = Bitboard(0x00FF_0000_0000_0000);
const BLACK_KNIGHTS: Bitboard = Bitboard(0x4200_0000_0000_0000);
const BLACK_BISHOPS: Bitboard = Bitboard(0x2400_0000_0000_0000);
const BLACK_ROOKS: Bitboard = Bitboard(0x8100_0000_0000_0000);
const BLACK_QUEENS: Bitboard = Bitboard(0x0800_0000_0000_0000);
const BLACK_KINGS: Bitboard = Bitboard(0x1000_0000_0000_0000);

/// A chess position: piece locations only.
///
/// The twelve bitboards are the sole stored state; per-color occupancy
/// and the all-occupied set are derived on demand. Side to move,
/// castling rights, the en passant target, and the clocks belong to the
/// caller.
///
/// Board is a plain value. Cloning copies twelve words; two clones never
/// observe each other's mutations, so callers keep history by keeping
/// prior clones.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    // Indexed [color][piece type]; at most one bitboard holds any square.
    pub(crate) pieces: [[Bitboard; 6]; 2],
}

impl Board {
    /// Create a board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
        }
    }

    /// Create the standard initial position
    #[must_use]
    pub const fn starting_position() -> Self {
        Board {
            pieces: [
                [
                    WHITE_PAWNS,
                    WHITE_KNIGHTS,
                    WHITE_BISHOPS,
                    WHITE_ROOKS,
                    WHITE_QUEENS,
                    WHITE_KINGS,
                ],
                [
                    BLACK_PAWNS,
                    BLACK_KNIGHTS,
                    BLACK_BISHOPS,
                    BLACK_ROOKS,
                    BLACK_QUEENS,
                    BLACK_KINGS,
                ],
            ],
        }
    }

    /// The bitboard for one piece type of one color
    #[inline]
    #[must_use]
    pub const fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by the given color (derived)
    #[must_use]
    pub fn occupied(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, bb| acc.or(*bb))
    }

    /// All occupied squares (derived)
    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied(Color::White).or(self.occupied(Color::Black))
    }

    /// All empty squares (derived)
    #[must_use]
    pub fn empty_squares(&self) -> Bitboard {
        self.all_occupied().not()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(board.all_occupied().is_empty());
        assert_eq!(board.empty_squares(), Bitboard::ALL);
    }

    #[test]
    fn test_starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.all_occupied().popcount(), 32);
        for color in Color::BOTH {
            assert_eq!(board.occupied(color).popcount(), 16);
            assert_eq!(board.pieces_of(color, Piece::Pawn).popcount(), 8);
            assert_eq!(board.pieces_of(color, Piece::Knight).popcount(), 2);
            assert_eq!(board.pieces_of(color, Piece::Bishop).popcount(), 2);
            assert_eq!(board.pieces_of(color, Piece::Rook).popcount(), 2);
            assert_eq!(board.pieces_of(color, Piece::Queen).popcount(), 1);
            assert_eq!(board.pieces_of(color, Piece::King).popcount(), 1);
        }
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(
            board.occupied(Color::White),
            Bitboard::RANK_1.or(Bitboard::RANK_2)
        );
        assert_eq!(
            board.occupied(Color::Black),
            Bitboard::RANK_7.or(Bitboard::RANK_8)
        );
    }

    #[test]
    fn test_clones_are_independent() {
        let mut a = Board::starting_position();
        let b = a.clone();
        a.remove_piece("e2".parse().unwrap(), Color::White, Piece::Pawn);
        assert_ne!(a, b);
        assert_eq!(b, Board::starting_position());
    }
}
