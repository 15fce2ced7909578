//! The move descriptor consumed by `Board::apply_move`.
//!
//! A `Move` is constructed by an external move generator against a
//! snapshot of the board and carries everything application needs: the
//! squares, the mover as it stood before the move, the captured piece if
//! any, and a flag naming the special-case handling. The flag is the
//! single source of truth: en passant computes its capture square from
//! the flag, never from `to`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::{File, Square};

/// Move kind, driving the special-case handling in `Board::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveFlag {
    /// Plain move or ordinary capture
    Quiet,
    /// Pawn advancing two squares from its starting rank
    DoublePawnPush,
    /// En passant capture; the captured pawn is not on the `to` square
    EnPassant,
    /// King-side castle (O-O), relocates the h-file rook
    CastleKingside,
    /// Queen-side castle (O-O-O), relocates the a-file rook
    CastleQueenside,
    /// Pawn promotion to the carried piece type
    Promotion(Piece),
}

/// A fully described move against a specific position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: (Color, Piece),
    captured: Option<(Color, Piece)>,
    flag: MoveFlag,
}

impl Move {
    /// Create a quiet (non-capturing, non-special) move
    #[must_use]
    pub const fn quiet(from: Square, to: Square, color: Color, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece: (color, piece),
            captured: None,
            flag: MoveFlag::Quiet,
        }
    }

    /// Create an ordinary capture
    #[must_use]
    pub const fn capture(
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        captured: (Color, Piece),
    ) -> Self {
        Move {
            from,
            to,
            piece: (color, piece),
            captured: Some(captured),
            flag: MoveFlag::Quiet,
        }
    }

    /// Create a double pawn push
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            piece: (color, Piece::Pawn),
            captured: None,
            flag: MoveFlag::DoublePawnPush,
        }
    }

    /// Create an en passant capture. The captured pawn always belongs to
    /// the opponent; its square is computed during application.
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            piece: (color, Piece::Pawn),
            captured: Some((color.opponent(), Piece::Pawn)),
            flag: MoveFlag::EnPassant,
        }
    }

    /// Create a king-side castle. The king's squares are fixed by color
    /// (e1 to g1 for White, e8 to g8 for Black).
    #[must_use]
    pub const fn castle_kingside(color: Color) -> Self {
        let back = color.back_rank();
        Move {
            from: Square::new(File::E, back),
            to: Square::new(File::G, back),
            piece: (color, Piece::King),
            captured: None,
            flag: MoveFlag::CastleKingside,
        }
    }

    /// Create a queen-side castle (e1 to c1 for White, e8 to c8 for Black)
    #[must_use]
    pub const fn castle_queenside(color: Color) -> Self {
        let back = color.back_rank();
        Move {
            from: Square::new(File::E, back),
            to: Square::new(File::C, back),
            piece: (color, Piece::King),
            captured: None,
            flag: MoveFlag::CastleQueenside,
        }
    }

    /// Create a non-capturing promotion to `target`
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, color: Color, target: Piece) -> Self {
        Move {
            from,
            to,
            piece: (color, Piece::Pawn),
            captured: None,
            flag: MoveFlag::Promotion(target),
        }
    }

    /// Create a capturing promotion to `target`
    #[must_use]
    pub const fn promotion_capture(
        from: Square,
        to: Square,
        color: Color,
        target: Piece,
        captured: (Color, Piece),
    ) -> Self {
        Move {
            from,
            to,
            piece: (color, Piece::Pawn),
            captured: Some(captured),
            flag: MoveFlag::Promotion(target),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The moving piece as it stood before the move
    #[inline]
    #[must_use]
    pub const fn piece(self) -> (Color, Piece) {
        self.piece
    }

    /// The color making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece.0
    }

    /// Whatever stood on the affected capture square, if anything
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        self.captured
    }

    /// Get the move flag
    #[inline]
    #[must_use]
    pub const fn flag(self) -> MoveFlag {
        self.flag
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is an en passant capture
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    /// Returns true if this move is castling (either side)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self.flag,
            MoveFlag::CastleKingside | MoveFlag::CastleQueenside
        )
    }

    /// Returns true if this is king-side castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        matches!(self.flag, MoveFlag::CastleKingside)
    }

    /// Get the promotion target, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.flag {
            MoveFlag::Promotion(piece) => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
