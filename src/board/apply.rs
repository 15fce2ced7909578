//! Piece placement primitives and move application.

use super::{Board, Color, File, Move, Piece, Square};

impl Board {
    /// Set the single bit for `sq` in the bitboard selected by
    /// (color, piece). Unconditional: callers are responsible for not
    /// double-placing.
    #[inline]
    pub fn place_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].set(sq);
    }

    /// Clear the single bit for `sq` in the bitboard selected by
    /// (color, piece). Unconditional: clearing an already-empty square
    /// changes nothing.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].clear(sq);
    }

    /// The piece standing on `sq`, or `None` if the square is empty.
    ///
    /// Scans the twelve bitboards in a fixed order (piece type, then
    /// color). At most one can match as long as the board was mutated
    /// only through `place_piece`, `remove_piece`, and `apply_move`.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for piece in Piece::ALL {
            for color in Color::BOTH {
                if self.pieces[color.index()][piece.index()].contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Apply an externally validated move to this position.
    ///
    /// Four steps, in this order:
    /// 1. remove the mover from `from` under its pre-move type;
    /// 2. remove the captured piece, at the computed pawn square for en
    ///    passant or at `to` otherwise;
    /// 3. place the mover (or its promotion target) at `to`;
    /// 4. for castles, relocate the rook on the mover's back rank
    ///    (h-file to f-file king-side, a-file to d-file queen-side).
    ///
    /// No legality checks happen here. A move whose `from` square does
    /// not hold the stated piece leaves a silently wrong position; the
    /// caller owns consistency.
    pub fn apply_move(&mut self, m: &Move) {
        #[cfg(feature = "logging")]
        log::trace!("apply {m}");

        let (color, piece) = m.piece();
        self.remove_piece(m.from(), color, piece);

        if let Some((cap_color, cap_piece)) = m.captured() {
            let cap_sq = if m.is_en_passant() {
                Square::new(m.to().file(), color.en_passant_capture_rank())
            } else {
                m.to()
            };
            self.remove_piece(cap_sq, cap_color, cap_piece);
        }

        let placed = m.promotion().unwrap_or(piece);
        self.place_piece(m.to(), color, placed);

        if m.is_castling() {
            let back = color.back_rank();
            let (rook_from, rook_to) = if m.is_castle_kingside() {
                (File::H, File::F)
            } else {
                (File::A, File::D)
            };
            self.remove_piece(Square::new(rook_from, back), color, Piece::Rook);
            self.place_piece(Square::new(rook_to, back), color, Piece::Rook);
        }
    }
}
