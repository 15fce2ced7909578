//! Human-readable board dump for debugging and logging.

use std::fmt;

use super::{Board, File, Rank, Square};

impl Board {
    /// Render the position as an 8-row grid, rank 8 at the top, with a
    /// file-letter legend. Each square shows its FEN character or '.'.
    ///
    /// Debug output only; the format is not a stable wire format.
    #[must_use]
    pub fn ascii(&self) -> String {
        let mut out = String::new();
        for rank in Rank::ALL.iter().rev() {
            out.push(rank.to_char());
            for file in File::ALL {
                out.push(' ');
                match self.piece_at(Square::new(file, *rank)) {
                    Some((color, piece)) => out.push(piece.to_fen_char(color)),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ascii())
    }
}
