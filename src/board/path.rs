//! Sliding-piece path clearance.

use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if every square strictly between `from` and `to` is
    /// empty. Endpoints never block.
    ///
    /// The step direction is the sign of the file and rank deltas; the
    /// caller must only invoke this for straight or diagonal lines (rook,
    /// bishop, or queen geometry). The deltas are not validated here.
    ///
    /// `ignoring` skips the blocking check only when the occupant equals
    /// the given piece value and the scanned square equals `from`. The
    /// walk excludes `from`, so the condition can never fire: callers
    /// must treat the parameter as a no-op.
    #[must_use]
    pub fn is_path_clear(
        &self,
        from: Square,
        to: Square,
        ignoring: Option<(Color, Piece)>,
    ) -> bool {
        let to_file = to.file().index() as isize;
        let to_rank = to.rank().index() as isize;
        let file_step = (to_file - from.file().index() as isize).signum();
        let rank_step = (to_rank - from.rank().index() as isize).signum();

        let mut file = from.file().index() as isize + file_step;
        let mut rank = from.rank().index() as isize + rank_step;
        while (file, rank) != (to_file, to_rank) {
            let Some(sq) = Square::from_coords(file as usize, rank as usize) else {
                // Off the board: the caller handed us a non-line geometry.
                return true;
            };
            if let Some(occupant) = self.piece_at(sq) {
                let skipped = ignoring == Some(occupant) && sq == from;
                if !skipped {
                    return false;
                }
            }
            file += file_step;
            rank += rank_step;
        }
        true
    }
}
