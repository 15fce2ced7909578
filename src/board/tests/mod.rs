//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `apply.rs` - move application (captures, en passant, castling, promotion)
//! - `path.rs` - sliding-path clearance
//! - `proptest.rs` - property-based tests

mod path;
mod proptest;

#[cfg(feature = "serde")]
mod serde_round_trip {
    use crate::board::Board;

    #[test]
    fn test_board_serde_round_trip() {
        let board = Board::starting_position();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
