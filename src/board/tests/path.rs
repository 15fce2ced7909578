//! Sliding-path clearance tests.

use crate::board::{Board, Color, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_file_blocked_in_starting_position() {
    let board = Board::starting_position();
    // a2 pawn blocks the a-file immediately.
    assert!(!board.is_path_clear(sq("a1"), sq("a8"), None));
}

#[test]
fn test_clear_on_empty_board() {
    let board = Board::empty();
    assert!(board.is_path_clear(sq("a1"), sq("a8"), None));
    assert!(board.is_path_clear(sq("a1"), sq("h8"), None));
    assert!(board.is_path_clear(sq("h1"), sq("a8"), None));
    assert!(board.is_path_clear(sq("a4"), sq("h4"), None));
}

#[test]
fn test_endpoints_never_block() {
    // Rooks on both endpoints, nothing between.
    let board = Board::from_fen("r7/8/8/8/8/8/8/R7").unwrap();
    assert!(board.is_path_clear(sq("a1"), sq("a8"), None));
    assert!(board.is_path_clear(sq("a8"), sq("a1"), None));
}

#[test]
fn test_blocked_by_single_intermediate_piece() {
    let board = Board::from_fen("8/8/8/3n4/8/8/8/8").unwrap();
    // d5 knight sits on both the d-file and the a2-g8 diagonal.
    assert!(!board.is_path_clear(sq("d1"), sq("d8"), None));
    assert!(!board.is_path_clear(sq("a2"), sq("g8"), None));
    // Paths stopping short of the blocker are clear.
    assert!(board.is_path_clear(sq("d1"), sq("d5"), None));
    assert!(board.is_path_clear(sq("d1"), sq("d4"), None));
}

#[test]
fn test_adjacent_squares_have_no_intermediates() {
    let board = Board::starting_position();
    assert!(board.is_path_clear(sq("e1"), sq("e2"), None));
    assert!(board.is_path_clear(sq("d1"), sq("e2"), None));
}

#[test]
fn test_direction_symmetry() {
    let board = Board::from_fen("8/8/8/3n4/8/8/8/8").unwrap();
    assert_eq!(
        board.is_path_clear(sq("d1"), sq("d8"), None),
        board.is_path_clear(sq("d8"), sq("d1"), None)
    );
}

#[test]
fn test_ignoring_parameter_is_a_noop() {
    let board = Board::from_fen("8/8/8/3n4/8/8/8/8").unwrap();
    // Naming the blocking piece does not unblock the path: the skip
    // condition also requires the square to equal `from`, which the
    // walk never visits.
    assert!(!board.is_path_clear(sq("d1"), sq("d8"), Some((Color::Black, Piece::Knight))));
    assert!(!board.is_path_clear(sq("d1"), sq("d8"), Some((Color::White, Piece::Queen))));
}
