//! Property-based tests using proptest.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::board::{Board, Color, Move, Piece, Square};

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::BOTH.to_vec())
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop::sample::select(Piece::ALL.to_vec())
}

/// Random placement: distinct square indices, each with a random piece.
fn placement_strategy() -> impl Strategy<Value = HashMap<usize, (Color, Piece)>> {
    prop::collection::hash_map(0usize..64, (color_strategy(), piece_strategy()), 0..=32)
}

fn board_from_placement(placement: &HashMap<usize, (Color, Piece)>) -> Board {
    let mut board = Board::empty();
    for (&idx, &(color, piece)) in placement {
        board.place_piece(Square::from_index(idx).unwrap(), color, piece);
    }
    board
}

proptest! {
    /// Property: after arbitrary placement on distinct squares, every
    /// square is held by at most one of the twelve bitboards.
    #[test]
    fn prop_occupancy_invariant(placement in placement_strategy()) {
        let board = board_from_placement(&placement);

        for idx in 0..64 {
            let sq = Square::from_index(idx).unwrap();
            let mut holders = 0;
            for color in Color::BOTH {
                for piece in Piece::ALL {
                    if board.pieces_of(color, piece).contains(sq) {
                        holders += 1;
                    }
                }
            }
            prop_assert!(holders <= 1);
        }
        prop_assert_eq!(board.all_occupied().popcount() as usize, placement.len());
    }

    /// Property: FEN serialization round-trips any placement.
    #[test]
    fn prop_fen_round_trip(placement in placement_strategy()) {
        let board = board_from_placement(&placement);
        let fen = board.to_fen();
        let reparsed = Board::from_fen(&fen).unwrap();
        prop_assert_eq!(&reparsed, &board);
        prop_assert_eq!(reparsed.to_fen(), fen);
    }

    /// Property: square index round-trips through `from_index`.
    #[test]
    fn prop_square_index_bijection(idx in 0usize..64) {
        let sq = Square::from_index(idx).unwrap();
        prop_assert_eq!(sq.index(), idx);
    }

    /// Property: squares round-trip through algebraic notation.
    #[test]
    fn prop_square_algebraic_round_trip(idx in 0usize..64) {
        let sq = Square::from_index(idx).unwrap();
        let parsed: Square = sq.to_string().parse().unwrap();
        prop_assert_eq!(parsed, sq);
    }

    /// Property: applying the same move to equal clones yields equal boards.
    #[test]
    fn prop_apply_move_deterministic(
        from_idx in 0usize..64,
        to_idx in 0usize..64,
        color in color_strategy(),
        piece in piece_strategy(),
    ) {
        let from = Square::from_index(from_idx).unwrap();
        let to = Square::from_index(to_idx).unwrap();

        let mut board = Board::empty();
        board.place_piece(from, color, piece);
        let mv = Move::quiet(from, to, color, piece);

        let mut a = board.clone();
        let mut b = board;
        a.apply_move(&mv);
        b.apply_move(&mv);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.piece_at(to), Some((color, piece)));
    }
}
