//! Active piece integration tests - spawn shapes, movement, rotation.

use gridfall::core::{catalog, ActivePiece, Board};
use gridfall::types::PieceKind;

/// Rotate an offset set by 90 degrees, as `attempt_rotate` does.
fn rotated(offsets: [(i8, i8); 4], turns: u32) -> [(i8, i8); 4] {
    let mut out = offsets;
    for _ in 0..turns {
        out = out.map(|(x, y)| (y, -x));
    }
    out
}

fn sorted(mut cells: [(i8, i8); 4]) -> [(i8, i8); 4] {
    cells.sort_unstable();
    cells
}

#[test]
fn spawned_cells_are_distinct_and_match_the_catalog() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind);
        let cells = piece.cells();

        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(cells[i], cells[j], "{:?}", kind);
            }
        }
        assert_eq!(*piece.offsets(), catalog::shape(kind));
        assert_eq!(piece.anchor(), (3, 0));
    }
}

#[test]
fn every_reachable_offset_set_is_a_catalog_shape_rotation() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = ActivePiece::spawn(kind);
        piece.attempt_move(&board, 1, 8); // room to spin freely

        for _ in 0..4 {
            assert!(piece.attempt_rotate(&board));
            let current = sorted(*piece.offsets());
            let matches_catalog = (0..4)
                .any(|turns| sorted(rotated(catalog::shape(kind), turns)) == current);
            assert!(matches_catalog, "{:?} left the rotation group", kind);
        }
    }
}

#[test]
fn four_rotations_restore_the_offsets() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = ActivePiece::spawn(kind);
        piece.attempt_move(&board, 1, 8);

        let original = *piece.offsets();
        for _ in 0..4 {
            assert!(piece.attempt_rotate(&board));
        }
        assert_eq!(*piece.offsets(), original, "{:?}", kind);
    }
}

#[test]
fn blocked_attempt_reverts_only_itself() {
    let mut board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::Line);
    piece.attempt_move(&board, 1, 8);

    // First rotation succeeds: vertical line lies down across columns 4..=7.
    assert!(piece.attempt_rotate(&board));
    let after_first = *piece.offsets();

    // Block the next rotation's target cells and try again.
    let candidate = after_first.map(|(x, y)| (y, -x));
    let (ax, ay) = piece.anchor();
    let (bx, by) = (ax + candidate[3].0, ay + candidate[3].1);
    board.set(bx, by, Some(PieceKind::Z));

    assert!(!piece.attempt_rotate(&board));
    // The earlier successful rotation is untouched.
    assert_eq!(*piece.offsets(), after_first);
}

#[test]
fn square_descends_until_it_occupies_the_bottom_two_rows() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::Square);
    assert!(piece.attempt_move(&board, 1, 0)); // anchor (4, 0)

    while piece.attempt_move(&board, 0, 1) {}

    assert_eq!(piece.anchor(), (4, 18));
    assert!(!piece.can_move(&board, 0, 1));
    assert!(piece
        .cells()
        .iter()
        .all(|&(_, y)| y == 18 || y == 19));
}

#[test]
fn walls_and_floor_bound_movement() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::T);

    while piece.attempt_move(&board, -1, 0) {}
    assert!(!piece.can_move(&board, -1, 0));
    assert_eq!(piece.anchor().0, 0);

    while piece.attempt_move(&board, 1, 0) {}
    assert!(!piece.can_move(&board, 1, 0));
    // T is two columns wide.
    assert_eq!(piece.anchor().0, 8);
}
