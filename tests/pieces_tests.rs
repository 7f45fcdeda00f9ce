//! Piece catalog tests - shapes, rotation algebra, spawn placement

use blockfall::core::{get_shape, Piece};
use blockfall::types::{PieceKind, BOARD_WIDTH};

#[test]
fn test_catalog_has_seven_distinct_shapes() {
    let shapes: Vec<_> = PieceKind::ALL.iter().map(|&k| get_shape(k)).collect();
    for (i, a) in shapes.iter().enumerate() {
        for b in shapes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_every_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(get_shape(kind).iter_filled().count(), 4);
    }
}

#[test]
fn test_four_rotations_return_to_original() {
    for kind in PieceKind::ALL {
        let original = get_shape(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated();
        }
        assert_eq!(shape, original, "{:?}", kind);
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let shape = get_shape(PieceKind::O);
    assert_eq!(shape.rotated(), shape);
}

#[test]
fn test_non_o_pieces_change_on_first_rotation() {
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let shape = get_shape(kind);
        assert_ne!(shape.rotated(), shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_is_clockwise() {
    // J spawn: corner cell top-left. After one CW turn the corner cell
    // sits top-right of the vertical bar.
    let rotated = get_shape(PieceKind::J).rotated();
    let cells: Vec<_> = rotated.iter_filled().collect();
    assert_eq!(cells, vec![(1, 0), (2, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = get_shape(kind);
        for _ in 0..4 {
            shape = shape.rotated();
            assert_eq!(shape.iter_filled().count(), 4);
        }
    }
}

#[test]
fn test_spawn_centering_formula() {
    // x = width/2 - size/2 for every kind
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let expected = (BOARD_WIDTH / 2) as i8 - (piece.shape.size() / 2) as i8;
        assert_eq!(piece.x, expected, "{:?}", kind);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_spawn_cells_inside_board() {
    for kind in PieceKind::ALL {
        for (x, y) in Piece::spawn(kind).cells() {
            assert!((0..BOARD_WIDTH as i8).contains(&x), "{:?}", kind);
            assert!(y >= 0, "{:?}", kind);
        }
    }
}
