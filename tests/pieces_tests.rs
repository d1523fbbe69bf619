//! Piece catalog tests

use blockfall::core::{base_shape, build_preview, get_shape, rotate, rotation_count, spawn_position};
use blockfall::types::{PieceKind, BOARD_WIDTH, EMPTY};

#[test]
fn test_every_piece_has_four_cells() {
    for kind in PieceKind::ALL {
        for r in 0..rotation_count(kind) {
            assert_eq!(get_shape(kind, r).minos().count(), 4, "{kind:?} r{r}");
        }
    }
}

#[test]
fn test_cells_carry_the_piece_id() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        for (x, y) in shape.minos() {
            assert_eq!(shape.get(x as usize, y as usize), kind.id());
        }
    }
}

#[test]
fn test_rotation_cycle_is_identity() {
    for kind in PieceKind::ALL {
        let base = base_shape(kind);
        let mut shape = base;
        for _ in 0..4 {
            shape = rotate(&shape);
        }
        assert_eq!(shape, base, "{kind:?}");
    }
}

#[test]
fn test_rotation_index_wraps() {
    assert_eq!(rotation_count(PieceKind::O), 1);
    for kind in PieceKind::ALL {
        let count = rotation_count(kind);
        for r in 0..count {
            assert_eq!(get_shape(kind, r), get_shape(kind, r + count));
        }
    }
    assert_eq!(get_shape(PieceKind::T, 1), rotate(&base_shape(PieceKind::T)));
}

#[test]
fn test_i_piece_rotates_to_vertical() {
    let vertical = get_shape(PieceKind::I, 1);
    let cells: Vec<_> = vertical.minos().collect();
    assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_spawn_is_centred_on_the_top_row() {
    for kind in PieceKind::ALL {
        let (x, y) = spawn_position(kind);
        let size = base_shape(kind).size() as i8;
        assert_eq!(y, 0);
        assert_eq!(x, BOARD_WIDTH as i8 / 2 - size / 2);
    }
    assert_eq!(spawn_position(PieceKind::I), (3, 0));
    assert_eq!(spawn_position(PieceKind::O), (4, 0));
}

#[test]
fn test_preview_holds_the_whole_piece() {
    for kind in PieceKind::ALL {
        let preview = build_preview(&base_shape(kind));
        let filled: Vec<u8> = preview
            .iter()
            .flatten()
            .copied()
            .filter(|&c| c != EMPTY)
            .collect();
        assert_eq!(filled, vec![kind.id(); 4], "{kind:?}");
    }
}
