//! Pieces module - tetromino matrices and the rotation transform
//!
//! Every piece is defined once as a square base matrix. Further rotation states
//! come from a 90° clockwise transform (transpose, then reverse each row) and
//! are precomputed into a constant table, so the state machine and the solver
//! read exactly the same shapes.

use crate::types::{Cell, PieceKind, BOARD_WIDTH, EMPTY};

/// Largest matrix side length (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Maximum number of distinct rotation states
pub const MAX_ROTATIONS: usize = 4;

/// A square piece matrix of side `size` (2..=4).
///
/// Cells outside `size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from its top-left `size`×`size` rows
    pub const fn new(size: u8, cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Cell at (x, y) inside the matrix, `EMPTY` outside of it
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.size() || y >= self.size() {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Offsets (dx, dy) of the occupied cells, row-major
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> {
        let shape = *self;
        let n = shape.size();
        (0..n * n).filter_map(move |i| {
            let (x, y) = (i % n, i / n);
            (shape.cells[y][x] != EMPTY).then_some((x as i8, y as i8))
        })
    }

    /// Tight bounding box of the occupied cells as (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> Option<(i8, i8, i8, i8)> {
        self.minos().fold(None, |acc, (x, y)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse each row
    pub const fn rotate_cw(&self) -> Shape {
        let n = self.size as usize;
        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                cells[y][x] = self.cells[n - 1 - x][y];
                x += 1;
            }
            y += 1;
        }
        Shape {
            size: self.size,
            cells,
        }
    }
}

/// Rotate a shape 90° clockwise
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotate_cw()
}

const I_SHAPE: Shape = Shape::new(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Shape = Shape::new(3, [[2, 0, 0, 0], [2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const L_SHAPE: Shape = Shape::new(3, [[0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SHAPE: Shape = Shape::new(2, [[4, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const S_SHAPE: Shape = Shape::new(3, [[0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const T_SHAPE: Shape = Shape::new(3, [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const Z_SHAPE: Shape = Shape::new(3, [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// Base matrices in identifier order (I, J, L, O, S, T, Z)
const BASE_SHAPES: [Shape; 7] = [
    I_SHAPE, J_SHAPE, L_SHAPE, O_SHAPE, S_SHAPE, T_SHAPE, Z_SHAPE,
];

const fn build_rotation_table() -> [[Shape; MAX_ROTATIONS]; 7] {
    let mut table = [[I_SHAPE; MAX_ROTATIONS]; 7];
    let mut k = 0;
    while k < 7 {
        let mut shape = BASE_SHAPES[k];
        let mut r = 0;
        while r < MAX_ROTATIONS {
            table[k][r] = shape;
            shape = shape.rotate_cw();
            r += 1;
        }
        k += 1;
    }
    table
}

static ROTATIONS: [[Shape; MAX_ROTATIONS]; 7] = build_rotation_table();

fn table_index(kind: PieceKind) -> usize {
    kind.id() as usize - 1
}

/// Spawn-orientation matrix of a piece
pub fn base_shape(kind: PieceKind) -> Shape {
    BASE_SHAPES[table_index(kind)]
}

/// Number of distinct rotation states (O has one, everything else four)
pub fn rotation_count(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::O => 1,
        _ => MAX_ROTATIONS as u8,
    }
}

/// Shape of `kind` at `rotation`, index taken modulo [`rotation_count`]
pub fn get_shape(kind: PieceKind, rotation: u8) -> Shape {
    let r = rotation % rotation_count(kind);
    ROTATIONS[table_index(kind)][r as usize]
}

/// Top-left spawn position: horizontally centred, on the top row
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let size = base_shape(kind).size() as i8;
    (BOARD_WIDTH as i8 / 2 - size / 2, 0)
}
