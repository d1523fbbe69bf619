//! Grid module - the board occupancy matrix
//!
//! The grid is a 10x20 matrix of cells, stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Pieces may hang above the top edge (negative y); those cells never collide.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, PREVIEW_SIZE};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the grid
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// Row-major 2D view of the grid
pub type Rows = [[Cell; WIDTH]; HEIGHT];

/// Fixed 4x4 next-piece preview
pub type Preview = [[Cell; PREVIEW_SIZE]; PREVIEW_SIZE];

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        debug_assert!(cell <= PieceKind::Z.id(), "cell value out of range: {}", cell);
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// True if `shape` placed with its top-left at (x, y) leaves the grid
    /// sideways or through the floor, or overlaps a filled cell.
    ///
    /// Cells above the top edge (negative y) never collide.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.minos().any(|(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Write the shape's occupied cells as `kind` in place.
    ///
    /// Out-of-bounds cells are skipped. Returns how many cells were written.
    pub fn stamp(&mut self, kind: PieceKind, shape: &Shape, x: i8, y: i8) -> usize {
        shape
            .minos()
            .filter(|&(dx, dy)| self.set(x + dx, y + dy, kind.id()))
            .count()
    }

    /// Copy of this grid with the shape written in as `kind`
    pub fn place(&self, kind: PieceKind, shape: &Shape, x: i8, y: i8) -> Grid {
        let mut out = *self;
        out.stamp(kind, shape, x, y);
        out
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer pass, so adjacent full rows are all removed at once.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(EMPTY);
        cleared_rows
    }

    /// Pure variant of [`Grid::clear_full_rows`]: the cleared grid and the count
    pub fn clear_completed_rows(&self) -> (Grid, usize) {
        let mut out = *self;
        let count = out.clear_full_rows().len();
        (out, count)
    }

    /// Number of full rows without clearing them
    pub fn count_full_rows(&self) -> usize {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Write the grid into a caller-owned 2D array
    pub fn write_rows_into(&self, out: &mut Rows) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    pub fn to_rows(&self) -> Rows {
        let mut out = [[EMPTY; WIDTH]; HEIGHT];
        self.write_rows_into(&mut out);
        out
    }

    pub fn from_rows(rows: &Rows) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            debug_assert!(row.iter().all(|&c| c <= PieceKind::Z.id()));
            grid.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        grid
    }

    /// FNV-1a 64-bit hash of the cells in row-major order
    pub fn board_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for &b in self.cells.iter() {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
        h
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Crop `shape` to its occupied cells and centre it in a 4x4 preview.
///
/// Offsets round down, so odd leftovers push the piece up and to the left.
pub fn build_preview(shape: &Shape) -> Preview {
    let mut preview = [[EMPTY; PREVIEW_SIZE]; PREVIEW_SIZE];
    let Some((min_x, min_y, max_x, max_y)) = shape.bounds() else {
        return preview;
    };

    let w = (max_x - min_x + 1) as usize;
    let h = (max_y - min_y + 1) as usize;
    let off_x = PREVIEW_SIZE.saturating_sub(w) / 2;
    let off_y = PREVIEW_SIZE.saturating_sub(h) / 2;

    for (dx, dy) in shape.minos() {
        let px = off_x + (dx - min_x) as usize;
        let py = off_y + (dy - min_y) as usize;
        if px < PREVIEW_SIZE && py < PREVIEW_SIZE {
            preview[py][px] = shape.get(dx as usize, dy as usize);
        }
    }
    preview
}
