//! Placement search and move planning.
//!
//! Every rotation of the piece is tried at every column from two cells left of
//! the board to the right edge. Each candidate is hard-dropped on a scratch copy
//! of the grid and scored with [`evaluate`]. The best one becomes a queue of
//! moves: rotations, then lateral steps, then a drop.

use std::collections::VecDeque;

use blockfall_core::{get_shape, rotation_count, ActiveSnapshot, Grid, Shape};
use blockfall_types::{Command, PieceKind, BOARD_WIDTH};

use crate::eval::{evaluate, Weights};

/// Leftmost column tried; shapes with empty left columns can hang off the edge
const MIN_X: i8 = -2;

/// A scored final resting position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub rotation: u8,
    pub x: i8,
    pub landing_y: i8,
    pub score: i32,
}

/// Atomic move issued by the auto-player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverMove {
    Rotate,
    Left,
    Right,
    Drop,
}

impl SolverMove {
    pub fn command(self) -> Command {
        match self {
            SolverMove::Rotate => Command::Rotate,
            SolverMove::Left => Command::MoveLeft,
            SolverMove::Right => Command::MoveRight,
            SolverMove::Drop => Command::HardDrop,
        }
    }
}

/// Lowest row the shape reaches when dropped from row `y` in column `x`
fn drop_row(grid: &Grid, shape: &Shape, x: i8, mut y: i8) -> i8 {
    while !grid.collides(shape, x, y + 1) {
        y += 1;
    }
    y
}

/// Best placement of `kind` on `grid`, or `None` when nothing fits at the top row.
///
/// Ties keep the first candidate in (rotation, column) order.
pub fn find_best_placement(grid: &Grid, kind: PieceKind, weights: &Weights) -> Option<Placement> {
    let mut best: Option<Placement> = None;

    for rotation in 0..rotation_count(kind) {
        let shape = get_shape(kind, rotation);

        for x in MIN_X..BOARD_WIDTH as i8 {
            if grid.collides(&shape, x, 0) {
                continue;
            }

            let landing_y = drop_row(grid, &shape, x, 0);
            let placed = grid.place(kind, &shape, x, landing_y);
            let score = evaluate(&placed, weights);

            if best.map_or(true, |b| score > b.score) {
                best = Some(Placement {
                    rotation,
                    x,
                    landing_y,
                    score,
                });
            }
        }
    }

    best
}

/// Steps from column `from` to column `to`, followed by the drop
pub fn lateral_moves(from: i8, to: i8) -> VecDeque<SolverMove> {
    let step = if to < from {
        SolverMove::Left
    } else {
        SolverMove::Right
    };
    let mut moves: VecDeque<SolverMove> = std::iter::repeat(step)
        .take(from.abs_diff(to) as usize)
        .collect();
    moves.push_back(SolverMove::Drop);
    moves
}

/// Move queue turning `active` into `target`
pub fn plan_moves(active: &ActiveSnapshot, target: &Placement) -> VecDeque<SolverMove> {
    let count = rotation_count(active.kind);
    let turns = (target.rotation + count - active.rotation % count) % count;

    let mut moves: VecDeque<SolverMove> = std::iter::repeat(SolverMove::Rotate)
        .take(turns as usize)
        .collect();
    moves.extend(lateral_moves(active.x, target.x));
    moves
}

/// Plan for the falling piece, or `None` when no placement fits
pub fn find_best_move(
    grid: &Grid,
    active: &ActiveSnapshot,
    weights: &Weights,
) -> Option<VecDeque<SolverMove>> {
    let target = find_best_placement(grid, active.kind, weights)?;
    Some(plan_moves(active, &target))
}
