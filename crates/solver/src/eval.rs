//! Board features and the weighted placement heuristic.
//!
//! Features are read from a grid with the candidate piece already written in
//! but before its completed rows are cleared, so `complete_lines` rewards the
//! clear directly.

use blockfall_core::Grid;
use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardFeatures {
    pub holes: u32,
    pub aggregate_height: u32,
    pub bumpiness: u32,
    pub complete_lines: u32,
}

/// Heuristic weights; the score is the dot product with the features
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    pub lines: i32,
    pub holes: i32,
    pub aggregate_height: i32,
    pub bumpiness: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            lines: 100,
            holes: -30,
            aggregate_height: -2,
            bumpiness: -2,
        }
    }
}

/// Compute the classic features of a grid. O(H*W), no allocations.
pub fn compute_features(grid: &Grid) -> BoardFeatures {
    let heights = column_heights(grid);

    BoardFeatures {
        holes: count_holes(grid),
        aggregate_height: heights.iter().sum(),
        bumpiness: bumpiness(&heights),
        complete_lines: grid.count_full_rows() as u32,
    }
}

pub fn evaluate(grid: &Grid, weights: &Weights) -> i32 {
    let f = compute_features(grid);
    weights.lines * f.complete_lines as i32
        + weights.holes * f.holes as i32
        + weights.aggregate_height * f.aggregate_height as i32
        + weights.bumpiness * f.bumpiness as i32
}

/// Height of each column: `H - row` of its topmost filled cell, 0 when empty
pub fn column_heights(grid: &Grid) -> [u32; W] {
    let mut h = [0u32; W];
    for (c, height) in h.iter_mut().enumerate() {
        if let Some(r) = (0..H).find(|&r| grid.row(r)[c] != EMPTY) {
            *height = (H - r) as u32;
        }
    }
    h
}

/// Empty cells with at least one filled cell above them in the same column
fn count_holes(grid: &Grid) -> u32 {
    let mut holes = 0u32;
    for c in 0..W {
        let mut covered = false;
        for r in 0..H {
            if grid.row(r)[c] != EMPTY {
                covered = true;
            } else if covered {
                holes += 1;
            }
        }
    }
    holes
}

fn bumpiness(heights: &[u32; W]) -> u32 {
    heights.windows(2).map(|w| w[0].abs_diff(w[1])).sum()
}
