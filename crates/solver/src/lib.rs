//! Heuristic auto-solver.
//!
//! - [`eval`]: board features (holes, aggregate height, bumpiness, complete lines) and weights
//! - [`search`]: placement search over every rotation and column, and move planning
//! - [`autoplay`]: the timed driver that feeds planned moves to a [`GameState`](blockfall_core::GameState)
//!
//! The solver only reads snapshots and issues [`Command`](blockfall_types::Command)s,
//! so a game driven by it behaves exactly like one driven by a player.

pub mod autoplay;
pub mod eval;
pub mod search;

pub use autoplay::{AutoPlayConfig, AutoPlayer};
pub use eval::{compute_features, evaluate, BoardFeatures, Weights};
pub use search::{find_best_move, find_best_placement, plan_moves, Placement, SolverMove};
