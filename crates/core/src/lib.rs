//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, session state and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Time is advanced explicitly, no real timers
//! - **Portable**: Can run in any environment (terminal, headless, solver scans)
//!
//! # Module Structure
//!
//! - [`pieces`]: Tetromino matrices, the clockwise rotation transform and the rotation table
//! - [`grid`]: 10x20 grid with collision testing, placement, line clearing and previews
//! - [`game_state`]: The session state machine and its commands
//! - [`rng`]: Uniform random piece generation
//! - [`scoring`]: Line-clear points, levels and gravity intervals
//! - [`ticker`]: Periodic time source advanced by the caller
//! - [`snapshot`]: Read-only copies of the session for observers
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Every piece is drawn independently from the seven kinds
//! - **Wall Kicks**: A blocked rotation retries at column offsets -1, +1, -2, +2
//! - **Immediate Lock**: A piece locks as soon as a downward move is blocked
//! - **Game Over**: The next piece collides at its spawn position
//! - **Scoring**: Classic Nintendo line scores multiplied by the level
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, PlayState};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.state(), PlayState::Running);
//! assert_eq!(game.piece_id(), 2);
//! ```
//!
//! # Timing
//!
//! Gravity fires every `1000 / level` ms. Call
//! [`GameState::advance`](game_state::GameState::advance) with the elapsed
//! time; nothing moves while paused or after game over.

pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod ticker;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Tetromino};
pub use grid::{build_preview, Grid, Preview, Rows};
pub use pieces::{base_shape, get_shape, rotate, rotation_count, spawn_position, Shape};
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{calculate_line_score, calculate_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use ticker::Ticker;
