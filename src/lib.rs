//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core, solver, adapter, term, input, types}`
//! and holds what only the binary needs: run configuration, logging and the scoreboard.

pub use blockfall_adapter as adapter;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_solver as solver;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod log;
pub mod scoreboard;

pub use config::RunConfig;
pub use log::Logger;
pub use scoreboard::Scoreboard;
