//! Run configuration read from `BLOCKFALL_*` environment variables.

use std::env;

use crate::solver::AutoPlayConfig;
use crate::types::{SOLVER_COMMAND_DELAY_MS, SOLVER_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    /// Start with the auto-player enabled
    pub autoplay: bool,
    pub solver_interval_ms: u32,
    pub solver_delay_ms: u32,
    /// Skip the terminal: simulate with the auto-player, or read commands from stdin
    pub headless: bool,
    /// Piece limit for headless simulations
    pub max_pieces: u32,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            autoplay: false,
            solver_interval_ms: SOLVER_INTERVAL_MS,
            solver_delay_ms: SOLVER_COMMAND_DELAY_MS,
            headless: false,
            max_pieces: 500,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Read the environment; unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, fallback: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(fallback)
        };
        let flag = |key: &str| lookup(key).map_or(false, |s| parse_flag(&s));

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed: number("BLOCKFALL_SEED", defaults.seed),
            autoplay: flag("BLOCKFALL_AUTOPLAY"),
            solver_interval_ms: number("BLOCKFALL_SOLVER_INTERVAL_MS", defaults.solver_interval_ms),
            solver_delay_ms: number("BLOCKFALL_SOLVER_DELAY_MS", defaults.solver_delay_ms),
            headless: flag("BLOCKFALL_HEADLESS"),
            max_pieces: number("BLOCKFALL_MAX_PIECES", defaults.max_pieces),
            log_path,
        }
    }

    pub fn autoplay_config(&self) -> AutoPlayConfig {
        AutoPlayConfig {
            interval_ms: self.solver_interval_ms,
            command_delay_ms: self.solver_delay_ms,
            ..AutoPlayConfig::default()
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
