//! Line session - feeds parsed commands into a game and reports back.

use crate::core::GameState;
use crate::error::AdapterError;
use crate::protocol::{encode_error, encode_observation, parse_command};

/// A game driven one input line at a time
#[derive(Debug, Clone)]
pub struct LineSession {
    game: GameState,
}

impl LineSession {
    pub fn new(seed: u32) -> Self {
        Self {
            game: GameState::new(seed),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Apply one line; blank lines produce no output
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, AdapterError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let command = parse_command(line)?;
        self.game.apply(command);
        encode_observation(&self.game.snapshot()).map(Some)
    }

    /// Like [`handle_line`](Self::handle_line), but rejected input becomes an error line
    pub fn respond(&mut self, line: &str) -> Result<Option<String>, AdapterError> {
        match self.handle_line(line) {
            Err(err) => encode_error(&err).map(Some),
            ok => ok,
        }
    }
}
