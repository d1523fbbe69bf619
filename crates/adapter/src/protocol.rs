//! Protocol module - line-oriented command parsing and JSON observations
//!
//! Inbound lines carry one command, either as a bare camelCase name
//! (`hardDrop`) or as `{"command":"hardDrop"}`. Outbound lines are single JSON
//! observations of the session.

use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, Preview, Rows};
use crate::error::AdapterError;
use crate::types::Command;

// ============== Client -> Game Messages ==============

/// JSON form of an inbound command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    #[serde(default)]
    pub command: Option<String>,
}

/// Parse one inbound line into a command
pub fn parse_command(line: &str) -> Result<Command, AdapterError> {
    let line = line.trim();

    let name = if line.starts_with('{') {
        serde_json::from_str::<CommandMessage>(line)?
            .command
            .ok_or(AdapterError::MissingCommand)?
    } else {
        line.to_string()
    };

    let name = name.trim();
    Command::from_str(name).ok_or_else(|| AdapterError::UnknownCommand(name.to_string()))
}

// ============== Game -> Client Messages ==============

/// Game state observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationMessage {
    pub piece_id: u32,
    pub state: String,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub next: String,
    /// Display grid: locked cells with the falling piece overlaid
    pub board: Rows,
    pub preview: Preview,
}

impl From<&GameSnapshot> for ObservationMessage {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            piece_id: snap.piece_id,
            state: snap.state.as_str().to_string(),
            score: snap.score,
            level: snap.level,
            lines: snap.lines,
            next: snap.next.as_str().to_string(),
            board: snap.display,
            preview: snap.preview,
        }
    }
}

/// Error line sent back for a rejected input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
    pub message: String,
}

impl From<&AdapterError> for ErrorMessage {
    fn from(err: &AdapterError) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

pub fn encode_observation(snap: &GameSnapshot) -> Result<String, AdapterError> {
    Ok(serde_json::to_string(&ObservationMessage::from(snap))?)
}

pub fn encode_error(err: &AdapterError) -> Result<String, AdapterError> {
    Ok(serde_json::to_string(&ErrorMessage::from(err))?)
}
