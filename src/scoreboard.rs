//! In-memory high score list.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::ScoreEntry;

/// Scores kept on the board
pub const SCOREBOARD_SIZE: usize = 5;

/// Best final scores of this run, highest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a final score stamped with the current time.
    pub fn record_now(&mut self, score: u32) -> Option<usize> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        self.record(ScoreEntry::new(score, now))
    }

    /// Record a final score; returns its 1-based rank if it made the list.
    ///
    /// Equal scores rank below the ones already recorded.
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        let pos = self.entries.partition_point(|e| e.score >= entry.score);
        if pos >= SCOREBOARD_SIZE {
            return None;
        }
        self.entries.insert(pos, entry);
        self.entries.truncate(SCOREBOARD_SIZE);
        Some(pos + 1)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
