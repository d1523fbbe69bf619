//! Read-only view of a session, copied out for renderers, adapters and the solver.

use crate::game_state::Tetromino;
use crate::grid::{Preview, Rows};
use crate::types::{PieceKind, PlayState, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells only
    pub grid: Rows,
    /// Locked cells with the active piece overlaid
    pub display: Rows,
    /// Hash of `grid`, used to detect board changes cheaply
    pub board_hash: u64,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub preview: Preview,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub state: PlayState,
    /// Increments on every successful spawn
    pub piece_id: u32,
    /// Increments on every `start`
    pub game_id: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == PlayState::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            display: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            board_hash: 0,
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            preview: [[0u8; PREVIEW_SIZE]; PREVIEW_SIZE],
            score: 0,
            level: 1,
            lines: 0,
            state: PlayState::Idle,
            piece_id: 0,
            game_id: 0,
            drop_interval_ms: 0,
        }
    }
}
