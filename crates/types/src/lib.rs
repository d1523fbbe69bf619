//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the rule engine, the solver, the terminal front-end and the line adapter.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Cell Encoding
//!
//! A cell is a `u8`: `0` is empty, `1..=7` is the identifier of the piece that
//! locked there. The same number drives occupancy checks and colour lookup.
//!
//! | Id | Piece |
//! |----|-------|
//! | 1 | I |
//! | 2 | J |
//! | 3 | L |
//! | 4 | O |
//! | 5 | S |
//! | 6 | T |
//! | 7 | Z |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1, divided by the level |
//! | `SOLVER_INTERVAL_MS` | 200 | Auto-player decision interval |
//! | `SOLVER_COMMAND_DELAY_MS` | 50 | Delay before a planned command is dispatched |
//! | `TICK_MS` | 16 | Frame step used by the terminal runner |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.id(), 6);
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::T));
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the next-piece preview grid
pub const PREVIEW_SIZE: usize = 4;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Frame step used by the interactive runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Auto-player decision interval
pub const SOLVER_INTERVAL_MS: u32 = 200;

/// Delay between dequeuing a planned command and dispatching it
pub const SOLVER_COMMAND_DELAY_MS: u32 = 50;

/// Horizontal offsets tried, in order, when a rotation collides
pub const WALL_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines, multiplied by the current level:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the board (`EMPTY` or a piece identifier)
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
///
/// The discriminant is the identifier written into the grid when the piece
/// locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in identifier order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell value written for this piece
    pub const fn id(self) -> Cell {
        self as Cell
    }

    /// Map a cell value back to its piece kind
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub const fn from_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Commands accepted by the game state machine
///
/// These are issued by human input and by the auto-player alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    MoveDown,
    /// Rotate piece 90° clockwise, with wall kicks
    Rotate,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Reset the session and start a new game
    Start,
    /// Pause a running game
    Pause,
    /// Resume a paused game
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
        }
    }
}

/// Lifecycle state of a session
///
/// `Idle → Running ⇄ Paused`, `Running → GameOver`; `start` leads to
/// `Running` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl PlayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayState::Idle => "idle",
            PlayState::Running => "running",
            PlayState::Paused => "paused",
            PlayState::GameOver => "gameOver",
        }
    }
}

/// Event emitted after a piece locks.
///
/// Observers take it from the session once per lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// A final score on the high score list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    pub score: u32,
    /// When the game ended, in seconds since the Unix epoch
    pub recorded_at: u64,
}

impl ScoreEntry {
    pub const fn new(score: u32, recorded_at: u64) -> Self {
        Self { score, recorded_at }
    }

    /// Wall-clock time of day as `HH:MM` (UTC)
    ///
    /// ```
    /// use blockfall_types::ScoreEntry;
    ///
    /// assert_eq!(ScoreEntry::new(40, 14 * 3600 + 5 * 60 + 59).clock(), "14:05");
    /// ```
    pub fn clock(&self) -> String {
        let minutes = self.recorded_at / 60;
        format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
    }
}
