//! Game state module - manages the complete game session
//!
//! This module ties together the core components: grid, pieces, RNG, scoring
//! and the gravity ticker. It owns the active piece, handles movement,
//! rotation with wall kicks, locking, line clears and the session lifecycle.
//!
//! Game over is detected when a freshly spawned piece collides at its spawn
//! position. The piece that failed to spawn stays visible until the next
//! `start`.

use std::iter;

use crate::grid::{build_preview, Grid, Preview};
use crate::pieces::{get_shape, rotation_count, spawn_position, Shape};
use crate::rng::PieceSource;
use crate::scoring::{calculate_score, get_drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::ticker::Ticker;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Matrix for the current rotation
    pub fn shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        grid.collides(&self.shape(), self.x, self.y)
    }

    /// Copy translated by (dx, dy)
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Tetromino>,
    next: PieceKind,
    preview: Preview,
    pieces: PieceSource,
    score: u32,
    level: u32,
    lines: u32,
    state: PlayState,
    drop_timer: Ticker,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Monotonic game id (increments on every start).
    game_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut pieces = PieceSource::new(seed);
        let next = pieces.next_kind();

        Self {
            grid: Grid::new(),
            active: None,
            next,
            preview: build_preview(&get_shape(next, 0)),
            pieces,
            score: 0,
            level: 1,
            lines: 0,
            state: PlayState::Idle,
            drop_timer: Ticker::new(get_drop_interval_ms(1)),
            piece_id: 0,
            game_id: 0,
            last_event: None,
        }
    }

    /// Reset the session and start a new game; valid from any state
    pub fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.active = None;
        self.last_event = None;
        self.game_id = self.game_id.wrapping_add(1);
        self.state = PlayState::Running;
        self.drop_timer.start(get_drop_interval_ms(self.level));

        let first = self.pieces.next_kind();
        let next = self.pieces.next_kind();
        self.set_next(next);
        self.spawn(first);
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == PlayState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_timer.interval_ms()
    }

    /// True while the gravity timer is armed
    pub fn ticking(&self) -> bool {
        self.drop_timer.is_running()
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows_into(&mut out.grid);
        self.display_grid().write_rows_into(&mut out.display);

        out.board_hash = self.grid.board_hash();
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.preview = self.preview;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.state = self.state;
        out.piece_id = self.piece_id;
        out.game_id = self.game_id;
        out.drop_interval_ms = self.drop_timer.interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Locked cells with the active piece written over them
    pub fn display_grid(&self) -> Grid {
        match self.active {
            Some(p) => self.grid.place(p.kind, &p.shape(), p.x, p.y),
            None => self.grid,
        }
    }

    /// Row the active piece would land on
    pub fn ghost_y(&self) -> Option<i8> {
        self.active.map(|p| self.landing_y(&p))
    }

    fn landing_y(&self, piece: &Tetromino) -> i8 {
        let mut probe = *piece;
        while !probe.moved(0, 1).collides(&self.grid) {
            probe = probe.moved(0, 1);
        }
        probe.y
    }

    fn set_next(&mut self, kind: PieceKind) {
        self.next = kind;
        self.preview = build_preview(&get_shape(kind, 0));
    }

    /// Put `kind` at its spawn position; returns false and ends the game if it collides
    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Tetromino::new(kind);
        self.active = Some(piece);

        if piece.collides(&self.grid) {
            self.state = PlayState::GameOver;
            self.drop_timer.stop();
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.moved(dx, dy);
        if moved.collides(&self.grid) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.is_running() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.is_running() && self.try_move(1, 0)
    }

    /// Move down one row, locking the piece if it is resting on something
    pub fn move_down(&mut self) -> bool {
        if !self.is_running() || self.active.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_active();
        }
        true
    }

    /// Rotate clockwise, trying the wall-kick offsets in order when blocked
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let count = rotation_count(active.kind);
        let rotation = (active.rotation + 1) % count;
        if rotation == active.rotation {
            return false;
        }

        let turned = Tetromino {
            rotation,
            ..active
        };
        for dx in iter::once(0).chain(WALL_KICKS) {
            let candidate = turned.moved(dx, 0);
            if !candidate.collides(&self.grid) {
                self.active = Some(candidate);
                return true;
            }
        }
        false
    }

    /// Drop to the landing row and lock
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let y = self.landing_y(&active);
        self.active = Some(Tetromino { y, ..active });
        self.lock_active();
        true
    }

    /// Running -> Paused; no-op otherwise
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = PlayState::Paused;
        self.drop_timer.stop();
        true
    }

    /// Paused -> Running at the current level's interval; no-op otherwise
    pub fn resume(&mut self) -> bool {
        if !self.paused() {
            return false;
        }
        self.state = PlayState::Running;
        self.drop_timer.start(get_drop_interval_ms(self.level));
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            PlayState::Running => self.pause(),
            PlayState::Paused => self.resume(),
            _ => false,
        }
    }

    /// Write the active piece into the grid, clear rows, score, and spawn the next piece
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.grid.stamp(piece.kind, &piece.shape(), piece.x, piece.y);
        let cleared = self.grid.clear_full_rows().len();

        let result = calculate_score(cleared, self.level, self.lines);
        self.score = self.score.saturating_add(result.points);
        self.lines = result.lines;
        self.level = result.level;

        // Each new piece gets a full gravity period.
        self.drop_timer.set_interval(get_drop_interval_ms(self.level));

        let kind = self.next;
        let next = self.pieces.next_kind();
        self.set_next(next);
        let spawned = self.spawn(kind);

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            points: result.points,
            level_up: result.level_up,
            game_over: !spawned,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a command; returns true if the session changed
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Start => {
                self.start();
                true
            }
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    /// Advance the gravity timer; each elapsed interval is one `move_down`
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let fires = self.drop_timer.advance(elapsed_ms);
        let mut changed = false;
        for _ in 0..fires {
            if !self.move_down() {
                break;
            }
            changed = true;
        }
        changed
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
