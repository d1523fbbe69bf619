//! Timed auto-player.
//!
//! Drives a [`GameState`] through its public commands only. A decision ticker
//! fires every `interval_ms`; each fire takes one move from the plan and holds
//! it for `command_delay_ms` before dispatching it. Plans are rebuilt from a
//! fresh snapshot when the queue runs dry and the board or piece changed, and
//! are dropped as soon as the piece they were made for has locked.

use std::collections::VecDeque;

use blockfall_core::{GameState, Grid, Ticker};
use blockfall_types::{Command, PlayState, SOLVER_COMMAND_DELAY_MS, SOLVER_INTERVAL_MS};

use crate::eval::Weights;
use crate::search::{find_best_placement, lateral_moves, plan_moves, Placement, SolverMove};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoPlayConfig {
    pub interval_ms: u32,
    pub command_delay_ms: u32,
    pub weights: Weights,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            interval_ms: SOLVER_INTERVAL_MS,
            command_delay_ms: SOLVER_COMMAND_DELAY_MS,
            weights: Weights::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    config: AutoPlayConfig,
    ticker: Ticker,
    queue: VecDeque<SolverMove>,
    /// Move waiting out its dispatch delay, with the time left
    pending: Option<(SolverMove, u32)>,
    target: Option<Placement>,
    /// Piece the current queue was planned for
    plan_piece_id: u32,
    /// (board hash, piece id) seen by the last planning attempt
    last_view: Option<(u64, u32)>,
}

impl AutoPlayer {
    pub fn new(config: AutoPlayConfig) -> Self {
        Self {
            config,
            ticker: Ticker::new(config.interval_ms),
            queue: VecDeque::new(),
            pending: None,
            target: None,
            plan_piece_id: 0,
            last_view: None,
        }
    }

    pub fn config(&self) -> &AutoPlayConfig {
        &self.config
    }

    pub fn enabled(&self) -> bool {
        self.ticker.is_running()
    }

    /// Moves still queued, not counting the pending one
    pub fn queued(&self) -> &VecDeque<SolverMove> {
        &self.queue
    }

    pub fn pending(&self) -> Option<SolverMove> {
        self.pending.map(|(mv, _)| mv)
    }

    /// Start playing; starts a new game when there is nothing to play
    pub fn enable(&mut self, game: &mut GameState) {
        if self.enabled() {
            return;
        }
        self.reset_plan();
        self.ticker.start(self.config.interval_ms);
        if matches!(game.state(), PlayState::Idle | PlayState::GameOver) {
            game.apply(Command::Start);
        }
    }

    /// Stop playing; the game itself is left untouched
    pub fn disable(&mut self) {
        self.ticker.stop();
        self.reset_plan();
    }

    /// Flip on/off; returns the new state
    pub fn toggle(&mut self, game: &mut GameState) -> bool {
        if self.enabled() {
            self.disable();
        } else {
            self.enable(game);
        }
        self.enabled()
    }

    fn reset_plan(&mut self) {
        self.queue.clear();
        self.pending = None;
        self.target = None;
        self.last_view = None;
    }

    /// Advance by `elapsed_ms`; returns true if a command changed the game
    pub fn advance(&mut self, elapsed_ms: u32, game: &mut GameState) -> bool {
        if !self.enabled() {
            return false;
        }
        if !game.is_running() {
            // Paused or over: nothing is scheduled until play resumes.
            self.reset_plan();
            return false;
        }

        let mut changed = false;

        if let Some((mv, left)) = self.pending {
            if elapsed_ms >= left {
                self.pending = None;
                changed |= self.dispatch(mv, game);
            } else {
                self.pending = Some((mv, left - elapsed_ms));
            }
        }

        let fires = self.ticker.advance(elapsed_ms);
        for _ in 0..fires {
            if !game.is_running() {
                break;
            }
            if let Some((mv, _)) = self.pending.take() {
                changed |= self.dispatch(mv, game);
            }
            changed |= self.step(game);
        }

        // Time already spent since the last fire counts against the delay.
        if fires > 0 {
            if let Some((mv, left)) = self.pending {
                let since = self.ticker.elapsed_ms();
                if since >= left {
                    self.pending = None;
                    changed |= self.dispatch(mv, game);
                } else {
                    self.pending = Some((mv, left - since));
                }
            }
        }

        changed
    }

    /// One decision: refresh the plan if needed and schedule its next move
    fn step(&mut self, game: &mut GameState) -> bool {
        let snap = game.snapshot();
        let Some(active) = snap.active else {
            return false;
        };

        if !self.queue.is_empty() && self.plan_piece_id != snap.piece_id {
            self.queue.clear();
            self.target = None;
        }

        if self.queue.is_empty() {
            let view = (snap.board_hash, snap.piece_id);
            if self.last_view == Some(view) {
                return false;
            }
            self.last_view = Some(view);

            let grid = Grid::from_rows(&snap.grid);
            let Some(target) = find_best_placement(&grid, active.kind, &self.config.weights)
            else {
                return false;
            };
            self.queue = plan_moves(&active, &target);
            self.target = Some(target);
            self.plan_piece_id = snap.piece_id;
        }

        let Some(mv) = self.queue.pop_front() else {
            return false;
        };
        if self.config.command_delay_ms == 0 {
            return self.dispatch(mv, game);
        }
        self.pending = Some((mv, self.config.command_delay_ms));
        false
    }

    fn dispatch(&mut self, mv: SolverMove, game: &mut GameState) -> bool {
        if game.piece_id() != self.plan_piece_id {
            // Planned for a piece that already locked.
            self.queue.clear();
            self.target = None;
            return false;
        }

        let changed = game.apply(mv.command());

        // A wall kick may have shifted the piece; re-aim the lateral steps.
        if mv == SolverMove::Rotate && self.queue.front() != Some(&SolverMove::Rotate) {
            if let (Some(target), Some(active)) = (self.target, game.active()) {
                self.queue = lateral_moves(active.x, target.x);
            }
        }

        changed
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new(AutoPlayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> AutoPlayConfig {
        AutoPlayConfig {
            interval_ms: 10,
            command_delay_ms: 0,
            ..AutoPlayConfig::default()
        }
    }

    #[test]
    fn enabling_starts_an_idle_game() {
        let mut game = GameState::new(3);
        let mut bot = AutoPlayer::default();

        assert!(bot.toggle(&mut game));
        assert!(game.is_running());
        assert_eq!(game.game_id(), 1);
    }

    #[test]
    fn enabling_does_not_restart_a_running_game() {
        let mut game = GameState::new(3);
        game.start();
        let mut bot = AutoPlayer::default();
        bot.enable(&mut game);
        assert_eq!(game.game_id(), 1);
    }

    #[test]
    fn first_fire_plans_and_holds_a_pending_move() {
        let mut game = GameState::new(9);
        let mut bot = AutoPlayer::default();
        bot.enable(&mut game);
        let before = game.snapshot();

        assert!(!bot.advance(199, &mut game));
        assert!(bot.pending().is_none());

        // Fires at 200 ms; the move waits 50 ms before reaching the game.
        bot.advance(1, &mut game);
        assert!(bot.pending().is_some());
        assert_eq!(game.snapshot().active, before.active);

        bot.advance(50, &mut game);
        assert!(bot.pending().is_none());
    }

    #[test]
    fn disabling_clears_the_plan_but_keeps_the_game() {
        let mut game = GameState::new(9);
        let mut bot = AutoPlayer::default();
        bot.enable(&mut game);
        bot.advance(200, &mut game);
        assert!(bot.pending().is_some() || !bot.queued().is_empty());

        let before = game.snapshot();
        assert!(!bot.toggle(&mut game));
        assert!(bot.pending().is_none());
        assert!(bot.queued().is_empty());
        assert!(!bot.enabled());
        assert_eq!(game.snapshot(), before);

        // Disabled players never touch the game.
        assert!(!bot.advance(10_000, &mut game));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn plays_pieces_to_completion() {
        let mut game = GameState::new(42);
        let mut bot = AutoPlayer::new(fast());
        bot.enable(&mut game);

        for _ in 0..2_000 {
            bot.advance(10, &mut game);
            if game.piece_id() > 20 {
                break;
            }
        }
        assert!(game.piece_id() > 20, "stuck at piece {}", game.piece_id());
        assert!(game.is_running());
    }

    #[test]
    fn stale_plan_is_discarded_after_lock() {
        let mut game = GameState::new(5);
        let mut bot = AutoPlayer::new(AutoPlayConfig {
            command_delay_ms: 5,
            ..fast()
        });
        bot.enable(&mut game);

        bot.advance(10, &mut game);
        assert!(bot.pending().is_some());
        let planned_for = game.piece_id();
        // Lock the piece behind the player's back.
        game.apply(Command::HardDrop);
        let current = game.piece_id();
        assert_ne!(current, planned_for);

        // The held move is dropped instead of steering the new piece.
        assert!(!bot.advance(10, &mut game));
        assert_eq!(game.piece_id(), current);
        assert_eq!(bot.plan_piece_id, current);
    }

    #[test]
    fn pause_halts_the_player() {
        let mut game = GameState::new(5);
        let mut bot = AutoPlayer::default();
        bot.enable(&mut game);
        game.apply(Command::Pause);

        let before = game.snapshot();
        assert!(!bot.advance(5_000, &mut game));
        assert_eq!(game.snapshot(), before);
        assert!(bot.pending().is_none());
    }
}
