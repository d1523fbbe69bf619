//! blockfall runner (default binary).
//!
//! Interactive terminal game by default. With `BLOCKFALL_HEADLESS` set it runs
//! without a terminal: an auto-player simulation when `BLOCKFALL_AUTOPLAY` is
//! also set, otherwise a line session reading commands from stdin. Headless
//! modes write JSON observations to stdout.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::adapter::{encode_observation, LineSession};
use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit, InputAction};
use blockfall::solver::AutoPlayer;
use blockfall::term::{FrameBuffer, GameView, HudInfo, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;
use blockfall::{Logger, RunConfig, Scoreboard};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut log = Logger::open(config.log_path.as_deref())?;
    log.log(format!(
        "seed={} autoplay={} headless={} solver={}ms/{}ms",
        config.seed,
        config.autoplay,
        config.headless,
        config.solver_interval_ms,
        config.solver_delay_ms
    ));

    if config.headless {
        return if config.autoplay {
            simulate(&config, &mut log)
        } else {
            serve_lines(&config, &mut log)
        };
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    log.set_stderr(false);

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let restored = term.exit();
    log.set_stderr(true);
    if let Err(err) = &result {
        log.log(format!("error: {err:#}"));
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, log: &mut Logger) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let mut bot = AutoPlayer::new(config.autoplay_config());
    if config.autoplay {
        bot.enable(&mut game);
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut scores = Scoreboard::new();
    // Game whose final score is already on the board.
    let mut recorded_game = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudInfo {
            autoplay: bot.enabled(),
            high_scores: scores.entries(),
        };
        view.render_into(&game.snapshot(), &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputAction::Game(command)) => {
                            game.apply(command);
                        }
                        Some(InputAction::ToggleAutoPlay) => {
                            let on = bot.toggle(&mut game);
                            log.log(format!("autoplay {}", if on { "on" } else { "off" }));
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.advance(TICK_MS);
            bot.advance(TICK_MS, &mut game);
        }

        if game.game_over() && recorded_game != Some(game.game_id()) {
            recorded_game = Some(game.game_id());
            let rank = scores.record_now(game.score());
            log.log(format!(
                "game {} over: score={} lines={} level={} rank={:?} best={:?}",
                game.game_id(),
                game.score(),
                game.lines(),
                game.level(),
                rank,
                scores.best()
            ));
        }
    }
}

/// Play with the auto-player until game over or the piece limit; one observation per lock.
fn simulate(config: &RunConfig, log: &mut Logger) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let mut bot = AutoPlayer::new(config.autoplay_config());
    bot.enable(&mut game);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emit = |game: &mut GameState| -> Result<()> {
        if game.take_last_event().is_some() {
            writeln!(out, "{}", encode_observation(&game.snapshot())?)?;
        }
        Ok(())
    };

    let mut elapsed_ms: u64 = 0;
    while game.is_running() && game.piece_id() <= config.max_pieces {
        game.advance(TICK_MS);
        emit(&mut game)?;
        bot.advance(TICK_MS, &mut game);
        emit(&mut game)?;
        elapsed_ms += TICK_MS as u64;
    }

    log.log(format!(
        "simulation done: pieces={} score={} lines={} level={} game_over={} simulated={}ms",
        game.piece_id(),
        game.score(),
        game.lines(),
        game.level(),
        game.game_over(),
        elapsed_ms
    ));
    Ok(())
}

/// Read commands from stdin and answer each with an observation or error line.
fn serve_lines(config: &RunConfig, log: &mut Logger) -> Result<()> {
    let mut session = LineSession::new(config.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some(reply) = session.respond(&line)? {
            writeln!(out, "{reply}")?;
            out.flush()?;
        }
    }

    let game = session.game();
    log.log(format!(
        "input closed: state={} score={} lines={}",
        game.state().as_str(),
        game.score(),
        game.lines()
    ));
    Ok(())
}
