//! Auto-solver integration tests

use blockfall::core::{get_shape, GameState, Grid};
use blockfall::solver::{
    compute_features, find_best_move, find_best_placement, AutoPlayConfig, AutoPlayer, SolverMove,
    Weights,
};
use blockfall::types::{Command, PieceKind};

fn quick() -> AutoPlayConfig {
    AutoPlayConfig {
        interval_ms: 20,
        command_delay_ms: 5,
        ..AutoPlayConfig::default()
    }
}

#[test]
fn test_features_of_a_small_stack() {
    let mut grid = Grid::new();
    // Column 0 height 3 with a hole at row 18, column 1 height 1.
    grid.set(0, 17, 1);
    grid.set(0, 19, 1);
    grid.set(1, 19, 1);

    let f = compute_features(&grid);
    assert_eq!(f.holes, 1);
    assert_eq!(f.aggregate_height, 4);
    assert_eq!(f.bumpiness, 2 + 1);
    assert_eq!(f.complete_lines, 0);
}

#[test]
fn test_same_input_same_plan() {
    let mut game = GameState::new(99);
    game.start();
    for _ in 0..6 {
        game.apply(Command::HardDrop);
    }
    let snap = game.snapshot();
    let grid = Grid::from_rows(&snap.grid);
    let active = snap.active.unwrap();

    let first = find_best_move(&grid, &active, &Weights::default());
    for _ in 0..5 {
        assert_eq!(find_best_move(&grid, &active, &Weights::default()), first);
    }
    let plan = first.unwrap();
    assert_eq!(plan.back(), Some(&SolverMove::Drop));
    assert_eq!(plan.iter().filter(|&&m| m == SolverMove::Drop).count(), 1);
}

#[test]
fn test_solver_fills_a_well() {
    let mut grid = Grid::new();
    for y in 16..20 {
        for x in 0..10 {
            if x != 4 {
                grid.set(x, y, PieceKind::Z.id());
            }
        }
    }

    let best = find_best_placement(&grid, PieceKind::I, &Weights::default()).unwrap();
    // Vertical I: matrix column 2, so x = 4 - 2.
    assert_eq!((best.rotation, best.x, best.landing_y), (1, 2, 16));
    let (_, cleared) = grid
        .place(PieceKind::I, &get_shape(PieceKind::I, 1), best.x, best.landing_y)
        .clear_completed_rows();
    assert_eq!(cleared, 4);
}

#[test]
fn test_autoplayer_clears_lines() {
    let mut game = GameState::new(2);
    let mut bot = AutoPlayer::new(quick());
    bot.enable(&mut game);

    let mut ms = 0;
    while game.lines() == 0 && game.is_running() && ms < 600_000 {
        game.advance(16);
        bot.advance(16, &mut game);
        ms += 16;
    }
    assert!(game.lines() > 0, "no line after {ms}ms, piece {}", game.piece_id());
}

#[test]
fn test_disabling_clears_the_queue() {
    let mut game = GameState::new(8);
    let mut bot = AutoPlayer::new(quick());
    bot.enable(&mut game);
    bot.advance(20, &mut game);
    assert!(bot.pending().is_some());

    bot.disable();
    assert!(!bot.enabled());
    assert!(bot.pending().is_none());
    assert!(bot.queued().is_empty());
    assert!(game.is_running());
}

#[test]
fn test_player_keeps_a_game_alive() {
    let mut game = GameState::new(31);
    let mut bot = AutoPlayer::new(quick());
    bot.enable(&mut game);

    for _ in 0..20_000 {
        game.advance(16);
        bot.advance(16, &mut game);
        if game.piece_id() > 40 {
            break;
        }
    }
    assert!(game.is_running());
    assert!(game.piece_id() > 40, "stuck at piece {}", game.piece_id());
}
