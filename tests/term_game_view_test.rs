use blockfall::core::GameState;
use blockfall::term::{FrameBuffer, GameView, HudInfo, Viewport};
use blockfall::types::{Command, ScoreEntry};

fn contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

fn count(fb: &FrameBuffer, ch: char) -> usize {
    (0..fb.height())
        .map(|y| fb.row(y).iter().filter(|c| c.ch == ch).count())
        .sum()
}

#[test]
fn game_over_overlay_and_scoreboard() {
    let mut game = GameState::new(11);
    game.start();
    while game.is_running() {
        game.apply(Command::HardDrop);
    }

    let scores = [
        ScoreEntry::new(300, 9 * 3600),
        ScoreEntry::new(120, 9 * 3600 + 60),
        ScoreEntry::new(40, 23 * 3600 + 59 * 60),
    ];
    let hud = HudInfo {
        autoplay: false,
        high_scores: &scores,
    };
    let fb = GameView::default().render(&game.snapshot(), &hud, Viewport::new(80, 24));
    assert!(contains(&fb, "GAME OVER"));
    assert!(contains(&fb, "1. 300    09:00"));
    assert!(contains(&fb, "3. 40     23:59"));
}

#[test]
fn ghost_is_drawn_below_a_running_piece() {
    let mut game = GameState::new(5);
    game.start();
    let fb = GameView::default().render(&game.snapshot(), &HudInfo::default(), Viewport::new(80, 24));
    // Four ghost cells, two columns each.
    assert_eq!(count(&fb, '░'), 8);

    game.apply(Command::Pause);
    let fb = GameView::default().render(&game.snapshot(), &HudInfo::default(), Viewport::new(80, 24));
    assert_eq!(count(&fb, '░'), 0);
}

#[test]
fn render_into_reuses_and_resizes() {
    let mut game = GameState::new(5);
    game.start();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&game.snapshot(), &HudInfo::default(), Viewport::new(70, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (70, 30));
    let first = fb.clone();

    view.render_into(&game.snapshot(), &HudInfo::default(), Viewport::new(70, 30), &mut fb);
    assert_eq!(fb, first);
}
