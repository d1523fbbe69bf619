//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb, BLACK, WELL};
use crate::types::{
    PieceKind, PlayState, ScoreEntry, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, PREVIEW_SIZE,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state shown next to the board that the session does not own.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo<'a> {
    pub autoplay: bool,
    /// Best scores, highest first
    pub high_scores: &'a [ScoreEntry],
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left of the board frame and its size in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudInfo<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);
        self.draw_board(fb, snap, frame);
        self.draw_side_panel(fb, snap, hud, viewport, frame);

        match snap.state {
            PlayState::Paused => self.draw_overlay_text(fb, frame, "PAUSED"),
            PlayState::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
            PlayState::Idle => self.draw_overlay_text(fb, frame, "PRESS R"),
            PlayState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudInfo<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        fb.fill_rect(f.x + 1, f.y, f.w - 2, 1, '─', style);
        fb.fill_rect(f.x + 1, bottom, f.w - 2, 1, '─', style);
        fb.fill_rect(f.x, f.y + 1, 1, f.h - 2, '│', style);
        fb.fill_rect(right, f.y + 1, 1, f.h - 2, '│', style);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, f: Frame) {
        let empty = CellStyle::plain(Rgb::new(90, 90, 100), WELL).dim();
        for (y, row) in snap.display.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (ch, style) = match PieceKind::from_id(cell) {
                    Some(kind) => ('█', CellStyle::plain(piece_color(kind), WELL).bold()),
                    None => ('·', empty),
                };
                self.fill_cell(fb, f, x as u16, y as u16, ch, style);
            }
        }

        // Ghost only where nothing else is drawn.
        if snap.state != PlayState::Running {
            return;
        }
        let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) else {
            return;
        };
        let ghost = CellStyle::plain(Rgb::new(140, 140, 140), WELL).dim();
        for (dx, dy) in get_shape(active.kind, active.rotation).minos() {
            let (x, y) = (active.x + dx, ghost_y + dy);
            if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                continue;
            }
            if snap.display[y as usize][x as usize] == EMPTY {
                self.fill_cell(fb, f, x as u16, y as u16, '░', ghost);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudInfo<'_>,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
        let mut y = f.y;

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &n.to_string(), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for (py, row) in snap.preview.iter().enumerate() {
            for (px, &cell) in row.iter().enumerate() {
                let x = panel_x + (px as u16) * 2;
                match PieceKind::from_id(cell) {
                    Some(kind) => {
                        let style = CellStyle::plain(piece_color(kind), BLACK).bold();
                        fb.put_str(x, y + py as u16, "██", style);
                    }
                    None => {
                        fb.put_str(x, y + py as u16, "  ", value);
                    }
                }
            }
        }
        y += PREVIEW_SIZE as u16 + 1;

        fb.put_str(panel_x, y, "AUTO", label);
        fb.put_str(panel_x + 5, y, if hud.autoplay { "ON" } else { "OFF" }, value);
        y += 2;

        fb.put_str(panel_x, y, "HIGH SCORES", label);
        y += 1;
        if hud.high_scores.is_empty() {
            fb.put_str(panel_x, y, "-", value.dim());
        }
        for (i, entry) in hud.high_scores.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let line = format!("{}. {:<6} {}", i + 1, entry.score, entry.clock());
            fb.put_str(panel_x, y, &line, value);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let y = f.y.saturating_add(f.h / 2);
        fb.put_str(x, y, text, CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold());
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
