//! Terminal front-end for blockfall.
//!
//! A small, game-oriented rendering layer: a [`GameView`] paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`], and a
//! [`TerminalRenderer`] flushes that buffer to the terminal, redrawing only the
//! cells that changed since the previous frame.
//!
//! Board cells are drawn two columns wide to make up for the usual terminal
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudInfo, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
