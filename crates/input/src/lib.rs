//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputAction`]s: game commands for the
//! session plus the auto-player toggle, which the game loop handles itself.
//! Every key press is one command; there is no key repeat handling beyond
//! what the terminal sends.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, InputAction};
