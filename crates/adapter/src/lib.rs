//! Adapter module - drive a session over plain text lines
//!
//! Lets scripts and external agents play through stdin/stdout without a
//! terminal. Each input line holds one command; each reply is one JSON
//! observation.
//!
//! # Protocol Overview
//!
//! ## Client → Game
//!
//! A command name (`moveLeft`, `moveRight`, `moveDown`, `rotate`, `hardDrop`,
//! `start`, `pause`, `resume`, `togglePause`), either bare or wrapped as
//! `{"command":"<name>"}`. Names are case-insensitive.
//!
//! ## Game → Client
//!
//! - **observation**: `pieceId`, `state`, `score`, `level`, `lines`, `next`,
//!   `board` (20 rows of 10 cells, falling piece overlaid) and `preview` (4x4)
//! - **error**: `{"error":"<code>","message":"..."}` for rejected input
//!
//! # Example Protocol Flow
//!
//! ```text
//! > start
//! < {"pieceId":1,"state":"running","score":0,"level":1,"lines":0,"next":"t","board":[[0,0,...]],"preview":[[0,0,0,0],...]}
//! > {"command":"hardDrop"}
//! < {"pieceId":2,"state":"running",...}
//! > hold
//! < {"error":"invalid_command","message":"unknown command: hold"}
//! ```

pub mod error;
pub mod protocol;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use error::AdapterError;
pub use protocol::*;
pub use session::LineSession;
