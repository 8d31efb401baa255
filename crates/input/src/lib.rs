//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::PlayerCommand`] and keeps
//! a keyboard cursor that stands in for dragging a piece: pick a hand slot,
//! steer the anchor cell over the grid, drop.
//!
//! Nothing here knows the rules. The cursor only tracks where the player is
//! pointing; legality is the engine's call.

pub mod cursor;
pub mod map;

pub use block_puzzle_types as types;

pub use cursor::{CursorAction, DragCursor};
pub use map::{handle_key_event, should_quit};
