//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints a
//! [`core::GameSnapshot`] into a framebuffer, and the renderer flushes that
//! framebuffer to a terminal backend. No widget or layout library is
//! involved, which keeps control over the aspect ratio (2 chars wide per
//! grid cell).
//!
//! The view never asks the engine anything beyond the snapshot and the
//! shape catalog, so any other theme can be built the same way.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_puzzle_core as core;
pub use block_puzzle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
