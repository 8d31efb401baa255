//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the block puzzle: which shapes exist, where
//! a piece may be dropped, which lines clear, how points are scored and when
//! the session is over. It performs no terminal I/O, so the same engine backs
//! any front end.
//!
//! - **Deterministic**: randomness is injected through [`rng::RandomSource`];
//!   the same seed deals the same hands
//! - **Pure probes**: [`Board::can_place`] and [`GameState::preview`] never
//!   mutate, so a front end may call them on every cursor move
//! - **Atomic drops**: [`GameState::attempt_drop`] either commits fully or is
//!   rejected with no state change
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid, placement checks, row and column clearing
//! - [`game_state`]: the hand, drop handling, replenishment, terminal check
//! - [`highscore`]: persistence seam for the high score
//! - [`pieces`]: the fixed shape catalog and piece instances
//! - [`rng`]: random sources and the piece generator
//! - [`scoring`]: combo scoring and the high score keeper
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use block_puzzle_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! let piece = game.hand_pieces().next().unwrap();
//!
//! // An empty board accepts any piece at the top-left corner.
//! let outcome = game.attempt_drop(piece.id(), 0, 0).unwrap();
//! assert_eq!(outcome.piece_id, piece.id());
//! assert_eq!(game.hand_len(), 2);
//!
//! // The same id is gone from the hand now.
//! assert!(game.attempt_drop(piece.id(), 4, 4).is_err());
//! ```

pub mod board;
pub mod game_state;
pub mod highscore;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use block_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearResult};
pub use game_state::{DropError, DropOutcome, GameState, Preview};
pub use highscore::{HighScoreStore, MemoryHighScore, StoreError};
pub use pieces::{random_gem, random_shape, shape_by_id, Piece, Shape, SHAPES};
pub use rng::{PieceGenerator, RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{calculate_points, ScoreKeeper, ScoreUpdate};
pub use snapshot::{GameSnapshot, HandPieceSnapshot};
