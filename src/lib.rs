//! Block puzzle (workspace facade crate).
//!
//! Re-exports the member crates under short names so tests, benches and the
//! binary can write `block_puzzle::core::GameState` and so on, and hosts the
//! binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use block_puzzle_core as core;
pub use block_puzzle_input as input;
pub use block_puzzle_store as store;
pub use block_puzzle_term as term;
pub use block_puzzle_types as types;
