//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core engine, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 8 x 8 cells (rows and columns indexed 0-7)
//! - **Hand**: 3 pieces available for placement at a time
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_POINTS` | 100 | Points per cleared line at combo 1 |
//!
//! # Examples
//!
//! ```
//! use block_puzzle_types::{Gem, PlayerCommand, GRID_SIZE, HAND_SIZE};
//!
//! // Parse a gem from string (case-insensitive)
//! let gem = Gem::from_str("Ruby").unwrap();
//! assert_eq!(gem, Gem::Ruby);
//! assert_eq!(gem.as_str(), "ruby");
//!
//! // Parse a player command
//! let cmd = PlayerCommand::from_str("drop").unwrap();
//! assert_eq!(cmd, PlayerCommand::Drop);
//!
//! assert_eq!(GRID_SIZE, 8);
//! assert_eq!(HAND_SIZE, 3);
//! ```

/// Grid side length in cells (8 rows x 8 columns)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of pieces in a freshly dealt hand
pub const HAND_SIZE: usize = 3;

/// Points awarded per cleared line before the combo multiplier
pub const BASE_POINTS: u32 = 100;

/// Largest bounding-box side of any catalog shape
pub const MAX_SHAPE_SIDE: usize = 3;

/// Unique id of a piece instance within a session.
///
/// Ids are handed out monotonically by the piece generator and are never
/// reused while the generator lives, so a stale id from an earlier hand can
/// never alias a fresh piece.
pub type PieceId = u32;

/// The gem palette pieces are colored with
///
/// Nine precious stones, each with a distinct display color:
/// - **Emerald**: green
/// - **Diamond**: pale blue
/// - **Gold**: yellow
/// - **Sapphire**: deep blue
/// - **Ruby**: crimson
/// - **Amethyst**: violet
/// - **Tourmaline**: teal
/// - **Topaz**: orange
/// - **Peridot**: lime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gem {
    Emerald,
    Diamond,
    Gold,
    Sapphire,
    Ruby,
    Amethyst,
    Tourmaline,
    Topaz,
    Peridot,
}

impl Gem {
    /// Every gem, in palette order
    pub const ALL: [Gem; 9] = [
        Gem::Emerald,
        Gem::Diamond,
        Gem::Gold,
        Gem::Sapphire,
        Gem::Ruby,
        Gem::Amethyst,
        Gem::Tourmaline,
        Gem::Topaz,
        Gem::Peridot,
    ];

    /// Parse gem from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_puzzle_types::Gem;
    ///
    /// assert_eq!(Gem::from_str("emerald"), Some(Gem::Emerald));
    /// assert_eq!(Gem::from_str("TOPAZ"), Some(Gem::Topaz));
    /// assert_eq!(Gem::from_str("quartz"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emerald" => Some(Gem::Emerald),
            "diamond" => Some(Gem::Diamond),
            "gold" => Some(Gem::Gold),
            "sapphire" => Some(Gem::Sapphire),
            "ruby" => Some(Gem::Ruby),
            "amethyst" => Some(Gem::Amethyst),
            "tourmaline" => Some(Gem::Tourmaline),
            "topaz" => Some(Gem::Topaz),
            "peridot" => Some(Gem::Peridot),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gem::Emerald => "emerald",
            Gem::Diamond => "diamond",
            Gem::Gold => "gold",
            Gem::Sapphire => "sapphire",
            Gem::Ruby => "ruby",
            Gem::Amethyst => "amethyst",
            Gem::Tourmaline => "tourmaline",
            Gem::Topaz => "topaz",
            Gem::Peridot => "peridot",
        }
    }

    /// Position in [`Gem::ALL`]
    pub fn index(&self) -> u8 {
        match self {
            Gem::Emerald => 0,
            Gem::Diamond => 1,
            Gem::Gold => 2,
            Gem::Sapphire => 3,
            Gem::Ruby => 4,
            Gem::Amethyst => 5,
            Gem::Tourmaline => 6,
            Gem::Topaz => 7,
            Gem::Peridot => 8,
        }
    }

    /// Inverse of [`Gem::index`]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Display color as 0xRRGGBB
    pub fn rgb(&self) -> u32 {
        match self {
            Gem::Emerald => 0x50C878,
            Gem::Diamond => 0xB9F2FF,
            Gem::Gold => 0xFFD700,
            Gem::Sapphire => 0x0F52BA,
            Gem::Ruby => 0xE0115F,
            Gem::Amethyst => 0x9966CC,
            Gem::Tourmaline => 0x00CED1,
            Gem::Topaz => 0xFF6347,
            Gem::Peridot => 0x32CD32,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Gem)`: Cell occupied by a committed piece of that gem
pub type Cell = Option<Gem>;

/// Session lifecycle
///
/// `GameOver` is terminal: only a restart re-enters `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Player commands produced by the input layer
///
/// The cursor commands stand in for a pointer drag: the player picks a hand
/// slot, moves the anchor cell, then drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Move the target cell one row up
    CursorUp,
    /// Move the target cell one row down
    CursorDown,
    /// Move the target cell one column left
    CursorLeft,
    /// Move the target cell one column right
    CursorRight,
    /// Pick the hand slot with this index
    SelectSlot(u8),
    /// Pick the next non-empty hand slot
    NextSlot,
    /// Drop the selected piece at the cursor
    Drop,
    /// Start a fresh session
    Restart,
}

impl PlayerCommand {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use block_puzzle_types::PlayerCommand;
    ///
    /// assert_eq!(PlayerCommand::from_str("cursorLeft"), Some(PlayerCommand::CursorLeft));
    /// assert_eq!(PlayerCommand::from_str("slot2"), Some(PlayerCommand::SelectSlot(2)));
    /// assert_eq!(PlayerCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(slot) = lower.strip_prefix("slot") {
            return slot.parse().ok().map(PlayerCommand::SelectSlot);
        }
        match lower.as_str() {
            "cursorup" => Some(PlayerCommand::CursorUp),
            "cursordown" => Some(PlayerCommand::CursorDown),
            "cursorleft" => Some(PlayerCommand::CursorLeft),
            "cursorright" => Some(PlayerCommand::CursorRight),
            "nextslot" => Some(PlayerCommand::NextSlot),
            "drop" => Some(PlayerCommand::Drop),
            "restart" => Some(PlayerCommand::Restart),
            _ => None,
        }
    }
}
