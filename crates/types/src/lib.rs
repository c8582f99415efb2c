//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, session orchestration, terminal rendering).
//!
//! # Board Dimensions
//!
//! The classic game is played on a 4x4 grid. The engine types are generic over
//! the dimension, but every front end uses [`BOARD_SIZE`].
//!
//! # Spawn Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//! | `FOUR_PROBABILITY` | 0.1 | Chance that a spawned tile is a 4 |
//! | `SPAWN_LOW` | 2 | Common spawn value |
//! | `SPAWN_HIGH` | 4 | Rare spawn value |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Axis, Direction, GameAction, BOARD_SIZE};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir.axis(), Axis::Column);
//! assert!(dir.toward_start());
//!
//! let action = GameAction::from_str("restart").unwrap();
//! assert_eq!(action, GameAction::Restart);
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board edge length in cells (4x4 grid)
pub const BOARD_SIZE: usize = 4;

/// Number of tiles placed on a freshly initialized board
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is [`SPAWN_HIGH`] instead of [`SPAWN_LOW`]
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Common spawn value
pub const SPAWN_LOW: Tile = 2;

/// Rare spawn value
pub const SPAWN_HIGH: Tile = 4;

/// A cell on the board
///
/// - `0`: Empty cell
/// - otherwise: a power of two, at least 2
pub type Tile = u32;

/// Row or column orientation of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lines are rows (Left/Right moves)
    Row,
    /// Lines are columns (Up/Down moves)
    Column,
}

/// The four slide directions
///
/// Each direction maps to an [`Axis`] and a polarity: Up and Left push tiles
/// toward index 0, Down and Right toward index N-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Axis along which lines are extracted for this direction
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Column,
            Direction::Left | Direction::Right => Axis::Row,
        }
    }

    /// Whether tiles slide toward index 0 of each line
    pub fn toward_start(&self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// Stable index (0=Up, 1=Down, 2=Left, 3=Right)
    pub fn index(&self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Convert an index back into a direction, `None` when out of range
    pub fn try_from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Convert an index back into a direction
    ///
    /// # Panics
    ///
    /// Panics when `index > 3`. Callers holding untrusted input should use
    /// [`Direction::try_from_index`] instead.
    pub fn from_index(index: u8) -> Self {
        match Self::try_from_index(index) {
            Some(dir) => dir,
            None => panic!("direction index out of range: {index}"),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions a player (or script) can apply to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in a direction
    Move(Direction),
    /// Discard the current board and score and start over
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
