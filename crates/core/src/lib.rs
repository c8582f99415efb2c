//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the sliding-tile game. It has **zero
//! dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a function of explicit inputs
//! - **Portable**: Runs in a terminal, a GUI or headless
//! - **Allocation-free**: Boards are fixed-size arrays and moves run on the stack
//!
//! # Module Structure
//!
//! - [`line`]: slide-and-merge of a single row or column
//! - [`board`]: N x N grid, move application, spawning, terminal detection
//! - [`game_state`]: board + score + RNG, runs the per-move protocol
//! - [`rng`]: seedable LCG implementing `rand::RngCore`
//! - [`snapshot`]: `Copy` views for presentation layers
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once
//! - Each merge scores the value of the resulting tile
//! - After a board-changing move a 2 (90%) or 4 (10%) appears on an empty cell
//! - The game ends when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game: GameState = GameState::new(12345);
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, game.score());
//! ```

pub mod board;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveResult, Spawn};
pub use game_state::{ActionOutcome, GameState, MoveOutcome};
pub use line::{transform, LineResult};
pub use rng::SimpleRng;
pub use snapshot::{board_hash, GameSnapshot};
