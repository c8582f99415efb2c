//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Moves are
//! discrete, so there is no auto-repeat handling: one key press, one action.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
