//! Game session orchestration.
//!
//! Wraps the pure engine in the caller protocol a front end needs:
//! request a move or a restart, read back board / score / best score /
//! game-over state, and keep the best score in a swappable store.
//!
//! ```
//! use tui_2048_session::{MemoryStore, Session};
//! use tui_2048_types::Direction;
//!
//! let mut session: Session<_> = Session::new(7, MemoryStore::default());
//! session.request_move(Direction::Left);
//! assert!(session.high_score() >= session.score());
//! ```

pub mod session;
pub mod store;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::Session;
pub use store::{HighScoreStore, JsonFileStore, MemoryStore, StoreError};
