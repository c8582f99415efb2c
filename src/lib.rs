//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, benches and
//! integration tests can write `tui_2048::{core,input,session,term,types}`.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_session as session;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
