//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `tui_2048::{core,input,term,types}` and
//! holds the pieces that tie them together: configuration, logging setup, and
//! the session controller used by the binary.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
