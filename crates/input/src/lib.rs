//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! auto-repeat handling here: every slide is a discrete press, and the session
//! controller drops presses that arrive while a slide is still animating.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
