//! Terminal presentation for the 2048 board.
//!
//! Renders engine snapshots into a simple framebuffer that is then flushed to
//! the terminal with crossterm. No ratatui widgets or layout.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: tile colour table
//! - [`tween`]: fixed-duration slide interpolation
//! - [`game_view`]: snapshot -> framebuffer
//! - [`renderer`]: framebuffer -> terminal (full or diff redraw)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod tween;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, Viewport};
pub use palette::{tile_bg, tile_style};
pub use renderer::{encode_changes, encode_full, TerminalRenderer};
pub use tween::{lerp_cell, Tween};
