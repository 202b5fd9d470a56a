//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable from the
//! engine, the terminal view, and the input layer alike.
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid addressed as `(row, col)`:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Event loop timestep (~60 FPS) |
//! | `ANIMATION_MS` | 150 | Slide tween duration |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, BOARD_SIZE, WIN_TILE};
//!
//! assert_eq!(Direction::Up.as_str(), "up");
//! assert!(Direction::Down.is_reversed());
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the square board (4 cells)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that counts as a win
pub const WIN_TILE: u32 = 2048;

/// Number of tiles spawned when a game starts
pub const INITIAL_TILES: usize = 2;

/// Chance that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Fixed event loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the slide/merge tween in milliseconds
pub const ANIMATION_MS: u32 = 150;

/// A cell value: 0 for empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True when lines are rows (Left/Right), false for columns (Up/Down).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the wall tiles move toward sits at the high index end (Right/Down).
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Player actions fed to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Slide every tile toward one wall
    Slide(Direction),
    /// Throw the current board away and start a new game
    Restart,
}

/// How one tile travelled during the most recent move.
///
/// `value` is what the tile shows once the slide completes. When two tiles
/// merge, both get a record pointing at the same destination with the merged
/// value; only the incoming tile has `merged` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileAnimation {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    pub value: Tile,
    pub merged: bool,
}
