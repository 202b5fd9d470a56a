//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the 2048 board engine. It has **no dependencies** on UI,
//! terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted RNG) produces identical games
//! - **Testable**: Every rule is checked by unit and property tests
//! - **Allocation-free**: Boards and animation traces live on the stack
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, slide/merge transform, terminal-state queries
//! - [`game_state`]: Grid + score + last animation trace + random source
//! - [`rng`]: The [`TileRng`] capability and a scripted implementation for tests
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - **Slide**: tiles move as far as possible toward the chosen wall
//! - **Merge**: two equal neighbours (after sliding) merge once per move;
//!   `[2, 2, 2, 2]` becomes `[4, 4]`, `[2, 2, 2]` becomes `[4, 2]`
//! - **Score**: every merge adds the merged value
//! - **Spawn**: after a move that changed the board the caller spawns a tile,
//!   2 with 90% and 4 with 10% probability, on a uniformly chosen empty cell
//! - **Win**: a 2048 tile is reported; play may continue
//! - **Game over**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState, ScriptedRng};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows([
//!     [2, 2, 2, 2],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]);
//! let mut game = GameState::from_board(board, 0, ScriptedRng::new());
//!
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(game.board().rows()[0], [4, 4, 0, 0]);
//! assert_eq!(game.score(), 8);
//!
//! game.spawn_random_tile();
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{AnimationTrace, Board, Slide};
pub use game_state::{GameState, Spawned};
pub use rng::{ScriptedRng, TileRng};
pub use snapshot::GameSnapshot;
