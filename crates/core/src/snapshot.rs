use crate::board::AnimationTrace;
use crate::types::{Tile, BOARD_SIZE};

/// Read-only copy of the engine state, consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub board: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub max_tile: Tile,
    pub won: bool,
    pub game_over: bool,
    pub animations: AnimationTrace,
}

impl GameSnapshot {
    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&v| v != 0).count()
    }
}
