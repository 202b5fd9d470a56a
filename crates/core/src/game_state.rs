//! Game state module - the board engine
//!
//! `GameState` owns the grid, the score, the random source, and the animation
//! trace of the most recent move. It never spawns on its own after a move;
//! the caller decides when to call [`GameState::spawn_random_tile`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{AnimationTrace, Board};
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Tile, TileAnimation, INITIAL_TILES};

/// A tile placed by [`GameState::spawn_random_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    score: u32,
    /// Trace of the last `apply_move` call, replaced on every call.
    last_animations: AnimationTrace,
    rng: R,
}

impl GameState<StdRng> {
    /// Start a new game whose spawns are driven by a seeded `StdRng`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Start a new game (two tiles spawned) using the given random source.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            score: 0,
            last_animations: AnimationTrace::new(),
            rng,
        };
        state.initialize();
        state
    }

    /// Resume from an existing board and score without spawning anything.
    pub fn from_board(board: Board, score: u32, rng: R) -> Self {
        Self {
            board,
            score,
            last_animations: AnimationTrace::new(),
            rng,
        }
    }

    /// Clear the board, reset the score, and spawn the opening tiles.
    pub fn initialize(&mut self) {
        self.board.clear();
        self.score = 0;
        self.last_animations.clear();
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        debug!(board = ?self.board.rows(), "game initialized");
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns None and leaves the board alone when it is full.
    pub fn spawn_random_tile(&mut self) -> Option<Spawned> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.pick(empty.len())];
        let value = if self.rng.spawn_four() { 4 } else { 2 };
        self.board.set(row, col, value);

        debug!(row, col, value, "tile spawned");
        Some(Spawned { row, col, value })
    }

    /// Slide every line toward `direction`, merging equal neighbours.
    ///
    /// Returns whether any cell changed. When nothing changes the board and
    /// score are left exactly as they were and the trace is empty.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let slide = self.board.slide(direction);
        self.last_animations = slide.animations;

        if !slide.changed {
            debug!(direction = direction.as_str(), "move had no effect");
            return false;
        }

        self.board = slide.board;
        self.score = self.score.saturating_add(slide.score_gained);
        debug!(
            direction = direction.as_str(),
            gained = slide.score_gained,
            score = self.score,
            "move applied"
        );
        true
    }

    pub fn can_move(&self) -> bool {
        self.board.can_move()
    }

    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }

    pub fn is_game_over(&self) -> bool {
        !self.can_move()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Tile movements produced by the most recent `apply_move`.
    pub fn last_animations(&self) -> &[TileAnimation] {
        &self.last_animations
    }

    /// Copy out everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Refresh an existing snapshot in place.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.board = self.board.rows();
        snap.score = self.score;
        snap.max_tile = self.board.max_tile();
        snap.won = self.has_won();
        snap.game_over = self.is_game_over();
        snap.animations.clone_from(&self.last_animations);
    }
}
