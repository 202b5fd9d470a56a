//! Board module - the 4x4 grid and the slide/merge transform
//!
//! The board stores tile values in a flat, row-major array (`row * 4 + col`).
//! A value of 0 is an empty cell; every other value is a power of two.
//!
//! All four directions share one line routine. For each direction a line is
//! read through a traversal table that lists its board coordinates from the
//! wall tiles move toward to the far end, so Right and Down are Left and Up
//! read backwards. Results and animation records are written back through the
//! same table, which keeps coordinate mapping exact in every direction.

use arrayvec::ArrayVec;

use crate::types::{Direction, Tile, TileAnimation, BOARD_SIZE, CELL_COUNT, WIN_TILE};

/// Per-move animation records. One entry per surviving source tile, so at most 16.
pub type AnimationTrace = ArrayVec<TileAnimation, CELL_COUNT>;

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of tile values, row-major order (row * BOARD_SIZE + col)
    cells: [Tile; CELL_COUNT],
}

/// Outcome of sliding a board in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub board: Board,
    /// Sum of every merged tile produced by the slide
    pub score_gained: u32,
    /// Empty when `changed` is false
    pub animations: AnimationTrace,
    pub changed: bool,
}

/// One tile's travel within a single line, in line-local indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineMove {
    from: usize,
    to: usize,
    value: Tile,
    merged: bool,
}

#[derive(Debug, Default)]
struct LineSlide {
    values: [Tile; BOARD_SIZE],
    moves: ArrayVec<LineMove, BOARD_SIZE>,
    score: u32,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from rows, top row first.
    pub fn from_rows(rows: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[Self::offset(row, col)] = value;
            }
        }
        board
    }

    /// Copy the board out as rows, top row first.
    pub fn rows(&self) -> [[Tile; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.cells[Self::offset(row, col)];
            }
        }
        rows
    }

    #[inline(always)]
    fn offset(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    /// Calculate flat index from (row, col), None if out of bounds
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self::offset(row, col))
    }

    /// Get tile at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Empty cells as (row, col), in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 0)
            .map(|(idx, _)| (idx / BOARD_SIZE, idx % BOARD_SIZE))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any cell holds exactly the winning tile.
    pub fn has_won(&self) -> bool {
        self.cells.contains(&WIN_TILE)
    }

    /// True if some move would change the board: an empty cell exists, or two
    /// horizontally or vertically adjacent cells hold the same mergeable value.
    pub fn can_move(&self) -> bool {
        if !self.is_full() {
            return true;
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[Self::offset(row, col)];
                if col + 1 < BOARD_SIZE && merges(value, self.cells[Self::offset(row, col + 1)]) {
                    return true;
                }
                if row + 1 < BOARD_SIZE && merges(value, self.cells[Self::offset(row + 1, col)]) {
                    return true;
                }
            }
        }

        false
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// Pure: the receiver is untouched. The returned trace holds one record per
    /// surviving source tile, ordered line by line and, within a line, from the
    /// destination wall outward.
    pub fn slide(&self, direction: Direction) -> Slide {
        let mut board = Board::new();
        let mut animations = AnimationTrace::new();
        let mut score_gained = 0u32;
        let mut changed = false;

        for line in 0..BOARD_SIZE {
            let positions = traversal(direction, line);
            let before = positions.map(|(row, col)| self.cells[Self::offset(row, col)]);
            let after = slide_line(before);

            changed |= after.values != before;
            score_gained = score_gained.saturating_add(after.score);

            for (&(row, col), &value) in positions.iter().zip(after.values.iter()) {
                board.cells[Self::offset(row, col)] = value;
            }

            for mv in &after.moves {
                let (from_row, from_col) = positions[mv.from];
                let (to_row, to_col) = positions[mv.to];
                animations.push(TileAnimation {
                    from_row: from_row as u8,
                    from_col: from_col as u8,
                    to_row: to_row as u8,
                    to_col: to_col as u8,
                    value: mv.value,
                    merged: mv.merged,
                });
            }
        }

        if !changed {
            animations.clear();
        }

        Slide {
            board,
            score_gained,
            animations,
            changed,
        }
    }
}

/// Two tiles merge when they are equal and their sum still fits in a `Tile`.
#[inline(always)]
fn merges(a: Tile, b: Tile) -> bool {
    a == b && a.checked_mul(2).is_some()
}

/// Board coordinates of one line, ordered from the destination wall outward.
fn traversal(direction: Direction, line: usize) -> [(usize, usize); BOARD_SIZE] {
    let mut positions = [(0, 0); BOARD_SIZE];
    for (step, pos) in positions.iter_mut().enumerate() {
        let along = if direction.is_reversed() {
            BOARD_SIZE - 1 - step
        } else {
            step
        };
        *pos = if direction.is_horizontal() {
            (line, along)
        } else {
            (along, line)
        };
    }
    positions
}

/// Compact then merge a single line toward index 0.
///
/// The merge scan never chains: [2, 2, 2] becomes [4, 2], not [4, 4] or [8].
/// A pair whose sum does not fit in a `Tile` stays unmerged.
fn slide_line(line: [Tile; BOARD_SIZE]) -> LineSlide {
    let tiles: ArrayVec<(usize, Tile), BOARD_SIZE> = line
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, value)| value != 0)
        .collect();

    let mut out = LineSlide::default();
    let mut write = 0;
    let mut i = 0;

    while i < tiles.len() {
        let (from, value) = tiles[i];
        match tiles.get(i + 1) {
            Some(&(next_from, next_value)) if merges(value, next_value) => {
                let merged = value << 1;
                out.values[write] = merged;
                out.score = out.score.saturating_add(merged);
                out.moves.push(LineMove {
                    from,
                    to: write,
                    value: merged,
                    merged: false,
                });
                out.moves.push(LineMove {
                    from: next_from,
                    to: write,
                    value: merged,
                    merged: true,
                });
                i += 2;
            }
            _ => {
                out.values[write] = value;
                out.moves.push(LineMove {
                    from,
                    to: write,
                    value,
                    merged: false,
                });
                i += 1;
            }
        }
        write += 1;
    }

    out
}
