//! Board tests - slide/merge rules and terminal-state queries

use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{Board, GameState, ScriptedRng};
use tui_2048::types::{Direction, TileAnimation, BOARD_SIZE};

fn row_board(row: [u32; 4]) -> Board {
    Board::from_rows([row, [0; 4], [0; 4], [0; 4]])
}

fn col_board(col: [u32; 4]) -> Board {
    let mut rows = [[0; 4]; 4];
    for (r, &value) in col.iter().enumerate() {
        rows[r][0] = value;
    }
    Board::from_rows(rows)
}

fn column(board: &Board, col: usize) -> [u32; 4] {
    let rows = board.rows();
    [rows[0][col], rows[1][col], rows[2][col], rows[3][col]]
}

/// Full board with no equal neighbours.
fn stuck_board() -> Board {
    Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
}

#[test]
fn test_four_equal_make_two_pairs() {
    let slide = row_board([2, 2, 2, 2]).slide(Direction::Left);
    assert_eq!(slide.board.rows()[0], [4, 4, 0, 0]);
    assert_eq!(slide.score_gained, 8);

    let slide = row_board([2, 2, 2, 2]).slide(Direction::Right);
    assert_eq!(slide.board.rows()[0], [0, 0, 4, 4]);
    assert_eq!(slide.score_gained, 8);

    let slide = col_board([2, 2, 2, 2]).slide(Direction::Up);
    assert_eq!(column(&slide.board, 0), [4, 4, 0, 0]);

    let slide = col_board([2, 2, 2, 2]).slide(Direction::Down);
    assert_eq!(column(&slide.board, 0), [0, 0, 4, 4]);
    assert_eq!(slide.score_gained, 8);
}

#[test]
fn test_three_equal_do_not_chain() {
    let slide = row_board([2, 2, 2, 0]).slide(Direction::Left);
    assert_eq!(slide.board.rows()[0], [4, 2, 0, 0]);
    assert_eq!(slide.score_gained, 4);

    // Toward the right wall the two nearest the wall merge.
    let slide = row_board([2, 2, 2, 0]).slide(Direction::Right);
    assert_eq!(slide.board.rows()[0], [0, 0, 2, 4]);
    assert_eq!(slide.score_gained, 4);
}

#[test]
fn test_gap_does_not_block_merge() {
    for (dir, expected) in [
        (Direction::Left, [8, 0, 0, 0]),
        (Direction::Right, [0, 0, 0, 8]),
    ] {
        let slide = row_board([4, 0, 0, 4]).slide(dir);
        assert_eq!(slide.board.rows()[0], expected, "{:?}", dir);
        assert_eq!(slide.score_gained, 8);
    }

    let slide = col_board([4, 0, 0, 4]).slide(Direction::Up);
    assert_eq!(column(&slide.board, 0), [8, 0, 0, 0]);
}

#[test]
fn test_right_slide_maps_coordinates_exactly() {
    let board = Board::from_rows([
        [0, 0, 0, 0],
        [2, 0, 2, 4],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let slide = board.slide(Direction::Right);

    assert_eq!(slide.board.rows()[1], [0, 0, 4, 4]);
    assert_eq!(slide.score_gained, 4);
    assert_eq!(
        slide.animations.as_slice(),
        &[
            TileAnimation { from_row: 1, from_col: 3, to_row: 1, to_col: 3, value: 4, merged: false },
            TileAnimation { from_row: 1, from_col: 2, to_row: 1, to_col: 2, value: 4, merged: false },
            TileAnimation { from_row: 1, from_col: 0, to_row: 1, to_col: 2, value: 4, merged: true },
        ]
    );
}

#[test]
fn test_down_slide_maps_coordinates_exactly() {
    let board = Board::from_rows([
        [0, 2, 0, 0],
        [0, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let slide = board.slide(Direction::Down);

    assert_eq!(column(&slide.board, 1), [0, 0, 0, 4]);
    assert_eq!(
        slide.animations.as_slice(),
        &[
            TileAnimation { from_row: 1, from_col: 1, to_row: 3, to_col: 1, value: 4, merged: false },
            TileAnimation { from_row: 0, from_col: 1, to_row: 3, to_col: 1, value: 4, merged: true },
        ]
    );
}

#[test]
fn test_up_slide_keeps_order_of_distinct_tiles() {
    let board = col_board([0, 8, 0, 2]);
    let slide = board.slide(Direction::Up);
    assert_eq!(column(&slide.board, 0), [8, 2, 0, 0]);
    assert_eq!(slide.score_gained, 0);
    assert_eq!(slide.animations.len(), 2);
    assert_eq!((slide.animations[1].from_row, slide.animations[1].to_row), (3, 1));
}

#[test]
fn test_no_change_leaves_everything_untouched() {
    let board = stuck_board();
    let mut state = GameState::from_board(board, 36, ScriptedRng::new());

    for dir in Direction::ALL {
        assert!(!state.apply_move(dir));
        assert_eq!(state.board(), &board);
        assert_eq!(state.score(), 36);
        assert!(state.last_animations().is_empty());
    }
}

#[test]
fn test_stale_trace_cleared_by_noop_move() {
    let mut state = GameState::from_board(row_board([2, 0, 0, 0]), 0, ScriptedRng::new());
    assert!(state.apply_move(Direction::Right));
    assert_eq!(state.last_animations().len(), 1);

    assert!(!state.apply_move(Direction::Right));
    assert!(state.last_animations().is_empty());
}

#[test]
fn test_spawn_fills_the_only_empty_cell() {
    let mut rows = stuck_board().rows();
    rows[2][1] = 0;
    let board = Board::from_rows(rows);

    for seed in 0..200 {
        let mut state = GameState::from_board(board, 0, StdRng::seed_from_u64(seed));
        let spawned = state.spawn_random_tile().expect("one empty cell");
        assert_eq!((spawned.row, spawned.col), (2, 1));
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(state.board().get(2, 1), Some(spawned.value));
        assert!(state.board().is_full());
    }
}

#[test]
fn test_spawn_on_full_board_is_noop() {
    let mut state = GameState::from_board(stuck_board(), 0, ScriptedRng::new());
    assert_eq!(state.spawn_random_tile(), None);
    assert_eq!(state.board(), &stuck_board());
}

#[test]
fn test_game_over_detection() {
    let state = GameState::from_board(stuck_board(), 0, ScriptedRng::new());
    assert!(!state.can_move());
    assert!(state.is_game_over());

    // One equal neighbour pair is enough.
    let mut rows = stuck_board().rows();
    rows[3][3] = 4;
    let state = GameState::from_board(Board::from_rows(rows), 0, ScriptedRng::new());
    assert!(state.can_move());
    assert!(!state.is_game_over());

    // One empty cell is enough.
    let mut rows = stuck_board().rows();
    rows[0][0] = 0;
    assert!(Board::from_rows(rows).can_move());
}

#[test]
fn test_horizontal_pair_counts_as_movable() {
    let mut rows = stuck_board().rows();
    rows[0][1] = 2;
    rows[1][1] = 8;
    let board = Board::from_rows(rows);
    assert!(board.can_move());
    assert!(board.slide(Direction::Left).changed);
}

#[test]
fn test_left_then_right_is_noop_on_stuck_board() {
    let board = stuck_board();
    let left = board.slide(Direction::Left);
    assert!(!left.changed);
    let right = left.board.slide(Direction::Right);
    assert!(!right.changed);
    assert_eq!(right.board, board);

    let down = board.slide(Direction::Up).board.slide(Direction::Down);
    assert_eq!(down.board, board);
}

#[test]
fn test_has_won_independent_of_game_over() {
    let mut rows = stuck_board().rows();
    rows[1][2] = 2048;
    let state = GameState::from_board(Board::from_rows(rows), 0, ScriptedRng::new());
    assert!(state.has_won());
    assert!(state.is_game_over());

    let mut state = GameState::from_board(row_board([1024, 1024, 0, 0]), 0, ScriptedRng::new());
    assert!(!state.has_won());
    assert!(state.apply_move(Direction::Left));
    assert!(state.has_won());
    assert!(!state.is_game_over());
    assert_eq!(state.score(), 2048);
}

#[test]
fn test_score_never_decreases_during_play() {
    let mut state = GameState::new(2024);
    let mut last = state.score();
    for step in 0..500 {
        let dir = Direction::ALL[step % BOARD_SIZE];
        if state.apply_move(dir) {
            state.spawn_random_tile();
        }
        assert!(state.score() >= last);
        last = state.score();
        if state.is_game_over() {
            break;
        }
    }
}

#[test]
fn test_largest_tiles_stay_unmerged() {
    let top = 1u32 << 31;
    let board = Board::from_rows([[top, top, 0, 0], [0, top, 0, top], [0; 4], [0; 4]]);

    let slide = board.slide(Direction::Left);
    assert_eq!(slide.board.rows()[0], [top, top, 0, 0]);
    assert_eq!(slide.board.rows()[1], [top, top, 0, 0]);
    assert_eq!(slide.score_gained, 0);
    assert!(slide.animations.iter().all(|anim| !anim.merged));

    // A full board whose only equal pair cannot merge has no moves.
    let mut rows = stuck_board().rows();
    rows[0][0] = top;
    rows[0][1] = top;
    let board = Board::from_rows(rows);
    assert!(!board.can_move());
    assert!(Direction::ALL.iter().all(|&dir| !board.slide(dir).changed));
}

#[test]
fn test_score_saturates_instead_of_overflowing() {
    let half = 1u32 << 30;
    let board = Board::from_rows([[half; 4], [half; 4], [0; 4], [0; 4]]);
    let mut state = GameState::from_board(board, u32::MAX - 1, ScriptedRng::new());

    assert!(state.apply_move(Direction::Left));
    assert_eq!(state.board().rows()[0], [half << 1, half << 1, 0, 0]);
    assert_eq!(state.score(), u32::MAX);
}
