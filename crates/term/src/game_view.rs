//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header row (title + score), the bordered board,
//! and a key hint row. Each tile is a `TILE_W` x `TILE_H` block with a one
//! cell gap on every side.

use crate::core::GameSnapshot;
use crate::fb::{format_u32, CellStyle, FrameBuffer, Rgb};
use crate::palette::{tile_style, BOARD_BG, EMPTY_BG};
use crate::tween::lerp_cell;
use crate::types::{Tile, BOARD_SIZE};

/// Tile width in terminal columns.
pub const TILE_W: u16 = 7;
/// Tile height in terminal rows.
pub const TILE_H: u16 = 3;
const GAP: u16 = 1;

const BOARD_N: u16 = BOARD_SIZE as u16;
/// Board interior, excluding the border.
const INNER_W: u16 = BOARD_N * TILE_W + (BOARD_N + 1) * GAP;
const INNER_H: u16 = BOARD_N * TILE_H + (BOARD_N + 1) * GAP;
/// Board including the border.
pub const FRAME_W: u16 = INNER_W + 2;
pub const FRAME_H: u16 = INNER_H + 2;
/// Header + frame + hint row.
pub const LAYOUT_H: u16 = FRAME_H + 2;

const HINT: &str = "wasd/arrows  r restart  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Message drawn across the middle of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// 2048 reached; play continues on the next move.
    Won,
    GameOver,
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    /// Render into an existing framebuffer.
    ///
    /// `tween` is the progress of the running slide, or None when settled.
    /// While a slide runs the trace tiles are drawn at interpolated positions
    /// instead of the settled grid.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay,
        tween: Option<f32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let start_x = viewport.width.saturating_sub(FRAME_W) / 2;
        let start_y = viewport.height.saturating_sub(LAYOUT_H) / 2;
        let frame_y = start_y + 1;

        self.draw_header(fb, snap, start_x, start_y);

        let frame = CellStyle::new(Rgb::new(120, 110, 100), BOARD_BG);
        fb.fill_rect(start_x + 1, frame_y + 1, INNER_W, INNER_H, ' ', frame);
        self.draw_border(fb, start_x, frame_y, frame);

        let inner_x = start_x + 1;
        let inner_y = frame_y + 1;
        let well = CellStyle::new(EMPTY_BG, EMPTY_BG);
        for row in 0..BOARD_N {
            for col in 0..BOARD_N {
                let (x, y) = tile_origin(inner_x, inner_y, row as f32, col as f32);
                fb.fill_rect(x, y, TILE_W, TILE_H, ' ', well);
            }
        }

        match tween {
            Some(t) if !snap.animations.is_empty() => {
                // Incoming merge tiles are drawn last so they sit on top.
                for pass in [false, true] {
                    for anim in snap.animations.iter().filter(|anim| anim.merged == pass) {
                        let (row, col) = lerp_cell(anim, t);
                        let (x, y) = tile_origin(inner_x, inner_y, row, col);
                        self.draw_tile(fb, x, y, anim.value);
                    }
                }
            }
            _ => {
                for (row, values) in snap.board.iter().enumerate() {
                    for (col, &value) in values.iter().enumerate() {
                        if value == 0 {
                            continue;
                        }
                        let (x, y) = tile_origin(inner_x, inner_y, row as f32, col as f32);
                        self.draw_tile(fb, x, y, value);
                    }
                }
            }
        }

        match overlay {
            Overlay::None => {}
            Overlay::Won => self.draw_banner(fb, start_x, frame_y, "YOU WIN!", "keep sliding"),
            Overlay::GameOver => {
                self.draw_banner(fb, start_x, frame_y, "GAME OVER", "r to restart")
            }
        }

        let hint = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
        fb.put_str(start_x, frame_y + FRAME_H, HINT, hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay,
        tween: Option<f32>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, tween, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let title = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, y, "2048", title);

        // Right-align "SCORE <n>" against the frame edge.
        let mut digits = [0u8; 10];
        let len = format_u32(snap.score, &mut digits) as u16;
        let score_x = (x + FRAME_W).saturating_sub(len);
        fb.put_u32(score_x, y, snap.score, value);
        fb.put_str(score_x.saturating_sub(6), y, "SCORE", label);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let right = x + FRAME_W - 1;
        let bottom = y + FRAME_H - 1;

        fb.put_char(x, y, '╭', style);
        fb.put_char(right, y, '╮', style);
        fb.put_char(x, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: Tile) {
        let style = tile_style(value);
        fb.fill_rect(x, y, TILE_W, TILE_H, ' ', style);

        let mut digits = [0u8; 10];
        let len = format_u32(value, &mut digits) as u16;
        let text_x = x + TILE_W.saturating_sub(len) / 2;
        fb.put_u32(text_x, y + TILE_H / 2, value, style);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, start_x: u16, frame_y: u16, title: &str, sub: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 58, 50)).bold();
        let band_y = frame_y + FRAME_H / 2 - 1;
        fb.fill_rect(start_x + 1, band_y, INNER_W, 3, ' ', style);
        fb.put_str(centered(start_x, title), band_y, title, style);
        fb.put_str(
            centered(start_x, sub),
            band_y + 2,
            sub,
            CellStyle { bold: false, ..style },
        );
    }
}

/// Top-left terminal cell of a tile at fractional board position (row, col).
fn tile_origin(inner_x: u16, inner_y: u16, row: f32, col: f32) -> (u16, u16) {
    let x = GAP as f32 + col * (TILE_W + GAP) as f32;
    let y = GAP as f32 + row * (TILE_H + GAP) as f32;
    (inner_x + x.round() as u16, inner_y + y.round() as u16)
}

fn centered(start_x: u16, text: &str) -> u16 {
    let w = text.chars().count() as u16;
    start_x + FRAME_W.saturating_sub(w) / 2
}
