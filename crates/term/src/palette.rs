//! Tile colours.
//!
//! The classic 2048 palette: warm beige for small tiles, orange through red up
//! to 64, then golds up to 2048. Anything larger shares one dark style.

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

/// Frame colour around and between tiles.
pub const BOARD_BG: Rgb = Rgb::new(187, 173, 160);

/// Background of an empty cell.
pub const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background colour of a tile.
pub fn tile_bg(value: Tile) -> Rgb {
    match value {
        0 => EMPTY_BG,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    }
}

/// Full style for a tile: dark text on 2 and 4, light text elsewhere.
pub fn tile_style(value: Tile) -> CellStyle {
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, tile_bg(value)).bold()
}
