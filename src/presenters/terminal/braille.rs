//! Packing of 2×4 dot blocks into Unicode braille glyphs (U+2800..U+28FF).

use crate::core::data::grid::Grid;
use crate::core::data::grid_dimensions::{DOTS_PER_CELL_TALL, DOTS_PER_CELL_WIDE};

pub const BRAILLE_BASE: u32 = 0x2800;

/// Bit index of each dot, indexed `[row][col]` within the block.
///
/// The first three rows number down the left column then the right one;
/// the bottom row was added later to the standard and takes bits 6 and 7.
pub const DOT_BITS: [[u8; DOTS_PER_CELL_WIDE]; DOTS_PER_CELL_TALL] =
    [[0, 3], [1, 4], [2, 5], [6, 7]];

pub type DotBlock = [[bool; DOTS_PER_CELL_WIDE]; DOTS_PER_CELL_TALL];

#[must_use]
pub fn pack_block(block: &DotBlock) -> u8 {
    let mut bits = 0u8;

    for (row, dots) in block.iter().enumerate() {
        for (col, &set) in dots.iter().enumerate() {
            if set {
                bits |= 1 << DOT_BITS[row][col];
            }
        }
    }

    bits
}

#[must_use]
pub fn glyph(bits: u8) -> char {
    // every value in BRAILLE_BASE..=BRAILLE_BASE + 0xFF is a valid scalar
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ')
}

/// Reads the block under terminal cell `(terminal_row, terminal_col)`; a dot
/// is raised while its grid cell is still bounded.
#[must_use]
pub fn read_block(grid: &Grid, terminal_row: usize, terminal_col: usize) -> DotBlock {
    let top = terminal_row * DOTS_PER_CELL_TALL;
    let left = terminal_col * DOTS_PER_CELL_WIDE;
    let mut block = DotBlock::default();

    for (row, dots) in block.iter_mut().enumerate() {
        for (col, dot) in dots.iter_mut().enumerate() {
            *dot = grid.is_bounded(top + row, left + col);
        }
    }

    block
}
