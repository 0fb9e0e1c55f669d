/// Dots packed into one terminal character cell, horizontally and vertically.
pub const DOTS_PER_CELL_WIDE: usize = 2;
pub const DOTS_PER_CELL_TALL: usize = 4;

/// Usable character cells of the terminal, status line already excluded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalSize {
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Dot-resolution size of a grid. Only constructible from a terminal size,
/// so `rows` is always a multiple of 4 and `cols` a multiple of 2.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

impl GridDimensions {
    #[must_use]
    pub fn from_terminal(size: TerminalSize) -> Self {
        Self {
            rows: usize::from(size.rows) * DOTS_PER_CELL_TALL,
            cols: usize::from(size.cols) * DOTS_PER_CELL_WIDE,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn terminal_rows(&self) -> usize {
        self.rows / DOTS_PER_CELL_TALL
    }

    #[must_use]
    pub fn terminal_cols(&self) -> usize {
        self.cols / DOTS_PER_CELL_WIDE
    }
}
