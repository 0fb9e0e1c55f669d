use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

use crate::controllers::terminal::ports::frame_presenter::FramePresenterPort;
use crate::core::data::grid::Grid;
use crate::core::data::viewport::Viewport;
use crate::presenters::terminal::braille::{glyph, pack_block, read_block};
use crate::presenters::terminal::status_line::status_line;

/// Full-repaint braille renderer over any writer.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Braille rows of `grid`, each terminated by a newline.
#[must_use]
pub fn compose_frame(grid: &Grid) -> String {
    let dims = grid.dimensions();
    let mut frame = String::with_capacity(dims.terminal_rows() * (dims.terminal_cols() * 3 + 1));

    for terminal_row in 0..dims.terminal_rows() {
        for terminal_col in 0..dims.terminal_cols() {
            frame.push(glyph(pack_block(&read_block(grid, terminal_row, terminal_col))));
        }
        frame.push('\n');
    }

    frame
}

impl<W: Write> FramePresenterPort for TerminalPresenter<W> {
    fn present(&mut self, grid: &Grid, viewport: &Viewport) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            Print(compose_frame(grid)),
            Print(status_line(viewport)),
            MoveTo(0, 0)
        )?;
        self.out.flush()
    }

    fn farewell(&mut self, message: &str) -> io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(message),
            Print('\n')
        )?;
        self.out.flush()
    }
}
