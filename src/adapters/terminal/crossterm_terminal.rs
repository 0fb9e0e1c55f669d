use libc::STDIN_FILENO;
use log::warn;
use std::io;
use termios::{ECHO, TCSANOW, Termios, tcsetattr};

use crate::controllers::terminal::ports::terminal::TerminalPort;
use crate::core::data::grid_dimensions::TerminalSize;

/// Rows kept free at the bottom for the status line.
pub const STATUS_LINES: u16 = 1;

/// The controlling terminal: size from crossterm, echo through stdin's termios.
///
/// The termios state found at construction is put back on drop, so echo is
/// restored on every exit path that unwinds.
pub struct CrosstermTerminal {
    saved: Option<Termios>,
}

impl CrosstermTerminal {
    #[must_use]
    pub fn new() -> Self {
        let saved = match Termios::from_fd(STDIN_FILENO) {
            Ok(termios) => Some(termios),
            Err(err) => {
                warn!("stdin is not a terminal, echo control disabled: {}", err);
                None
            }
        };

        Self { saved }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a raw `(cols, rows)` terminal size into the drawable area.
#[must_use]
pub fn drawable_size(cols: u16, rows: u16) -> TerminalSize {
    TerminalSize::new(rows.saturating_sub(STATUS_LINES), cols)
}

impl TerminalPort for CrosstermTerminal {
    fn size(&self) -> io::Result<TerminalSize> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(drawable_size(cols, rows))
    }

    fn set_echo_enabled(&mut self, enabled: bool) -> io::Result<()> {
        let Some(mut termios) = self.saved.clone() else {
            return Ok(());
        };

        if enabled {
            termios.c_lflag |= ECHO;
        } else {
            termios.c_lflag &= !ECHO;
        }

        tcsetattr(STDIN_FILENO, TCSANOW, &termios)
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Some(saved) = &self.saved {
            if let Err(err) = tcsetattr(STDIN_FILENO, TCSANOW, saved) {
                warn!("failed to restore terminal state: {}", err);
            }
        }
    }
}
