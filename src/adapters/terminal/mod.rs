pub mod crossterm_terminal;
pub mod signals;
