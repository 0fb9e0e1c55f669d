pub mod braille;
pub mod presenter;
pub mod status_line;
