//! Interfaces between the terminal controller and the outside world.

pub mod frame_presenter;
pub mod terminal;
