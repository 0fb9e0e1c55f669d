use crate::core::data::grid::Grid;
use crate::core::data::viewport::Viewport;
use std::io;

pub trait FramePresenterPort {
    /// Repaints the whole frame plus the status line for `viewport`.
    fn present(&mut self, grid: &Grid, viewport: &Viewport) -> io::Result<()>;

    /// Clears the screen and leaves `message` on it.
    fn farewell(&mut self, message: &str) -> io::Result<()>;
}
