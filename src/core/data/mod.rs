pub mod cell;
pub mod complex;
pub mod grid;
pub mod grid_dimensions;
pub mod viewport;
