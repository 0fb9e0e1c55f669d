pub mod step_grid;
