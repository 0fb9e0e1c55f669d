pub mod ports;
#[allow(clippy::module_inception)]
pub mod step_grid;
