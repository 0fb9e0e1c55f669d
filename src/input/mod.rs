pub mod cli;
pub mod range;
