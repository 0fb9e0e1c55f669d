use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;

/// Advances a single cell given the constant `c` derived from its position.
pub trait CellAlgorithm: Sync {
    fn advance(&self, cell: &mut Cell, c: Complex);
}
