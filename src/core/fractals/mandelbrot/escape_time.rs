use crate::core::actions::step_grid::ports::cell_algorithm::CellAlgorithm;
use crate::core::data::cell::{Cell, Escape};
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MandelbrotStepError {
    NonPositiveEscapeRadius { escape_radius_squared: f64 },
}

impl fmt::Display for MandelbrotStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveEscapeRadius { escape_radius_squared } => {
                write!(
                    f,
                    "escape radius must be positive and finite, got r² = {}",
                    escape_radius_squared
                )
            }
        }
    }
}

impl Error for MandelbrotStepError {}

/// One application of `z → z² + c` with a bounded/escaped verdict.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotStep {
    escape_radius_squared: f64,
}

impl MandelbrotStep {
    pub fn new(escape_radius_squared: f64) -> Result<Self, MandelbrotStepError> {
        if !escape_radius_squared.is_finite() || escape_radius_squared <= 0.0 {
            return Err(MandelbrotStepError::NonPositiveEscapeRadius {
                escape_radius_squared,
            });
        }

        Ok(Self {
            escape_radius_squared,
        })
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }
}

impl Default for MandelbrotStep {
    fn default() -> Self {
        Self {
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
        }
    }
}

impl CellAlgorithm for MandelbrotStep {
    fn advance(&self, cell: &mut Cell, c: Complex) {
        if !cell.is_bounded() {
            return;
        }

        let z = cell.z().square() + c;
        let escape = if z.magnitude_squared() <= self.escape_radius_squared {
            Escape::Bounded
        } else {
            Escape::Escaped
        };

        cell.record(z, escape);
    }
}
