use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::escape_time::{
    DEFAULT_ESCAPE_RADIUS_SQUARED, MandelbrotStep, MandelbrotStepError,
};

const DEFAULT_X1: f64 = -2.5;
const DEFAULT_X2: f64 = 1.0;
const DEFAULT_CENTER_IMAG: f64 = 0.0;

/// The whole set, real axis `-2.5..1`, vertical extent derived from the grid shape.
pub fn default_region() -> Result<Viewport, ViewportError> {
    Viewport::from_range(DEFAULT_X1, DEFAULT_X2, DEFAULT_CENTER_IMAG, DEFAULT_CENTER_IMAG)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: Viewport,
    pub escape_radius_squared: f64,
}

impl MandelbrotConfig {
    pub fn new(region: Viewport) -> Self {
        Self {
            region,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
        }
    }

    pub fn build_step(&self) -> Result<MandelbrotStep, MandelbrotStepError> {
        MandelbrotStep::new(self.escape_radius_squared)
    }
}
