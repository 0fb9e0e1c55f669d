use crate::core::data::complex::Complex;
use crate::core::data::grid_dimensions::GridDimensions;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFinite,
    InvalidBounds { x1: f64, x2: f64, y1: f64, y2: f64 },
    InvalidWidth { width: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "viewport bounds must be finite numbers"),
            Self::InvalidBounds { x1, x2, y1, y2 } => {
                write!(
                    f,
                    "viewport bounds must satisfy x1 < x2 and y1 <= y2: x:{}..{} y:{}..{}",
                    x1, x2, y1, y2
                )
            }
            Self::InvalidWidth { width } => {
                write!(f, "viewport width must be positive: {}", width)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the grid.
///
/// `y1 == y2` marks a degenerate vertical extent; it is replaced by one that
/// keeps dots square once the grid shape is known (see [`Viewport::resolve_aspect`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Viewport {
    pub fn from_range(x1: f64, x2: f64, y1: f64, y2: f64) -> Result<Self, ViewportError> {
        if ![x1, x2, y1, y2].iter().all(|bound| bound.is_finite()) {
            return Err(ViewportError::NonFinite);
        }

        if x1 >= x2 || y1 > y2 {
            return Err(ViewportError::InvalidBounds { x1, x2, y1, y2 });
        }

        Ok(Self { x1, x2, y1, y2 })
    }

    /// Centre `cx + cy·i` with total real-axis width `width`; the vertical
    /// extent is left degenerate at `cy`.
    pub fn from_center_width(cx: f64, cy: f64, width: f64) -> Result<Self, ViewportError> {
        if !(cx.is_finite() && cy.is_finite() && width.is_finite()) {
            return Err(ViewportError::NonFinite);
        }

        if width <= 0.0 {
            return Err(ViewportError::InvalidWidth { width });
        }

        Self::from_range(cx - width * 0.5, cx + width * 0.5, cy, cy)
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    #[must_use]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    #[must_use]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    #[must_use]
    pub fn has_degenerate_height(&self) -> bool {
        self.y1 == self.y2
    }

    /// Expands a degenerate vertical extent to `h = (cols / rows) · width`
    /// around `y1`. Returns `self` unchanged when the extent is already set
    /// or the grid is empty.
    #[must_use]
    pub fn resolve_aspect(&self, dims: GridDimensions) -> Self {
        if !self.has_degenerate_height() || dims.is_empty() {
            return *self;
        }

        let half_height = 0.5 * (dims.cols() as f64 / dims.rows() as f64) * self.width();

        Self {
            y1: self.y1 - half_height,
            y2: self.y1 + half_height,
            ..*self
        }
    }

    /// Complex value at the centre of dot `(row, col)`. Row 0 is the top of
    /// the screen and carries the greatest imaginary part.
    #[must_use]
    pub fn point_at(&self, row: usize, col: usize, dims: GridDimensions) -> Complex {
        let dx = (self.x2 - self.x1) / dims.cols() as f64;
        let dy = (self.y1 - self.y2) / dims.rows() as f64;

        Complex {
            real: self.x1 + (col as f64 + 0.5) * dx,
            imag: self.y2 + (row as f64 + 0.5) * dy,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x1 + self.x2) * 0.5,
            imag: (self.y1 + self.y2) * 0.5,
        }
    }

    /// Half-width and half-height of the visible region.
    #[must_use]
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width() * 0.5, self.height() * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_dimensions::TerminalSize;

    fn dims(terminal_rows: u16, terminal_cols: u16) -> GridDimensions {
        GridDimensions::from_terminal(TerminalSize::new(terminal_rows, terminal_cols))
    }

    #[test]
    fn test_from_range_stores_bounds_verbatim() {
        let viewport = Viewport::from_range(-2.5, 1.0, -1.5, 1.5).unwrap();

        assert_eq!(viewport.x1(), -2.5);
        assert_eq!(viewport.x2(), 1.0);
        assert_eq!(viewport.y1(), -1.5);
        assert_eq!(viewport.y2(), 1.5);
    }

    #[test]
    fn test_from_range_rejects_inverted_or_empty_real_axis() {
        assert_eq!(
            Viewport::from_range(1.0, -1.0, 0.0, 1.0),
            Err(ViewportError::InvalidBounds { x1: 1.0, x2: -1.0, y1: 0.0, y2: 1.0 })
        );
        assert!(Viewport::from_range(1.0, 1.0, 0.0, 1.0).is_err());
        assert!(Viewport::from_range(-1.0, 1.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_from_range_rejects_non_finite_bounds() {
        assert_eq!(
            Viewport::from_range(f64::NAN, 1.0, 0.0, 0.0),
            Err(ViewportError::NonFinite)
        );
        assert_eq!(
            Viewport::from_range(-1.0, f64::INFINITY, 0.0, 0.0),
            Err(ViewportError::NonFinite)
        );
    }

    #[test]
    fn test_from_center_width_leaves_height_degenerate() {
        let viewport = Viewport::from_center_width(-0.5, 0.0, 3.0).unwrap();

        assert_eq!(viewport.x1(), -2.0);
        assert_eq!(viewport.x2(), 1.0);
        assert_eq!(viewport.y1(), 0.0);
        assert_eq!(viewport.y2(), 0.0);
        assert!(viewport.has_degenerate_height());
    }

    #[test]
    fn test_from_center_width_rejects_non_positive_width() {
        assert_eq!(
            Viewport::from_center_width(0.0, 0.0, 0.0),
            Err(ViewportError::InvalidWidth { width: 0.0 })
        );
        assert!(Viewport::from_center_width(0.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn test_resolve_aspect_expands_degenerate_height() {
        let viewport = Viewport::from_range(-2.0, 1.0, 0.0, 0.0).unwrap();

        // 1x4 terminal cells -> 4 rows x 8 cols of dots
        let resolved = viewport.resolve_aspect(dims(1, 4));

        assert_eq!(resolved.y1(), -3.0);
        assert_eq!(resolved.y2(), 3.0);
        assert_eq!(resolved.height(), 6.0);
        assert_eq!(resolved.x1(), -2.0);
        assert_eq!(resolved.x2(), 1.0);
    }

    #[test]
    fn test_resolve_aspect_is_idempotent() {
        let viewport = Viewport::from_range(-2.0, 1.0, 0.0, 0.0).unwrap();
        let resolved = viewport.resolve_aspect(dims(1, 4));

        assert_eq!(resolved.resolve_aspect(dims(1, 4)), resolved);
        assert_eq!(resolved.resolve_aspect(dims(30, 100)), resolved);
    }

    #[test]
    fn test_resolve_aspect_keeps_degenerate_height_for_empty_grid() {
        let viewport = Viewport::from_range(-2.0, 1.0, 0.0, 0.0).unwrap();

        assert_eq!(viewport.resolve_aspect(dims(0, 4)), viewport);
    }

    #[test]
    fn test_point_at_maps_dot_centres() {
        let viewport = Viewport::from_range(-1.0, 1.0, -1.0, 1.0).unwrap();
        // 1x1 terminal cell -> 4 rows x 2 cols
        let grid = dims(1, 1);

        let top_left = viewport.point_at(0, 0, grid);
        let bottom_right = viewport.point_at(3, 1, grid);

        assert_eq!(top_left, Complex::new(-0.5, 0.75));
        assert_eq!(bottom_right, Complex::new(0.5, -0.75));
    }

    #[test]
    fn test_point_at_decreases_imaginary_part_down_the_screen() {
        let viewport = Viewport::from_range(-2.0, 2.0, -2.0, 2.0).unwrap();
        let grid = dims(5, 5);

        let column: Vec<f64> = (0..grid.rows())
            .map(|row| viewport.point_at(row, 3, grid).imag)
            .collect();

        assert!(column.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_center_and_half_extents() {
        let viewport = Viewport::from_range(-2.5, 1.0, -1.0, 1.5).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.75, 0.25));
        assert_eq!(viewport.half_extents(), (1.75, 1.25));
    }
}
