use crate::core::data::cell::Cell;
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    CellOutsideBounds {
        row: usize,
        col: usize,
        dimensions: GridDimensions,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutsideBounds { row, col, dimensions } => {
                write!(
                    f,
                    "cell at row:{}, col:{} outside of grid bounds rows:{}, cols:{}",
                    row,
                    col,
                    dimensions.rows(),
                    dimensions.cols()
                )
            }
        }
    }
}

impl Error for GridError {}

/// Row-major escape-time cells, one per braille dot.
#[derive(Debug, Default)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(dimensions: GridDimensions) -> Self {
        let mut grid = Self::default();
        grid.allocate(dimensions);
        grid
    }

    /// Discards the current storage and replaces it with default cells.
    pub fn allocate(&mut self, dimensions: GridDimensions) {
        self.dimensions = dimensions;
        self.cells = vec![Cell::default(); dimensions.len()];
    }

    /// Seeds every cell with its own point `c`, marked bounded.
    pub fn fill(&mut self, viewport: &Viewport) {
        let dimensions = self.dimensions;

        for (index, cell) in self.cells.iter_mut().enumerate() {
            let (row, col) = (index / dimensions.cols(), index % dimensions.cols());
            *cell = Cell::seeded(viewport.point_at(row, col, dimensions));
        }
    }

    /// Reallocates for new dimensions and refills; all escape-time progress is lost.
    pub fn resize(&mut self, dimensions: GridDimensions, viewport: &Viewport) {
        self.allocate(dimensions);
        self.fill(viewport);
    }

    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        if row >= self.dimensions.rows() || col >= self.dimensions.cols() {
            return Err(GridError::CellOutsideBounds {
                row,
                col,
                dimensions: self.dimensions,
            });
        }

        Ok(&self.cells[row * self.dimensions.cols() + col])
    }

    /// Whether dot `(row, col)` is still in the set; out-of-bounds dots read as unset.
    #[must_use]
    pub fn is_bounded(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_ok_and(Cell::is_bounded)
    }
}
