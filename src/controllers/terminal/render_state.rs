use crate::core::actions::step_grid::ports::cell_algorithm::CellAlgorithm;
use crate::core::actions::step_grid::step_grid::step_grid;
use crate::core::data::grid::Grid;
use crate::core::data::grid_dimensions::{GridDimensions, TerminalSize};
use crate::core::data::viewport::Viewport;

/// The single live grid plus the viewport it was filled from.
///
/// `requested` is the range as the user gave it (possibly with a degenerate
/// height); `viewport` is that range resolved for the current grid shape and
/// stays fixed until the next fill.
#[derive(Debug)]
pub struct RenderState {
    requested: Viewport,
    viewport: Viewport,
    grid: Grid,
}

impl RenderState {
    #[must_use]
    pub fn new(requested: Viewport, terminal: TerminalSize) -> Self {
        let mut state = Self {
            requested,
            viewport: requested,
            grid: Grid::default(),
        };
        state.resize(terminal);
        state
    }

    /// Reallocates the grid for `terminal` and restarts from iteration one.
    pub fn resize(&mut self, terminal: TerminalSize) {
        let dimensions = GridDimensions::from_terminal(terminal);

        self.viewport = self.requested.resolve_aspect(dimensions);
        self.grid.resize(dimensions, &self.viewport);
    }

    pub fn step<Alg: CellAlgorithm>(&mut self, algorithm: &Alg) {
        step_grid(&mut self.grid, &self.viewport, algorithm);
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn requested(&self) -> &Viewport {
        &self.requested
    }
}
