use rayon::prelude::*;

use crate::core::actions::step_grid::ports::cell_algorithm::CellAlgorithm;
use crate::core::data::grid::Grid;
use crate::core::data::viewport::Viewport;

/// Advances every cell of `grid` by one step, rows split across rayon's pool.
///
/// `c` is recomputed from each cell's position rather than stored, and no
/// cell reads another, so rows need no synchronisation.
pub fn step_grid<Alg: CellAlgorithm>(grid: &mut Grid, viewport: &Viewport, algorithm: &Alg) {
    let dimensions = grid.dimensions();

    if dimensions.is_empty() {
        return;
    }

    grid.cells_mut()
        .par_chunks_exact_mut(dimensions.cols())
        .enumerate()
        .for_each(|(row, cells)| {
            for (col, cell) in cells.iter_mut().enumerate() {
                if cell.is_bounded() {
                    algorithm.advance(cell, viewport.point_at(row, col, dimensions));
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::cell::{Cell, Escape};
    use crate::core::data::complex::Complex;
    use crate::core::data::grid_dimensions::{GridDimensions, TerminalSize};
    use crate::core::fractals::mandelbrot::escape_time::MandelbrotStep;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn filled_grid(terminal_rows: u16, terminal_cols: u16, viewport: &Viewport) -> Grid {
        let dims = GridDimensions::from_terminal(TerminalSize::new(terminal_rows, terminal_cols));
        let mut grid = Grid::new(dims);
        grid.fill(viewport);
        grid
    }

    fn step_sequential<Alg: CellAlgorithm>(grid: &mut Grid, viewport: &Viewport, algorithm: &Alg) {
        let dimensions = grid.dimensions();
        for (index, cell) in grid.cells_mut().iter_mut().enumerate() {
            let (row, col) = (index / dimensions.cols(), index % dimensions.cols());
            algorithm.advance(cell, viewport.point_at(row, col, dimensions));
        }
    }

    struct RecordingAlgorithm;

    #[derive(Default)]
    struct CountingAlgorithm {
        calls: AtomicUsize,
    }

    impl CellAlgorithm for CountingAlgorithm {
        fn advance(&self, _cell: &mut Cell, _c: Complex) {
            self.calls.fetch_add(1, Ordering::Relaxed);
        }
    }

    impl CellAlgorithm for RecordingAlgorithm {
        fn advance(&self, cell: &mut Cell, c: Complex) {
            cell.record(c, Escape::Escaped);
        }
    }

    #[test]
    fn test_parallel_step_matches_sequential() {
        let viewport = Viewport::from_range(-2.5, 1.0, -1.25, 1.25).unwrap();
        let algorithm = MandelbrotStep::default();
        let mut parallel = filled_grid(12, 40, &viewport);
        let mut sequential = filled_grid(12, 40, &viewport);

        for _ in 0..25 {
            step_grid(&mut parallel, &viewport, &algorithm);
            step_sequential(&mut sequential, &viewport, &algorithm);
        }

        assert_eq!(parallel.cells(), sequential.cells());
    }

    #[test]
    fn test_each_cell_receives_its_own_position() {
        let viewport = Viewport::from_range(-1.0, 1.0, -1.0, 1.0).unwrap();
        let mut grid = filled_grid(3, 4, &viewport);

        step_grid(&mut grid, &viewport, &RecordingAlgorithm);

        let dims = grid.dimensions();
        for row in 0..dims.rows() {
            for col in 0..dims.cols() {
                assert_eq!(
                    grid.cell(row, col).unwrap().z(),
                    viewport.point_at(row, col, dims)
                );
            }
        }
    }

    #[test]
    fn test_escaped_cells_stay_frozen_across_steps() {
        let viewport = Viewport::from_range(-2.5, 1.0, -1.25, 1.25).unwrap();
        let algorithm = MandelbrotStep::default();
        let mut grid = filled_grid(4, 10, &viewport);

        for _ in 0..5 {
            step_grid(&mut grid, &viewport, &algorithm);
        }
        let snapshot: Vec<Cell> = grid.cells().to_vec();

        for _ in 0..20 {
            step_grid(&mut grid, &viewport, &algorithm);
        }

        for (before, after) in snapshot.iter().zip(grid.cells()) {
            if before.escape() == Escape::Escaped {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_far_away_viewport_escapes_everywhere_after_one_step() {
        let viewport = Viewport::from_range(3.0, 4.0, 3.0, 4.0).unwrap();
        let mut grid = filled_grid(2, 2, &viewport);

        step_grid(&mut grid, &viewport, &MandelbrotStep::default());

        assert!(grid.cells().iter().all(|cell| !cell.is_bounded()));
    }

    #[test]
    fn test_escaped_cells_are_not_handed_to_the_algorithm() {
        let viewport = Viewport::from_range(3.0, 4.0, 3.0, 4.0).unwrap();
        let mut grid = filled_grid(2, 3, &viewport);
        step_grid(&mut grid, &viewport, &MandelbrotStep::default());

        let counting = CountingAlgorithm::default();
        step_grid(&mut grid, &viewport, &counting);

        assert_eq!(counting.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_bounded_cells_are_all_handed_to_the_algorithm() {
        let viewport = Viewport::from_range(-1.0, 1.0, -1.0, 1.0).unwrap();
        let mut grid = filled_grid(2, 3, &viewport);

        let counting = CountingAlgorithm::default();
        step_grid(&mut grid, &viewport, &counting);

        assert_eq!(counting.calls.load(Ordering::Relaxed), grid.cells().len());
    }

    #[test]
    fn test_empty_grid_is_a_no_op() {
        let viewport = Viewport::from_range(-1.0, 1.0, -1.0, 1.0).unwrap();
        let mut grid = filled_grid(0, 5, &viewport);

        step_grid(&mut grid, &viewport, &MandelbrotStep::default());

        assert!(grid.cells().is_empty());
    }
}
