mod adapters;
mod controllers;
mod core;
mod input;
pub mod logging;
mod presenters;

pub use crate::adapters::terminal::crossterm_terminal::CrosstermTerminal;
pub use crate::adapters::terminal::signals::SignalRequests;
pub use crate::controllers::terminal::pending_requests::Drained;
pub use crate::controllers::terminal::ticker::{DEFAULT_TICK_PERIOD, Ticker};
pub use crate::controllers::terminal::{
    ControllerConfig, FramePresenterPort, PendingRequests, RenderState, TerminalController,
    TerminalPort, TickOutcome,
};
pub use crate::core::actions::step_grid::ports::cell_algorithm::CellAlgorithm;
pub use crate::core::actions::step_grid::step_grid::step_grid;
pub use crate::core::data::cell::{Cell, Escape};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::grid_dimensions::{GridDimensions, TerminalSize};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::escape_time::{MandelbrotStep, MandelbrotStepError};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, default_region};
pub use crate::input::cli::args::{Cli, Invocation, parse_args};
pub use crate::input::cli::commands::run_terminal::RunTerminalCommand;
pub use crate::input::cli::errors::{CliError, TERMINAL_FAILURE_EXIT_CODE};
pub use crate::input::range::errors::{RangeError, RangeFileError};
pub use crate::input::range::file::read_range_file;
pub use crate::input::range::parse::parse_range;
pub use crate::presenters::terminal::braille::{DotBlock, glyph, pack_block, read_block};
pub use crate::presenters::terminal::presenter::{TerminalPresenter, compose_frame};
pub use crate::presenters::terminal::status_line::status_line;
