use log::{debug, info};
use std::io;
use std::time::Duration;

use crate::controllers::terminal::pending_requests::PendingRequests;
use crate::controllers::terminal::ports::frame_presenter::FramePresenterPort;
use crate::controllers::terminal::ports::terminal::TerminalPort;
use crate::controllers::terminal::render_state::RenderState;
use crate::controllers::terminal::ticker::{DEFAULT_TICK_PERIOD, Ticker};
use crate::core::actions::step_grid::ports::cell_algorithm::CellAlgorithm;
use crate::core::data::viewport::Viewport;

pub const DEFAULT_SHUTDOWN_MESSAGE: &str = "Mandelbrot set visualisation finished.";

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub tick_period: Duration,
    pub shutdown_message: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            shutdown_message: DEFAULT_SHUTDOWN_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Shutdown,
}

/// Drives the render loop: one iterator step (unless paused) and one full
/// repaint per tick, reacting to requests raised since the previous tick.
pub struct TerminalController<T, P, A>
where
    T: TerminalPort,
    P: FramePresenterPort,
    A: CellAlgorithm,
{
    terminal: T,
    presenter: P,
    algorithm: A,
    requests: PendingRequests,
    state: RenderState,
    paused: bool,
    config: ControllerConfig,
}

impl<T, P, A> TerminalController<T, P, A>
where
    T: TerminalPort,
    P: FramePresenterPort,
    A: CellAlgorithm,
{
    pub fn new(
        terminal: T,
        presenter: P,
        algorithm: A,
        requests: PendingRequests,
        requested: Viewport,
        config: ControllerConfig,
    ) -> io::Result<Self> {
        let size = terminal.size()?;
        let state = RenderState::new(requested, size);

        Ok(Self {
            terminal,
            presenter,
            algorithm,
            requests,
            state,
            paused: false,
            config,
        })
    }

    /// Disables echo and paints the freshly filled grid.
    pub fn start(&mut self) -> io::Result<()> {
        self.terminal.set_echo_enabled(false)?;
        info!(
            "rendering {}x{} dots",
            self.state.grid().dimensions().cols(),
            self.state.grid().dimensions().rows()
        );
        self.presenter.present(self.state.grid(), self.state.viewport())
    }

    pub fn tick(&mut self) -> io::Result<TickOutcome> {
        let drained = self.requests.drain();

        if drained.interrupt {
            self.shutdown()?;
            return Ok(TickOutcome::Shutdown);
        }

        if drained.resize {
            let size = self.terminal.size()?;
            self.state.resize(size);
            info!(
                "terminal resized to {}x{} cells, grid restarted",
                size.cols, size.rows
            );
        }

        if drained.pause_toggle {
            self.paused = !self.paused;
            info!("iteration {}", if self.paused { "paused" } else { "resumed" });
        }

        if !self.paused {
            self.state.step(&self.algorithm);
        }

        self.presenter.present(self.state.grid(), self.state.viewport())?;

        Ok(TickOutcome::Continue)
    }

    /// Clears the screen, leaves the shutdown message and restores echo.
    pub fn shutdown(&mut self) -> io::Result<()> {
        debug!("interrupt received, shutting down");
        self.presenter.farewell(&self.config.shutdown_message)?;
        self.terminal.set_echo_enabled(true)
    }

    /// Runs until an interrupt is requested. Echo is restored on error too.
    pub fn run(mut self) -> io::Result<()> {
        let result = self.run_loop();

        if result.is_err() {
            let _ = self.terminal.set_echo_enabled(true);
        }

        result
    }

    fn run_loop(&mut self) -> io::Result<()> {
        self.start()?;
        let mut ticker = Ticker::new(self.config.tick_period);

        loop {
            ticker.wait();
            if self.tick()? == TickOutcome::Shutdown {
                info!("shutdown complete");
                return Ok(());
            }
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
