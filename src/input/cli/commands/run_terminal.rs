use log::info;
use std::io::{self, BufWriter};

use crate::adapters::terminal::crossterm_terminal::CrosstermTerminal;
use crate::adapters::terminal::signals::SignalRequests;
use crate::controllers::terminal::{ControllerConfig, PendingRequests, TerminalController};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::terminal::presenter::TerminalPresenter;

/// Wires the real terminal, signal handlers and braille presenter to a
/// controller and runs it until interrupted.
pub struct RunTerminalCommand {
    fractal: MandelbrotConfig,
    config: ControllerConfig,
}

impl RunTerminalCommand {
    pub fn new(region: Viewport) -> Self {
        Self {
            fractal: MandelbrotConfig::new(region),
            config: ControllerConfig::default(),
        }
    }

    pub fn execute(&self) -> io::Result<()> {
        let algorithm = self
            .fractal
            .build_step()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        let requests = PendingRequests::new();
        let _signals = SignalRequests::register(&requests)?;
        let terminal = CrosstermTerminal::new();
        let presenter = TerminalPresenter::new(BufWriter::new(io::stdout()));

        info!(
            "starting render loop, region {:?}, tick {:?}",
            self.fractal.region, self.config.tick_period
        );

        let controller = TerminalController::new(
            terminal,
            presenter,
            algorithm,
            requests,
            self.fractal.region,
            self.config.clone(),
        )?;

        controller.run()
    }
}
