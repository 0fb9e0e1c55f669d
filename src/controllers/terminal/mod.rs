//! Terminal controller: owns the render state and runs the fixed-period
//! step/repaint loop.
//!
//! Ports & adapters, as elsewhere in the crate:
//! - **Input**: [`PendingRequests`] raised from signal handlers
//! - **Output**: [`FramePresenterPort`] for frames, [`TerminalPort`] for size and echo
//! - **Core**: [`RenderState`] wrapping the grid, viewport and iterator step

mod controller;
pub mod pending_requests;
pub mod ports;
pub mod render_state;
pub mod ticker;

pub use controller::{
    ControllerConfig, DEFAULT_SHUTDOWN_MESSAGE, TerminalController, TickOutcome,
};
pub use pending_requests::PendingRequests;
pub use ports::frame_presenter::FramePresenterPort;
pub use ports::terminal::TerminalPort;
pub use render_state::RenderState;
