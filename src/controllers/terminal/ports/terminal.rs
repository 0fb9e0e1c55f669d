use crate::core::data::grid_dimensions::TerminalSize;
use std::io;

/// The host terminal as seen by the controller. Notifications arrive
/// separately through [`PendingRequests`](crate::controllers::terminal::pending_requests::PendingRequests).
pub trait TerminalPort {
    /// Usable character cells, with the status line already taken off.
    fn size(&self) -> io::Result<TerminalSize>;

    fn set_echo_enabled(&mut self, enabled: bool) -> io::Result<()>;
}
