use log::debug;
use signal_hook::SigId;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM, SIGTSTP, SIGWINCH};
use signal_hook::flag;
use signal_hook::low_level;
use std::io;

use crate::controllers::terminal::pending_requests::PendingRequests;

/// Signal handlers that feed [`PendingRequests`]; unregistered on drop.
///
/// `SIGWINCH` requests a resize, `SIGTSTP` (Ctrl-Z) toggles pause instead of
/// suspending, and `SIGINT`/`SIGTERM`/`SIGHUP` request shutdown.
pub struct SignalRequests {
    ids: Vec<SigId>,
}

impl SignalRequests {
    pub fn register(requests: &PendingRequests) -> io::Result<Self> {
        let mut ids = Vec::with_capacity(5);

        ids.push(flag::register(SIGWINCH, requests.resize_flag())?);
        ids.push(flag::register(SIGTSTP, requests.pause_toggle_flag())?);
        for signal in [SIGINT, SIGTERM, SIGHUP] {
            ids.push(flag::register(signal, requests.interrupt_flag())?);
        }

        debug!("registered {} signal handlers", ids.len());
        Ok(Self { ids })
    }
}

impl Drop for SignalRequests {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            low_level::unregister(id);
        }
    }
}
