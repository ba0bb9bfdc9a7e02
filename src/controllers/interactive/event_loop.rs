use std::ops::ControlFlow;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::controllers::interactive::controller::InteractiveController;
use crate::controllers::interactive::events::control::ControlEvent;

/// How long to block for input when no timer is armed.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Drives `controller` from `events` on the calling thread.
///
/// Due timers fire before each wait, and the wait never outlasts the next
/// deadline. Returns on `Quit`, once `exit_when` holds, or when every sender
/// is gone and no timer remains armed.
pub fn run_event_loop(
    controller: &mut InteractiveController,
    events: &Receiver<ControlEvent>,
    mut exit_when: impl FnMut(&InteractiveController) -> bool,
) {
    let mut disconnected = false;

    loop {
        controller.poll(Instant::now());

        if exit_when(controller) {
            debug!("event loop exit condition met");
            return;
        }

        let deadline = controller.next_deadline();
        let timeout = deadline.map_or(IDLE_WAIT, |at| at.saturating_duration_since(Instant::now()));

        if disconnected {
            if deadline.is_none() {
                info!("event loop finished");
                return;
            }
            thread::sleep(timeout);
            continue;
        }

        match events.recv_timeout(timeout) {
            Ok(event) => match controller.handle(event, Instant::now()) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => {
                    info!("quit requested");
                    return;
                }
                Err(err) => warn!(%err, "control event ignored"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                debug!("control channel closed");
                disconnected = true;
            }
        }
    }
}
