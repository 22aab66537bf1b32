//! Deferred grab-toggle scheduling.
//!
//! Completing the grab chord must not flip the grab flag in the middle of
//! key dispatch: the flip releases or re-acquires exclusive device capture,
//! and doing that re-entrantly from the event path is how the original
//! design got its 250 ms deferral. [`GrabToggleTimer`] runs the toggle as a
//! delayed Tokio task: sleep, then ungrab/regrab the raw watcher, then
//! invert the dispatcher's flag.
//!
//! Two chord completions inside the delay window schedule two independent
//! tasks, and both fire. The timer keeps an abort handle for every pending
//! task so session teardown can cancel them all; a late toggle firing into
//! a fresh session would silently flip its grab state.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::trace;

use streampad_core::{GrabToggleScheduler, InputDispatcher};

use crate::infrastructure::raw_input::RawInputWatcher;

/// Tokio-backed implementation of [`GrabToggleScheduler`].
pub struct GrabToggleTimer {
    runtime: Handle,
    /// Weak to break the cycle: the dispatcher holds this timer as its
    /// scheduler.
    target: Mutex<Weak<Mutex<InputDispatcher>>>,
    watcher: Mutex<Option<Arc<dyn RawInputWatcher>>>,
    pending: Mutex<Vec<AbortHandle>>,
}

impl GrabToggleTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            target: Mutex::new(Weak::new()),
            watcher: Mutex::new(None),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Points the timer at the dispatcher it toggles and the watcher whose
    /// capture follows the flag. Called once during session wiring, after
    /// the dispatcher exists.
    pub fn bind(
        &self,
        target: Weak<Mutex<InputDispatcher>>,
        watcher: Option<Arc<dyn RawInputWatcher>>,
    ) {
        *self.target.lock().expect("timer lock poisoned") = target;
        *self.watcher.lock().expect("timer lock poisoned") = watcher;
    }

    /// Aborts every pending toggle task. Called at session teardown.
    pub fn cancel_pending(&self) {
        let mut pending = self.pending.lock().expect("timer lock poisoned");
        for handle in pending.drain(..) {
            handle.abort();
        }
    }

    /// Number of toggle tasks scheduled but not yet fired.
    pub fn pending_count(&self) -> usize {
        let mut pending = self.pending.lock().expect("timer lock poisoned");
        pending.retain(|h| !h.is_finished());
        pending.len()
    }
}

impl GrabToggleScheduler for GrabToggleTimer {
    fn schedule_toggle(&self, delay: Duration) {
        let target = self.target.lock().expect("timer lock poisoned").clone();
        let watcher = self.watcher.lock().expect("timer lock poisoned").clone();

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(dispatcher) = target.upgrade() else {
                trace!("toggle fired after the session was dropped");
                return;
            };
            let mut dispatcher = dispatcher.lock().expect("dispatcher lock poisoned");

            // Release or re-acquire exclusive device capture before the flag
            // flips, mirroring the state the flag is leaving.
            if let Some(watcher) = &watcher {
                if dispatcher.grabbed() {
                    watcher.ungrab_all();
                } else {
                    watcher.regrab_all();
                }
            }
            dispatcher.apply_grab_toggle();
        });

        let mut pending = self.pending.lock().expect("timer lock poisoned");
        pending.retain(|h| !h.is_finished());
        pending.push(task.abort_handle());
    }
}
