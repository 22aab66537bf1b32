//! Mock raw-input watcher for tests.
//!
//! Lets tests inject synthetic [`CapturedEvent`]s and observe grab/ungrab
//! calls without device files or elevated permissions.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    mpsc::{self, Sender},
    Mutex,
};

use super::{CapturedEvent, RawInputWatcher, WatchError};

/// A mock implementation of [`RawInputWatcher`] driven by the test.
#[derive(Default)]
pub struct MockRawWatcher {
    sender: Mutex<Option<Sender<CapturedEvent>>>,
    ungrab_calls: AtomicU32,
    regrab_calls: AtomicU32,
}

impl MockRawWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects a synthetic event, as if captured from a device file.
    ///
    /// Panics if `start()` has not been called or `shutdown()` already has.
    pub fn inject_event(&self, event: CapturedEvent) {
        let guard = self.sender.lock().expect("lock poisoned");
        let sender = guard
            .as_ref()
            .expect("MockRawWatcher::inject_event called before start()");
        sender
            .send(event)
            .expect("receiver dropped; the session pump is gone");
    }

    /// Number of times [`RawInputWatcher::ungrab_all`] was called.
    pub fn ungrab_count(&self) -> u32 {
        self.ungrab_calls.load(Ordering::Relaxed)
    }

    /// Number of times [`RawInputWatcher::regrab_all`] was called.
    pub fn regrab_count(&self) -> u32 {
        self.regrab_calls.load(Ordering::Relaxed)
    }
}

impl RawInputWatcher for MockRawWatcher {
    fn start(&self) -> Result<mpsc::Receiver<CapturedEvent>, WatchError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn ungrab_all(&self) {
        self.ungrab_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn regrab_all(&self) {
        self.regrab_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn shutdown(&self) {
        // Dropping the sender closes the channel and ends the pump.
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streampad_core::KeyEvent;

    #[test]
    fn test_mock_watcher_delivers_injected_events() {
        // Arrange
        let watcher = MockRawWatcher::new();
        let rx = watcher.start().expect("start should succeed");

        // Act
        watcher.inject_event(CapturedEvent::Key(KeyEvent::down(29)));

        // Assert
        let event = rx.recv().expect("should receive event");
        assert!(matches!(event, CapturedEvent::Key(KeyEvent { code: 29, down: true, .. })));
    }

    #[test]
    fn test_shutdown_closes_the_channel() {
        // Arrange
        let watcher = MockRawWatcher::new();
        let rx = watcher.start().expect("start should succeed");

        // Act
        watcher.shutdown();

        // Assert
        assert!(rx.recv().is_err(), "channel must close after shutdown()");
    }

    #[test]
    fn test_grab_calls_are_counted() {
        let watcher = MockRawWatcher::new();

        watcher.ungrab_all();
        watcher.regrab_all();
        watcher.ungrab_all();

        assert_eq!(watcher.ungrab_count(), 2);
        assert_eq!(watcher.regrab_count(), 1);
    }
}
