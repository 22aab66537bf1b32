//! Privileged raw-input capture boundary.
//!
//! On rooted devices a watcher thread reads input device files directly,
//! bypassing the windowing layer, and can grab the devices exclusively so
//! the host UI never sees the events. That watcher is an external
//! collaborator; this module defines only the boundary it plugs into, plus a
//! mock used by tests.
//!
//! Raw events arrive as the same normalized [`MotionEvent`]/[`KeyEvent`]
//! types the windowed path produces and enter the dispatcher through the
//! identical entry points. The session layer pumps the receiver returned by
//! [`RawInputWatcher::start`] into the shared dispatcher, which serializes
//! the two paths.

use std::sync::mpsc;

use thiserror::Error;

use streampad_core::{KeyEvent, MotionEvent};

pub mod mock;

/// An event produced by the raw-input watcher.
#[derive(Debug, Clone)]
pub enum CapturedEvent {
    Motion(MotionEvent),
    Key(KeyEvent),
}

/// Error type for raw-input watcher operations.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to open input device: {0}")]
    DeviceOpen(String),
    #[error("raw input watcher has already been stopped")]
    AlreadyStopped,
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Trait abstracting the privileged input watcher.
///
/// Production implementations own device files and a watcher thread; tests
/// use [`mock::MockRawWatcher`].
pub trait RawInputWatcher: Send + Sync {
    /// Starts the watcher and returns the receiver for captured events.
    fn start(&self) -> Result<mpsc::Receiver<CapturedEvent>, WatchError>;

    /// Releases exclusive capture of the devices while keeping them open.
    /// Called by the deferred toggle action when grab turns off.
    fn ungrab_all(&self);

    /// Re-acquires exclusive capture. Called when grab turns back on.
    fn regrab_all(&self);

    /// Stops the watcher and releases all devices. The event channel closes.
    fn shutdown(&self);
}
