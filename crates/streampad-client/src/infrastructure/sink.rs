//! Channel-backed remote input sink.
//!
//! The core emits logical [`RemoteCommand`] values; how they get encoded and
//! shipped is the transport's business. [`ChannelSink`] decouples the two
//! with an unbounded channel: dispatch stays non-blocking, and the transport
//! task drains commands at its own pace.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

use streampad_core::{Modifiers, MouseButton, RemoteCommand, RemoteInputSink};

/// Forwards every command into an in-process channel.
pub struct ChannelSink {
    tx: UnboundedSender<RemoteCommand>,
}

impl ChannelSink {
    /// Creates the sink and the receiver the transport drains.
    pub fn new() -> (Arc<Self>, UnboundedReceiver<RemoteCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }

    fn forward(&self, command: RemoteCommand) {
        // A dropped receiver means the transport is gone; input translated
        // during teardown is discarded.
        if self.tx.send(command).is_err() {
            trace!("remote command dropped: transport receiver is gone");
        }
    }
}

impl RemoteInputSink for ChannelSink {
    fn send_mouse_move(&self, dx: i16, dy: i16) {
        self.forward(RemoteCommand::MouseMove { dx, dy });
    }

    fn send_mouse_button(&self, button: MouseButton, pressed: bool) {
        self.forward(RemoteCommand::MouseButton { button, pressed });
    }

    fn send_mouse_scroll(&self, clicks: i8) {
        self.forward(RemoteCommand::MouseScroll { clicks });
    }

    fn send_key(&self, code: u16, pressed: bool, modifiers: Modifiers) {
        self.forward(RemoteCommand::Key { code, pressed, modifiers });
    }

    fn send_touch_down(&self, slot: u8, x: i32, y: i32) {
        self.forward(RemoteCommand::TouchDown { slot, x, y });
    }

    fn send_touch_move(&self, slot: u8, x: i32, y: i32) {
        self.forward(RemoteCommand::TouchMove { slot, x, y });
    }

    fn send_touch_up(&self, slot: u8, x: i32, y: i32) {
        self.forward(RemoteCommand::TouchUp { slot, x, y });
    }
}
