//! Remote-side logical input commands and the sink that receives them.
//!
//! The core translates host events into the command values below and hands
//! them to a [`RemoteInputSink`]. Wire encoding, encryption, and transport
//! are the sink implementation's business; this crate only constructs the
//! logical values.

use serde::{Deserialize, Serialize};

/// Logical mouse button identifier on the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseButton {
    Left = 0x01,
    Middle = 0x02,
    Right = 0x03,
}

/// Modifier key bitmask carried with every key command.
///
/// Bit layout:
/// - Bit 0: Shift
/// - Bit 1: Ctrl
/// - Bit 2: Alt
///
/// Left/right modifier variants are folded together at translation time, so
/// a single bit covers both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const SHIFT: u8 = 1 << 0;
    pub const CTRL: u8 = 1 << 1;
    pub const ALT: u8 = 1 << 2;

    /// Returns `true` if Shift is active.
    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns `true` if Ctrl is active.
    pub fn ctrl(&self) -> bool {
        self.0 & Self::CTRL != 0
    }

    /// Returns `true` if Alt is active.
    pub fn alt(&self) -> bool {
        self.0 & Self::ALT != 0
    }

    /// Sets or clears the bits in `mask` according to `down`.
    pub fn apply(&mut self, mask: u8, down: bool) {
        if down {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}

/// A single remote input command, discriminated by kind.
///
/// This is the value a transport implementation serializes onto the wire;
/// the enum exists so sinks that queue commands (rather than encode them
/// immediately) have a concrete type to carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RemoteCommand {
    MouseMove { dx: i16, dy: i16 },
    MouseButton { button: MouseButton, pressed: bool },
    MouseScroll { clicks: i8 },
    Key { code: u16, pressed: bool, modifiers: Modifiers },
    TouchDown { slot: u8, x: i32, y: i32 },
    TouchMove { slot: u8, x: i32, y: i32 },
    TouchUp { slot: u8, x: i32, y: i32 },
}

/// Destination for translated input commands.
///
/// All methods are fire-and-forget: implementations must not block the
/// dispatch path. Backpressure, batching, and delivery guarantees are the
/// implementation's concern.
pub trait RemoteInputSink: Send + Sync {
    /// Scaled relative cursor motion in stream coordinates.
    fn send_mouse_move(&self, dx: i16, dy: i16);

    /// Mouse button press or release.
    fn send_mouse_button(&self, button: MouseButton, pressed: bool);

    /// Vertical scroll, in whole wheel clicks.
    fn send_mouse_scroll(&self, clicks: i8);

    /// Key press or release. `code` is masked to its low byte.
    fn send_key(&self, code: u16, pressed: bool, modifiers: Modifiers);

    /// Touch contact down at (x, y) in device pixel space.
    fn send_touch_down(&self, slot: u8, x: i32, y: i32);

    /// Touch contact motion.
    fn send_touch_move(&self, slot: u8, x: i32, y: i32);

    /// Touch contact lifted.
    fn send_touch_up(&self, slot: u8, x: i32, y: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_apply_sets_and_clears_bits() {
        // Arrange
        let mut mods = Modifiers::default();

        // Act / Assert
        mods.apply(Modifiers::CTRL, true);
        mods.apply(Modifiers::SHIFT, true);
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());

        mods.apply(Modifiers::CTRL, false);
        assert!(!mods.ctrl());
        assert!(mods.shift(), "clearing ctrl must not disturb shift");
    }

    #[test]
    fn test_modifiers_apply_zero_mask_is_a_no_op() {
        let mut mods = Modifiers(Modifiers::ALT);
        mods.apply(0, true);
        mods.apply(0, false);
        assert_eq!(mods, Modifiers(Modifiers::ALT));
    }
}
