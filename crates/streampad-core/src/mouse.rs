//! Absolute-to-relative mouse translation.
//!
//! The host reports absolute cursor positions in device pixel space, but the
//! remote endpoint consumes relative deltas in *stream* space: the remote
//! display is usually a different size than the local surface, so a raw
//! pixel delta would move the remote cursor too far or too little. The
//! tracker keeps the last absolute sample, differences each new sample
//! against it, and scales each axis by the stream/device ratio.

use thiserror::Error;

use crate::commands::MouseButton;
use crate::events::ButtonState;

/// Error type for scaling-factor construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    /// A device or stream dimension was zero.
    #[error("device and stream dimensions must be nonzero")]
    ZeroDimension,
}

/// Per-axis coordinate scaling between the local surface and the remote
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamScale {
    device_w: u32,
    device_h: u32,
    stream_w: u32,
    stream_h: u32,
}

impl StreamScale {
    /// Creates a scaling factor from the local surface size and the remote
    /// stream resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::ZeroDimension`] if any dimension is zero.
    pub fn new(device_w: u32, device_h: u32, stream_w: u32, stream_h: u32) -> Result<Self, ScaleError> {
        if device_w == 0 || device_h == 0 || stream_w == 0 || stream_h == 0 {
            return Err(ScaleError::ZeroDimension);
        }
        Ok(Self { device_w, device_h, stream_w, stream_h })
    }

    /// Scales a horizontal delta into stream space.
    pub fn scale_x(&self, dx: i32) -> i16 {
        scale_axis(dx, self.stream_w, self.device_w)
    }

    /// Scales a vertical delta into stream space.
    pub fn scale_y(&self, dy: i32) -> i16 {
        scale_axis(dy, self.stream_h, self.device_h)
    }
}

/// Rounds half away from zero and clamps to the signed 16-bit range.
fn scale_axis(delta: i32, stream: u32, device: u32) -> i16 {
    let scaled = f64::from(delta) * f64::from(stream) / f64::from(device);
    scaled.round().clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// Converts absolute cursor samples into scaled relative motion.
#[derive(Debug)]
pub struct MouseDeltaTracker {
    scale: StreamScale,
    /// Last absolute sample; `None` until the first sample after a reset,
    /// which only establishes the baseline.
    last: Option<(i32, i32)>,
}

impl MouseDeltaTracker {
    pub fn new(scale: StreamScale) -> Self {
        Self { scale, last: None }
    }

    /// Feeds one absolute sample and returns the scaled delta to emit, if
    /// any.
    ///
    /// The first sample after construction or [`reset`](Self::reset) returns
    /// `None`; so does a sample equal to the previous one (no zero-motion
    /// packets). The stored position is updated in every case.
    pub fn sample(&mut self, x: i32, y: i32) -> Option<(i16, i16)> {
        let Some((last_x, last_y)) = self.last.replace((x, y)) else {
            return None;
        };
        let dx = x - last_x;
        let dy = y - last_y;
        if dx == 0 && dy == 0 {
            return None;
        }
        Some((self.scale.scale_x(dx), self.scale.scale_y(dy)))
    }

    /// Forgets the stored position. Called at session (re)start.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Diffs two held-button masks into press/release transitions.
///
/// Only the primary, secondary, and tertiary bits are examined; any other
/// changed bits are ignored.
pub fn button_transitions(previous: ButtonState, current: ButtonState) -> Vec<(MouseButton, bool)> {
    const MAPPING: [(u32, MouseButton); 3] = [
        (ButtonState::PRIMARY, MouseButton::Left),
        (ButtonState::SECONDARY, MouseButton::Right),
        (ButtonState::TERTIARY, MouseButton::Middle),
    ];

    let changed = previous.0 ^ current.0;
    MAPPING
        .iter()
        .filter(|(mask, _)| changed & mask != 0)
        .map(|&(mask, button)| (button, current.0 & mask != 0))
        .collect()
}

/// Truncates a continuous scroll axis value to whole wheel clicks.
pub fn scroll_clicks(axis: f32) -> i8 {
    // `as` saturates at the i8 range and truncates toward zero.
    axis as i8
}
