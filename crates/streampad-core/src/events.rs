//! Normalized host-side input events.
//!
//! The host UI layer (window system callbacks or the privileged raw-input
//! watcher) converts its platform event objects into these types before
//! handing them to the [`InputDispatcher`](crate::dispatch::InputDispatcher).
//! Coordinates are in device pixel space; nothing here knows about the
//! remote stream's coordinate system.
//!
//! # Historical sub-samples
//!
//! Input stacks batch high-frequency samples: a single motion event may carry
//! several intermediate positions recorded since the previous event, plus the
//! authoritative current position. [`ContactTrace`] models this as an ordered
//! history followed by the current sample. Consumers replay the history in
//! chronological order through the same path as the current sample, which
//! preserves sub-frame motion fidelity for both touch and mouse input.

/// Source class of a motion event, as reported by the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionSource {
    Touchscreen,
    Stylus,
    Mouse,
    Joystick,
    /// A source class the dispatcher does not recognize; always reported
    /// unhandled so the host can apply its default behavior.
    Unknown(u32),
}

/// Pointer phase of a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionAction {
    /// A contact or button went down.
    Down,
    /// A contact or button was lifted.
    Up,
    /// One or more contacts moved.
    Move,
    /// The scroll wheel moved (mouse sources only).
    Scroll,
}

/// A single positional sample in device pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
}

impl PointerSample {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The sample trail of one contact within a motion event: historical
/// sub-samples in chronological order (oldest first), then the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactTrace {
    /// Intermediate samples recorded since the previous event.
    pub history: Vec<PointerSample>,
    /// The authoritative current sample.
    pub current: PointerSample,
}

impl ContactTrace {
    /// A trace with no history, positioned at (x, y).
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            history: Vec::new(),
            current: PointerSample::new(x, y),
        }
    }

    /// A trace carrying historical sub-samples before the current position.
    pub fn with_history(history: Vec<PointerSample>, x: i32, y: i32) -> Self {
        Self {
            history,
            current: PointerSample::new(x, y),
        }
    }
}

/// Bitmask of mouse buttons currently held, using the host's button bits.
///
/// Only the primary/secondary/tertiary bits are meaningful to the dispatcher;
/// unknown bits are carried but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState(pub u32);

impl ButtonState {
    pub const NONE: ButtonState = ButtonState(0);
    pub const PRIMARY: u32 = 1 << 0;
    pub const SECONDARY: u32 = 1 << 1;
    pub const TERTIARY: u32 = 1 << 2;

    /// Returns `true` if every bit in `mask` is held.
    pub fn holds(&self, mask: u32) -> bool {
        self.0 & mask == mask
    }
}

/// A normalized motion event from any pointer-class or joystick-class source.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEvent {
    pub source: MotionSource,
    pub action: MotionAction,
    /// Contact index that triggered a [`MotionAction::Down`] or
    /// [`MotionAction::Up`]. Always 0 for moves and scrolls.
    pub action_index: usize,
    /// Per-contact sample traces, ordered by contact index. The length is the
    /// number of contacts currently on the surface.
    pub contacts: Vec<ContactTrace>,
    /// Mouse buttons held at the time of the event.
    pub buttons: ButtonState,
    /// Raw vertical scroll axis value for [`MotionAction::Scroll`].
    pub vscroll: f32,
}

impl MotionEvent {
    /// A touchscreen contact going down. `contacts` lists the current
    /// position of every contact on the surface, by contact index.
    pub fn touch_down(action_index: usize, contacts: &[(i32, i32)]) -> Self {
        Self {
            source: MotionSource::Touchscreen,
            action: MotionAction::Down,
            action_index,
            contacts: contacts.iter().map(|&(x, y)| ContactTrace::at(x, y)).collect(),
            buttons: ButtonState::NONE,
            vscroll: 0.0,
        }
    }

    /// A touchscreen contact lifting. `contacts` still includes the lifting
    /// contact, so its length is the count *before* the lift.
    pub fn touch_up(action_index: usize, contacts: &[(i32, i32)]) -> Self {
        Self {
            action: MotionAction::Up,
            ..Self::touch_down(action_index, contacts)
        }
    }

    /// Touchscreen contacts moving, with optional history per contact.
    pub fn touch_move(contacts: Vec<ContactTrace>) -> Self {
        Self {
            source: MotionSource::Touchscreen,
            action: MotionAction::Move,
            action_index: 0,
            contacts,
            buttons: ButtonState::NONE,
            vscroll: 0.0,
        }
    }

    /// An absolute mouse position sample with no history.
    pub fn mouse_move(x: i32, y: i32) -> Self {
        Self::mouse_move_with_history(Vec::new(), x, y)
    }

    /// An absolute mouse position sample preceded by batched sub-samples.
    pub fn mouse_move_with_history(history: Vec<PointerSample>, x: i32, y: i32) -> Self {
        Self {
            source: MotionSource::Mouse,
            action: MotionAction::Move,
            action_index: 0,
            contacts: vec![ContactTrace::with_history(history, x, y)],
            buttons: ButtonState::NONE,
            vscroll: 0.0,
        }
    }

    /// A mouse event reporting a new held-button mask at (x, y).
    pub fn mouse_buttons(x: i32, y: i32, buttons: ButtonState) -> Self {
        Self {
            buttons,
            ..Self::mouse_move(x, y)
        }
    }

    /// A mouse scroll event at (x, y) with the raw vertical axis value.
    pub fn mouse_scroll(x: i32, y: i32, vscroll: f32) -> Self {
        Self {
            action: MotionAction::Scroll,
            vscroll,
            ..Self::mouse_move(x, y)
        }
    }

    /// Number of contacts currently on the surface.
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

/// A physical key transition from the host keyboard path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Native host key code, before translation.
    pub code: u16,
    /// `true` for key-down, `false` for key-up.
    pub down: bool,
    /// Auto-repeat count; 0 for the initial press.
    pub repeat: u32,
}

impl KeyEvent {
    pub fn down(code: u16) -> Self {
        Self { code, down: true, repeat: 0 }
    }

    pub fn up(code: u16) -> Self {
        Self { code, down: false, repeat: 0 }
    }

    /// An auto-repeated key-down.
    pub fn repeat(code: u16, repeat: u32) -> Self {
        Self { code, down: true, repeat }
    }
}
