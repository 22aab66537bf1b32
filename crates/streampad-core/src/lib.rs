//! # streampad-core
//!
//! Input translation core for StreamPad: converts heterogeneous host input
//! (multi-touch contacts, absolute mouse samples, physical key transitions,
//! and game-controller state) into a normalized, ordered stream of
//! remote-input commands.
//!
//! This crate is pure translation logic. It has zero dependencies on OS
//! APIs, UI frameworks, async runtimes, or network sockets; the session
//! plumbing around it lives in `streampad-client`.
//!
//! # Architecture overview
//!
//! The hard part of remote input is not sending a packet; it is
//! reconstructing *intent* from noisy, multiplexed event streams:
//!
//! - **`touch`** – Which physical finger maps to which protocol slot, across
//!   lifts, handovers, and a three-finger gesture that must not be misread
//!   as clicks or drags.
//! - **`mouse`** – Absolute device-space cursor samples turned into relative
//!   deltas scaled to a differently-sized remote display.
//! - **`keyboard`** – A reserved grab-toggle chord (Ctrl+Shift+Z) picked out
//!   of ordinary typing that uses the very same key codes.
//! - **`dispatch`** – The demultiplexer that classifies raw events by source
//!   class, routes them to the pieces above, and reports "unhandled" back to
//!   the host when an event is none of its business.
//!
//! Supporting modules: **`events`** (the normalized host-side event model),
//! **`commands`** (remote-side command values and the sink trait), and
//! **`keymap`** (host key code → VK code translation tables).

pub mod commands;
pub mod dispatch;
pub mod events;
pub mod keyboard;
pub mod keymap;
pub mod mouse;
pub mod touch;

// Re-export the most-used types at the crate root so callers can write
// `streampad_core::InputDispatcher` instead of the full module path.
pub use commands::{Modifiers, MouseButton, RemoteCommand, RemoteInputSink};
pub use dispatch::{
    ControllerCollaborator, GestureSink, GrabToggleScheduler, InputDispatcher, GRAB_TOGGLE_DELAY,
    THREE_FINGER_TAP_WINDOW,
};
pub use events::{
    ButtonState, ContactTrace, KeyEvent, MotionAction, MotionEvent, MotionSource, PointerSample,
};
pub use keyboard::{ChordState, ComboDetector, KeyVerdict, GRAB_COMBO_KEY};
pub use keymap::{AndroidKeyTranslator, KeyTranslator};
pub use mouse::{MouseDeltaTracker, ScaleError, StreamScale};
pub use touch::TouchSlotTable;
