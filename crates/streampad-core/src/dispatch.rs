//! Event demultiplexing and routing.
//!
//! The [`InputDispatcher`] is the single owner of all mutable translation
//! state. It classifies each incoming event by source class, routes it to
//! the touch table, the mouse tracker, the chord detector, or the controller
//! collaborator, and reports back whether the event was
//! consumed. An unconsumed event is the host's to handle; "unhandled" is a
//! classification outcome here, never a fault.
//!
//! # Architecture
//!
//! ```text
//! host event
//!  └─ InputDispatcher::handle_motion / handle_key
//!       ├─ joystick  → ControllerCollaborator (verdict is final)
//!       ├─ touch     → three-finger detection + TouchSlotTable
//!       ├─ mouse     → scroll / button transitions / MouseDeltaTracker
//!       └─ keyboard  → KeyTranslator → ComboDetector → RemoteInputSink
//! ```
//!
//! The dispatcher is not thread-safe by itself; the session layer serializes
//! the windowed and raw input paths in front of it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::commands::RemoteInputSink;
use crate::events::{ButtonState, KeyEvent, MotionAction, MotionEvent, MotionSource};
use crate::keyboard::{ComboDetector, KeyVerdict};
use crate::keymap::KeyTranslator;
use crate::mouse::{button_transitions, scroll_clicks, MouseDeltaTracker, StreamScale};
use crate::touch::TouchSlotTable;

/// A final lift within this window of the three-finger-down timestamp is a
/// three-finger tap.
pub const THREE_FINGER_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Delay between chord completion and the grab toggle firing.
pub const GRAB_TOGGLE_DELAY: Duration = Duration::from_millis(250);

/// Game-controller collaborator. Owns all controller device state; the
/// dispatcher only forwards and honors the consumed verdict.
#[cfg_attr(test, mockall::automock)]
pub trait ControllerCollaborator: Send + Sync {
    /// Offers a button-style event; `true` means consumed.
    fn handle_button(&self, event: &KeyEvent) -> bool;

    /// Offers a joystick-class motion event; `true` means consumed.
    fn handle_motion(&self, event: &MotionEvent) -> bool;
}

/// Host-side gesture callbacks triggered by the dispatcher.
#[cfg_attr(test, mockall::automock)]
pub trait GestureSink: Send + Sync {
    /// A three-finger tap was recognized.
    fn request_on_screen_keyboard(&self);
}

/// Schedules the deferred grab toggle.
///
/// The implementation runs [`InputDispatcher::apply_grab_toggle`] (plus any
/// device-capture side effects) after the delay on a single serialized
/// timer. Scheduling twice before the first task fires produces two toggles.
#[cfg_attr(test, mockall::automock)]
pub trait GrabToggleScheduler: Send + Sync {
    fn schedule_toggle(&self, delay: Duration);
}

/// Routes normalized host events to the translation components and the
/// remote sink.
pub struct InputDispatcher {
    touch: TouchSlotTable,
    mouse: MouseDeltaTracker,
    combo: ComboDetector,
    /// Held-button mask as of the previous mouse event.
    last_buttons: ButtonState,
    /// Timestamp of the most recent transition into 3 contacts.
    three_finger_down: Option<Instant>,
    /// When false, pointer and keyboard events pass through to the host
    /// (the chord is still evaluated).
    grabbed: bool,
    sink: Arc<dyn RemoteInputSink>,
    controller: Arc<dyn ControllerCollaborator>,
    translator: Arc<dyn KeyTranslator>,
    gestures: Arc<dyn GestureSink>,
    toggles: Arc<dyn GrabToggleScheduler>,
}

impl InputDispatcher {
    pub fn new(
        scale: StreamScale,
        sink: Arc<dyn RemoteInputSink>,
        controller: Arc<dyn ControllerCollaborator>,
        translator: Arc<dyn KeyTranslator>,
        gestures: Arc<dyn GestureSink>,
        toggles: Arc<dyn GrabToggleScheduler>,
    ) -> Self {
        Self {
            touch: TouchSlotTable::new(),
            mouse: MouseDeltaTracker::new(scale),
            combo: ComboDetector::new(),
            last_buttons: ButtonState::NONE,
            three_finger_down: None,
            grabbed: true,
            sink,
            controller,
            translator,
            gestures,
            toggles,
        }
    }

    /// Whether input is currently grabbed (translated) rather than passed
    /// through to the host.
    pub fn grabbed(&self) -> bool {
        self.grabbed
    }

    /// Inverts the grab flag. Called only from the deferred toggle action,
    /// never synchronously with the chord's key events.
    pub fn apply_grab_toggle(&mut self) {
        self.grabbed = !self.grabbed;
        debug!(grabbed = self.grabbed, "input grab toggled");
    }

    /// Resets per-session state: touch slots, cursor baseline, button mask,
    /// and the three-finger timestamp. Chord and modifier state persist.
    pub fn reset(&mut self) {
        self.touch.reset();
        self.mouse.reset();
        self.last_buttons = ButtonState::NONE;
        self.three_finger_down = None;
    }

    /// Routes a motion event. Returns `true` if the event was consumed.
    pub fn handle_motion(&mut self, event: &MotionEvent) -> bool {
        if !self.grabbed {
            return false;
        }
        match event.source {
            MotionSource::Joystick => self.controller.handle_motion(event),
            MotionSource::Touchscreen | MotionSource::Stylus => self.handle_touch(event),
            MotionSource::Mouse => self.handle_mouse(event),
            MotionSource::Unknown(source) => {
                trace!(source, "unrecognized motion source");
                false
            }
        }
    }

    /// Routes a key transition. Returns `true` if the event was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        // Controller-style button events take priority over the keyboard.
        if self.controller.handle_button(event) {
            return true;
        }

        let translated = self.translator.translate(event.code);
        if translated == 0 {
            return false;
        }

        // The chord is evaluated regardless of grab state.
        match self.combo.process_key(translated, event.down) {
            KeyVerdict::ChordCompleted => {
                debug!("grab chord completed; scheduling deferred toggle");
                self.toggles.schedule_toggle(GRAB_TOGGLE_DELAY);
                return true;
            }
            KeyVerdict::Swallowed => return true,
            KeyVerdict::Pass => {}
        }

        // Eat auto-repeat downs for every mapped key.
        if event.down && event.repeat > 0 {
            return true;
        }

        if !self.grabbed {
            return false;
        }

        self.sink
            .send_key(translated & 0x00FF, event.down, self.combo.modifiers());
        true
    }

    // ── Touch path ────────────────────────────────────────────────────────────

    fn handle_touch(&mut self, event: &MotionEvent) -> bool {
        let sink = Arc::clone(&self.sink);
        let count = event.contact_count();

        // Transition into three simultaneous contacts: stamp the gesture and
        // cancel the tracked slots so the gesture is not misread as input.
        if event.action == MotionAction::Down && count == 3 {
            self.three_finger_down = Some(Instant::now());
            self.touch.cancel_all();
            return true;
        }

        let index = event.action_index;
        if index >= TouchSlotTable::SLOT_COUNT {
            return false;
        }

        match event.action {
            MotionAction::Down => {
                let Some(trace) = event.contacts.get(index) else {
                    return false;
                };
                let p = trace.current;
                self.touch.touch_down(index, p.x, p.y, &*sink);
                true
            }
            MotionAction::Up => {
                if count == 1 {
                    // Last contact lifting: resolve a pending three-finger tap.
                    if let Some(started) = self.three_finger_down.take() {
                        if started.elapsed() < THREE_FINGER_TAP_WINDOW {
                            info!("three-finger tap: requesting on-screen keyboard");
                            self.gestures.request_on_screen_keyboard();
                            return true;
                        }
                    }
                }
                let Some(trace) = event.contacts.get(index) else {
                    return false;
                };
                let p = trace.current;
                self.touch.touch_up(index, p.x, p.y, &*sink);
                if index == 0 && count > 1 && !self.touch.is_cancelled(0) {
                    // The surviving contact is renumbered to index 0 by the
                    // host; re-inject it so it becomes the primary touch
                    // without an externally visible gap.
                    if let Some(next) = event.contacts.get(1) {
                        let next = next.current;
                        self.touch.touch_down(0, next.x, next.y, &*sink);
                    }
                }
                true
            }
            MotionAction::Move => {
                // Move events cover every contact; replay each contact's
                // history before its current sample.
                for slot in 0..TouchSlotTable::SLOT_COUNT.min(count) {
                    let trace = &event.contacts[slot];
                    for sample in &trace.history {
                        self.touch.touch_move(slot, sample.x, sample.y, &*sink);
                    }
                    self.touch
                        .touch_move(slot, trace.current.x, trace.current.y, &*sink);
                }
                true
            }
            MotionAction::Scroll => false,
        }
    }

    // ── Mouse path ────────────────────────────────────────────────────────────

    fn handle_mouse(&mut self, event: &MotionEvent) -> bool {
        let Some(trace) = event.contacts.first() else {
            return false;
        };

        if event.action == MotionAction::Scroll {
            self.sink.send_mouse_scroll(scroll_clicks(event.vscroll));
        }

        for (button, pressed) in button_transitions(self.last_buttons, event.buttons) {
            self.sink.send_mouse_button(button, pressed);
        }

        for sample in &trace.history {
            if let Some((dx, dy)) = self.mouse.sample(sample.x, sample.y) {
                self.sink.send_mouse_move(dx, dy);
            }
        }
        if let Some((dx, dy)) = self.mouse.sample(trace.current.x, trace.current.y) {
            self.sink.send_mouse_move(dx, dy);
        }

        self.last_buttons = event.buttons;
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
