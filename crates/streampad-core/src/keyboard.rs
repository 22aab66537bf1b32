//! Reserved key-chord detection.
//!
//! Ctrl+Shift+Z is reserved to toggle input grab, but the remote side also
//! wants to see Ctrl+Shift+Z as ordinary typing in other apps; the two
//! sequences share the same key codes, and the only difference is that the
//! chord is recognized *here* and never forwarded. The detector is a small
//! state machine: arming on the combo key while both modifiers are held, and
//! completing when a modifier is released. Completion does not flip the grab
//! flag itself; it tells the caller to schedule the deferred toggle, which
//! keeps the flip (and its device-capture side effects) out of the key
//! dispatch path.

use crate::commands::Modifiers;
use crate::keymap::vk;

/// VK code of the key that, chorded with Ctrl+Shift, toggles input grab.
pub const GRAB_COMBO_KEY: u16 = vk::VK_Z;

/// Chord recognition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChordState {
    /// No chord in progress.
    #[default]
    Idle,
    /// The combo key went down with both modifiers held; waiting for a
    /// modifier release to complete.
    Armed,
}

/// Outcome of evaluating one key transition against the chord table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVerdict {
    /// The event belongs to the chord; do not forward it.
    Swallowed,
    /// The chord completed; swallow the event and schedule the deferred
    /// grab toggle.
    ChordCompleted,
    /// Not chord-related; continue normal key handling.
    Pass,
}

/// Tracks the modifier bitmask and the grab-chord state machine.
#[derive(Debug, Default)]
pub struct ComboDetector {
    state: ChordState,
    modifiers: Modifiers,
}

impl ComboDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The modifier bitmask as of the last processed transition.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn state(&self) -> ChordState {
        self.state
    }

    /// Evaluates one translated key transition.
    ///
    /// The modifier bitmask is updated before the chord table is consulted,
    /// so the combo-key down sees the modifiers that accompany it.
    pub fn process_key(&mut self, translated: u16, down: bool) -> KeyVerdict {
        // The wire carries single-byte key codes; compare in that space.
        let code = translated & 0x00FF;

        let mask = match code {
            vk::VK_SHIFT => Modifiers::SHIFT,
            vk::VK_CONTROL => Modifiers::CTRL,
            vk::VK_MENU => Modifiers::ALT,
            _ => 0,
        };
        self.modifiers.apply(mask, down);

        match self.state {
            ChordState::Idle => {
                if code == GRAB_COMBO_KEY && down && self.modifiers.ctrl() && self.modifiers.shift() {
                    self.state = ChordState::Armed;
                    KeyVerdict::Swallowed
                } else {
                    KeyVerdict::Pass
                }
            }
            ChordState::Armed => {
                if !down && (code == vk::VK_CONTROL || code == vk::VK_SHIFT) {
                    self.state = ChordState::Idle;
                    KeyVerdict::ChordCompleted
                } else {
                    // Everything typed mid-chord is eaten, including
                    // auto-repeats of the combo key itself.
                    KeyVerdict::Swallowed
                }
            }
        }
    }
}
