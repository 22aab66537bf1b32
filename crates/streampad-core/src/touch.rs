//! Multi-touch slot tracking.
//!
//! # Why positional slots instead of touch IDs? (for beginners)
//!
//! The remote protocol addresses touch contacts by a fixed slot index, not by
//! a persistent identity. The table therefore tracks *positions in the
//! contact list*, which means identity can migrate: when the first finger
//! lifts while a second remains, the dispatcher re-injects the survivor's
//! coordinates as a fresh down on slot 0 and the survivor becomes the new
//! primary touch. That matches what the remote side expects; "fixing" this
//! into stable-ID tracking would silently break the wire contract.
//!
//! Only two concurrent contacts are tracked. A third contact is a gesture,
//! handled at the dispatch layer, which cancels both slots so the gesture is
//! not misread as clicks or drags.

use crate::commands::RemoteInputSink;

/// State of one touch slot.
#[derive(Debug, Clone, Copy, Default)]
struct TouchSlot {
    active: bool,
    /// Set by [`TouchSlotTable::cancel_all`]; suppresses move/up emission
    /// until the next down re-arms the slot.
    cancelled: bool,
    last_x: i32,
    last_y: i32,
}

/// Fixed-size table of independent touch-slot state machines.
///
/// Slot indices at or above [`TouchSlotTable::SLOT_COUNT`] are not the
/// table's concern; the dispatcher classifies those events as unhandled
/// before calling in.
#[derive(Debug, Default)]
pub struct TouchSlotTable {
    slots: [TouchSlot; Self::SLOT_COUNT],
}

impl TouchSlotTable {
    /// Number of concurrently tracked contacts.
    pub const SLOT_COUNT: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the slot exists and is currently cancelled.
    pub fn is_cancelled(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.cancelled)
    }

    /// Marks the slot active and uncancelled, records the position, and
    /// emits a remote touch-down.
    pub fn touch_down(&mut self, index: usize, x: i32, y: i32, sink: &dyn RemoteInputSink) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        slot.active = true;
        slot.cancelled = false;
        slot.last_x = x;
        slot.last_y = y;
        sink.send_touch_down(index as u8, x, y);
    }

    /// Records the position and emits a remote touch-move.
    ///
    /// Moves on a cancelled or inactive slot are dropped, as are samples
    /// identical to the slot's stored position (no zero-motion commands).
    pub fn touch_move(&mut self, index: usize, x: i32, y: i32, sink: &dyn RemoteInputSink) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        if !slot.active || slot.cancelled {
            return;
        }
        if slot.last_x == x && slot.last_y == y {
            return;
        }
        slot.last_x = x;
        slot.last_y = y;
        sink.send_touch_move(index as u8, x, y);
    }

    /// Deactivates the slot and emits a remote touch-up.
    ///
    /// A cancelled slot is deactivated silently and stays cancelled until a
    /// new down re-arms it.
    pub fn touch_up(&mut self, index: usize, x: i32, y: i32, sink: &dyn RemoteInputSink) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        if !slot.active {
            return;
        }
        slot.active = false;
        if slot.cancelled {
            return;
        }
        slot.last_x = x;
        slot.last_y = y;
        sink.send_touch_up(index as u8, x, y);
    }

    /// Marks every active slot cancelled. No commands are emitted.
    pub fn cancel_all(&mut self) {
        for slot in &mut self.slots {
            if slot.active {
                slot.cancelled = true;
            }
        }
    }

    /// Deactivates and un-cancels every slot. Called at session (re)start.
    pub fn reset(&mut self) {
        self.slots = [TouchSlot::default(); Self::SLOT_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RemoteCommand;
    use crate::test_util::RecordingSink;

    #[test]
    fn test_single_touch_round_trip_emits_down_move_up() {
        // Arrange
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();

        // Act
        table.touch_down(0, 100, 100, &sink);
        table.touch_move(0, 110, 120, &sink);
        table.touch_up(0, 110, 120, &sink);

        // Assert
        assert_eq!(
            sink.take(),
            vec![
                RemoteCommand::TouchDown { slot: 0, x: 100, y: 100 },
                RemoteCommand::TouchMove { slot: 0, x: 110, y: 120 },
                RemoteCommand::TouchUp { slot: 0, x: 110, y: 120 },
            ]
        );
    }

    #[test]
    fn test_move_at_stored_position_is_dropped() {
        // Arrange
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();
        table.touch_down(0, 10, 10, &sink);
        sink.take();

        // Act – same position as the down
        table.touch_move(0, 10, 10, &sink);

        // Assert
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_move_without_down_is_dropped() {
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();

        table.touch_move(1, 5, 5, &sink);

        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_cancelled_slot_drops_moves_and_up() {
        // Arrange
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();
        table.touch_down(0, 10, 10, &sink);
        table.touch_down(1, 50, 50, &sink);
        sink.take();

        // Act
        table.cancel_all();
        table.touch_move(0, 20, 20, &sink);
        table.touch_up(0, 20, 20, &sink);
        table.touch_up(1, 50, 50, &sink);

        // Assert – nothing leaks after cancellation
        assert!(sink.take().is_empty());
        assert!(table.is_cancelled(0));
        assert!(table.is_cancelled(1));
    }

    #[test]
    fn test_down_rearms_a_cancelled_slot() {
        // Arrange
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();
        table.touch_down(0, 10, 10, &sink);
        table.cancel_all();
        table.touch_up(0, 10, 10, &sink);
        sink.take();

        // Act – a fresh down re-arms the slot
        table.touch_down(0, 30, 40, &sink);
        table.touch_move(0, 35, 45, &sink);

        // Assert
        assert!(!table.is_cancelled(0));
        assert_eq!(
            sink.take(),
            vec![
                RemoteCommand::TouchDown { slot: 0, x: 30, y: 40 },
                RemoteCommand::TouchMove { slot: 0, x: 35, y: 45 },
            ]
        );
    }

    #[test]
    fn test_cancel_all_skips_inactive_slots() {
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();
        table.touch_down(0, 10, 10, &sink);

        table.cancel_all();

        assert!(table.is_cancelled(0));
        assert!(!table.is_cancelled(1), "inactive slot must not be cancelled");
    }

    #[test]
    fn test_out_of_range_index_mutates_nothing() {
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();

        table.touch_down(2, 10, 10, &sink);
        table.touch_move(7, 10, 10, &sink);
        table.touch_up(2, 10, 10, &sink);

        assert!(sink.take().is_empty());
        assert!(!table.is_cancelled(2));
    }

    #[test]
    fn test_reset_clears_active_and_cancelled_state() {
        // Arrange
        let sink = RecordingSink::default();
        let mut table = TouchSlotTable::new();
        table.touch_down(0, 10, 10, &sink);
        table.cancel_all();
        sink.take();

        // Act
        table.reset();

        // Assert – slot behaves like new: moves dropped until a down arrives
        assert!(!table.is_cancelled(0));
        table.touch_move(0, 20, 20, &sink);
        assert!(sink.take().is_empty());
    }
}
