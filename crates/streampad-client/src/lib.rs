//! streampad-client library entry point.
//!
//! Re-exports the public modules so that integration tests in `tests/` and
//! the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_util {
    //! Shared doubles for session and timer tests.

    use std::sync::{Arc, Mutex};

    use streampad_core::{
        AndroidKeyTranslator, ControllerCollaborator, GestureSink, GrabToggleScheduler,
        InputDispatcher, KeyEvent, Modifiers, MotionEvent, MouseButton, RemoteCommand,
        RemoteInputSink, StreamScale,
    };

    /// Records every command in arrival order.
    #[derive(Default)]
    pub struct RecordingSink {
        commands: Mutex<Vec<RemoteCommand>>,
    }

    impl RecordingSink {
        pub fn take(&self) -> Vec<RemoteCommand> {
            std::mem::take(&mut self.commands.lock().expect("sink lock poisoned"))
        }

        fn push(&self, command: RemoteCommand) {
            self.commands.lock().expect("sink lock poisoned").push(command);
        }
    }

    impl RemoteInputSink for RecordingSink {
        fn send_mouse_move(&self, dx: i16, dy: i16) {
            self.push(RemoteCommand::MouseMove { dx, dy });
        }
        fn send_mouse_button(&self, button: MouseButton, pressed: bool) {
            self.push(RemoteCommand::MouseButton { button, pressed });
        }
        fn send_mouse_scroll(&self, clicks: i8) {
            self.push(RemoteCommand::MouseScroll { clicks });
        }
        fn send_key(&self, code: u16, pressed: bool, modifiers: Modifiers) {
            self.push(RemoteCommand::Key { code, pressed, modifiers });
        }
        fn send_touch_down(&self, slot: u8, x: i32, y: i32) {
            self.push(RemoteCommand::TouchDown { slot, x, y });
        }
        fn send_touch_move(&self, slot: u8, x: i32, y: i32) {
            self.push(RemoteCommand::TouchMove { slot, x, y });
        }
        fn send_touch_up(&self, slot: u8, x: i32, y: i32) {
            self.push(RemoteCommand::TouchUp { slot, x, y });
        }
    }

    /// Controller that never consumes anything.
    pub struct DetachedController;

    impl ControllerCollaborator for DetachedController {
        fn handle_button(&self, _event: &KeyEvent) -> bool {
            false
        }
        fn handle_motion(&self, _event: &MotionEvent) -> bool {
            false
        }
    }

    /// Gesture sink that ignores requests.
    pub struct NullGestures;

    impl GestureSink for NullGestures {
        fn request_on_screen_keyboard(&self) {}
    }

    /// Scheduler that drops requests; used where the test drives a
    /// [`crate::infrastructure::deferred::GrabToggleTimer`] directly.
    pub struct NullScheduler;

    impl GrabToggleScheduler for NullScheduler {
        fn schedule_toggle(&self, _delay: std::time::Duration) {}
    }

    /// A dispatcher behind the session's mutex shape, with a recording sink.
    pub fn make_dispatcher() -> (Arc<Mutex<InputDispatcher>>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = Arc::new(Mutex::new(InputDispatcher::new(
            StreamScale::new(1280, 720, 1920, 1080).expect("valid dimensions"),
            Arc::clone(&sink) as Arc<dyn RemoteInputSink>,
            Arc::new(DetachedController),
            Arc::new(AndroidKeyTranslator),
            Arc::new(NullGestures),
            Arc::new(NullScheduler),
        )));
        (dispatcher, sink)
    }
}
