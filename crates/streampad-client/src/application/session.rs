//! The input session: one serialized front door to the dispatcher.
//!
//! Events reach the core from two physically distinct paths (the windowed
//! UI callbacks and the privileged raw-input watcher thread), but the
//! translation state is single-owner by design. [`InputSession`] puts the
//! dispatcher behind one mutex and gives both paths the same synchronous
//! entry points, so the host gets its handled/unhandled verdict back
//! immediately and the core never sees concurrent mutation.
//!
//! The session also owns the lifecycle: per-session state resets when the
//! stream (re)starts, and teardown cancels any pending deferred toggle; a
//! toggle task surviving into the next session would silently flip its grab
//! state.

use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, info, trace};
use uuid::Uuid;

use streampad_core::{
    ControllerCollaborator, GestureSink, GrabToggleScheduler, InputDispatcher, KeyEvent,
    KeyTranslator, MotionEvent, RemoteInputSink, ScaleError,
};

use crate::infrastructure::deferred::GrabToggleTimer;
use crate::infrastructure::raw_input::{CapturedEvent, RawInputWatcher, WatchError};
use crate::infrastructure::storage::config::AppConfig;

/// Error type for session construction.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The configured surface or stream size was invalid.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// The session was started outside a Tokio runtime; the deferred toggle
    /// timer needs one.
    #[error("input session must be started inside a Tokio runtime")]
    NoRuntime,

    /// The raw-input watcher failed to start.
    #[error(transparent)]
    Watcher(#[from] WatchError),

    /// The raw-input pump thread could not be spawned.
    #[error("failed to spawn raw input pump thread: {0}")]
    PumpSpawn(#[from] std::io::Error),
}

/// A running input session.
pub struct InputSession {
    session_id: Uuid,
    dispatcher: Arc<Mutex<InputDispatcher>>,
    toggles: Arc<GrabToggleTimer>,
    watcher: Option<Arc<dyn RawInputWatcher>>,
    pump: Option<thread::JoinHandle<()>>,
}

impl InputSession {
    /// Wires the dispatcher, the deferred toggle timer, and (optionally) the
    /// raw-input watcher, and starts accepting events.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the configured dimensions are invalid,
    /// no Tokio runtime is active, or the watcher fails to start.
    pub fn start(
        config: &AppConfig,
        sink: Arc<dyn RemoteInputSink>,
        controller: Arc<dyn ControllerCollaborator>,
        translator: Arc<dyn KeyTranslator>,
        gestures: Arc<dyn GestureSink>,
        watcher: Option<Arc<dyn RawInputWatcher>>,
    ) -> Result<Self, SessionError> {
        let runtime = Handle::try_current().map_err(|_| SessionError::NoRuntime)?;
        let scale = config.stream_scale()?;

        let toggles = Arc::new(GrabToggleTimer::new(runtime));
        let dispatcher = Arc::new(Mutex::new(InputDispatcher::new(
            scale,
            sink,
            controller,
            translator,
            gestures,
            Arc::clone(&toggles) as Arc<dyn GrabToggleScheduler>,
        )));
        toggles.bind(Arc::downgrade(&dispatcher), watcher.clone());

        let pump = match &watcher {
            Some(watcher) => {
                let rx = watcher.start()?;
                let pump_dispatcher = Arc::clone(&dispatcher);
                Some(
                    thread::Builder::new()
                        .name("raw-input-pump".into())
                        .spawn(move || pump_raw_events(rx, pump_dispatcher))?,
                )
            }
            None => None,
        };

        let session_id = Uuid::new_v4();
        info!(%session_id, raw_capture = pump.is_some(), "input session started");

        Ok(Self {
            session_id,
            dispatcher,
            toggles,
            watcher,
            pump,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Routes a windowed motion event. Returns `true` if consumed; `false`
    /// means the host should apply its default handling.
    pub fn handle_motion(&self, event: &MotionEvent) -> bool {
        self.dispatcher
            .lock()
            .expect("dispatcher lock poisoned")
            .handle_motion(event)
    }

    /// Routes a windowed key transition. Returns `true` if consumed.
    pub fn handle_key(&self, event: &KeyEvent) -> bool {
        self.dispatcher
            .lock()
            .expect("dispatcher lock poisoned")
            .handle_key(event)
    }

    /// Whether input is currently grabbed.
    pub fn grabbed(&self) -> bool {
        self.dispatcher
            .lock()
            .expect("dispatcher lock poisoned")
            .grabbed()
    }

    /// Resets per-session state (touch slots, cursor baseline). Called when
    /// the stream (re)starts. Chord and modifier state persist.
    pub fn restart(&self) {
        debug!(session_id = %self.session_id, "resetting per-session input state");
        self.dispatcher
            .lock()
            .expect("dispatcher lock poisoned")
            .reset();
    }

    /// Tears the session down: cancels pending grab toggles, stops the raw
    /// watcher, and resets the dispatcher.
    pub fn shutdown(&mut self) {
        info!(session_id = %self.session_id, "input session shutting down");
        self.toggles.cancel_pending();
        if let Some(watcher) = &self.watcher {
            watcher.shutdown();
        }
        if let Some(pump) = self.pump.take() {
            // The watcher shutdown closed the channel, so the pump exits.
            let _ = pump.join();
        }
        self.dispatcher
            .lock()
            .expect("dispatcher lock poisoned")
            .reset();
    }
}

impl Drop for InputSession {
    fn drop(&mut self) {
        // Backstop for sessions dropped without an explicit shutdown: a
        // pending toggle must never fire into a later session.
        self.toggles.cancel_pending();
    }
}

/// Drains raw-input events into the shared dispatcher until the watcher
/// closes the channel.
fn pump_raw_events(rx: mpsc::Receiver<CapturedEvent>, dispatcher: Arc<Mutex<InputDispatcher>>) {
    for event in rx {
        let mut dispatcher = dispatcher.lock().expect("dispatcher lock poisoned");
        let handled = match &event {
            CapturedEvent::Motion(motion) => dispatcher.handle_motion(motion),
            CapturedEvent::Key(key) => dispatcher.handle_key(key),
        };
        if !handled {
            // Raw events have no host fallback; unhandled ones are dropped.
            trace!(?event, "raw event not handled");
        }
    }
    debug!("raw input pump stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use streampad_core::{AndroidKeyTranslator, RemoteCommand};

    use crate::infrastructure::raw_input::mock::MockRawWatcher;
    use crate::test_util::{DetachedController, NullGestures, RecordingSink};

    // Android key codes used below.
    const KEYCODE_A: u16 = 29;
    const KEYCODE_Z: u16 = 54;
    const KEYCODE_SHIFT_LEFT: u16 = 59;
    const KEYCODE_CTRL_LEFT: u16 = 113;

    fn start_session(
        watcher: Option<Arc<dyn RawInputWatcher>>,
    ) -> (InputSession, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let session = InputSession::start(
            &AppConfig::default(),
            Arc::clone(&sink) as Arc<dyn RemoteInputSink>,
            Arc::new(DetachedController),
            Arc::new(AndroidKeyTranslator),
            Arc::new(NullGestures),
            watcher,
        )
        .expect("session should start");
        (session, sink)
    }

    fn complete_grab_chord(session: &InputSession) {
        session.handle_key(&KeyEvent::down(KEYCODE_CTRL_LEFT));
        session.handle_key(&KeyEvent::down(KEYCODE_SHIFT_LEFT));
        session.handle_key(&KeyEvent::down(KEYCODE_Z));
        session.handle_key(&KeyEvent::up(KEYCODE_SHIFT_LEFT));
    }

    #[test]
    fn test_start_outside_runtime_is_rejected() {
        // Arrange
        let sink = Arc::new(RecordingSink::default());

        // Act
        let result = InputSession::start(
            &AppConfig::default(),
            sink as Arc<dyn RemoteInputSink>,
            Arc::new(DetachedController),
            Arc::new(AndroidKeyTranslator),
            Arc::new(NullGestures),
            None,
        );

        // Assert
        assert!(matches!(result, Err(SessionError::NoRuntime)));
    }

    #[test]
    fn test_start_rejects_zero_config_dimensions() {
        let mut config = AppConfig::default();
        config.stream.height = 0;

        // The runtime check comes first, so enter a runtime to reach the
        // scale validation.
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let _guard = runtime.enter();
        let result = InputSession::start(
            &config,
            Arc::new(RecordingSink::default()) as Arc<dyn RemoteInputSink>,
            Arc::new(DetachedController),
            Arc::new(AndroidKeyTranslator),
            Arc::new(NullGestures),
            None,
        );

        assert!(matches!(result, Err(SessionError::Scale(_))));
    }

    #[tokio::test]
    async fn test_windowed_touch_round_trip_through_session() {
        // Arrange
        let (session, sink) = start_session(None);

        // Act
        assert!(session.handle_motion(&MotionEvent::touch_down(0, &[(100, 100)])));
        assert!(session.handle_motion(&MotionEvent::touch_up(0, &[(100, 100)])));

        // Assert
        assert_eq!(
            sink.take(),
            vec![
                RemoteCommand::TouchDown { slot: 0, x: 100, y: 100 },
                RemoteCommand::TouchUp { slot: 0, x: 100, y: 100 },
            ]
        );
    }

    #[tokio::test]
    async fn test_restart_resets_cursor_baseline() {
        // Arrange
        let (session, sink) = start_session(None);
        session.handle_motion(&MotionEvent::mouse_move(100, 100));
        session.handle_motion(&MotionEvent::mouse_move(110, 100));
        sink.take();

        // Act
        session.restart();
        session.handle_motion(&MotionEvent::mouse_move(500, 500));

        // Assert – first sample after restart is baseline only
        assert!(sink.take().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_chord_completion_toggles_grab_after_delay() {
        // Arrange
        let (session, _sink) = start_session(None);
        assert!(session.grabbed());

        // Act
        complete_grab_chord(&session);
        assert!(session.grabbed(), "toggle must be deferred, not synchronous");
        tokio::time::sleep(Duration::from_millis(300)).await;

        // Assert
        assert!(!session.grabbed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_toggle() {
        // Arrange
        let (mut session, _sink) = start_session(None);
        complete_grab_chord(&session);

        // Act
        session.shutdown();
        tokio::time::sleep(Duration::from_millis(500)).await;

        // Assert – the cancelled toggle never fired
        assert!(session.grabbed());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_raw_events_flow_through_the_same_dispatcher() {
        // Arrange
        let watcher = Arc::new(MockRawWatcher::new());
        let (session, sink) = start_session(Some(Arc::clone(&watcher) as Arc<dyn RawInputWatcher>));

        // Act – a raw key event enters through the pump thread
        watcher.inject_event(CapturedEvent::Key(KeyEvent::down(KEYCODE_A)));

        // Assert – poll until the pump has delivered it
        let mut commands = Vec::new();
        for _ in 0..100 {
            commands = sink.take();
            if !commands.is_empty() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], RemoteCommand::Key { code: 0x41, pressed: true, .. }));

        drop(session);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_shutdown_stops_the_pump_thread() {
        // Arrange
        let watcher = Arc::new(MockRawWatcher::new());
        let (mut session, _sink) =
            start_session(Some(Arc::clone(&watcher) as Arc<dyn RawInputWatcher>));

        // Act – join happens inside shutdown; hanging would fail the test
        session.shutdown();
    }
}
