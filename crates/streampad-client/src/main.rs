//! StreamPad client entry point.
//!
//! Wires the input session together and runs headless until interrupted.
//! The streaming connection (video, transport, handshake) attaches at two
//! seams: the command receiver drained below, and the host UI layer that
//! feeds `InputSession::handle_motion` / `handle_key`.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML settings (stream, surface, input)
//!  └─ ChannelSink::new()     -- command channel to the transport
//!  └─ InputSession::start()  -- dispatcher + deferred toggle timer
//!       └─ drain task        -- logs commands until a transport attaches
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use streampad_core::{
    AndroidKeyTranslator, ControllerCollaborator, GestureSink, KeyEvent, MotionEvent,
};

use streampad_client::application::InputSession;
use streampad_client::infrastructure::sink::ChannelSink;
use streampad_client::infrastructure::storage::config;

/// Controller backend stand-in until a platform implementation attaches.
struct DetachedController;

impl ControllerCollaborator for DetachedController {
    fn handle_button(&self, _event: &KeyEvent) -> bool {
        false
    }
    fn handle_motion(&self, _event: &MotionEvent) -> bool {
        false
    }
}

/// Surfaces gesture callbacks to the host UI layer; headless builds only
/// log them.
struct OverlayGestures;

impl GestureSink for OverlayGestures {
    fn request_on_screen_keyboard(&self) {
        info!("on-screen keyboard requested");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("StreamPad client starting");

    let config = config::load_config()?;
    let stream_mode = format!(
        "{}x{}@{}",
        config.stream.width, config.stream.height, config.stream.fps
    );
    let surface_size = format!("{}x{}", config.surface.width, config.surface.height);
    info!(
        stream = %stream_mode,
        surface = %surface_size,
        bitrate_kbps = config.stream.bitrate_kbps,
        "configuration loaded"
    );

    if config.input.raw_capture {
        // The evdev-style watcher ships separately; nothing to attach here.
        warn!("raw input capture is enabled in config but no platform watcher is available");
    }

    let (sink, mut commands) = ChannelSink::new();
    let mut session = InputSession::start(
        &config,
        sink,
        Arc::new(DetachedController),
        Arc::new(AndroidKeyTranslator),
        Arc::new(OverlayGestures),
        None,
    )?;

    // Drain translated commands. The streaming transport replaces this loop
    // when it attaches.
    tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            debug!(?command, "remote input command");
        }
    });

    info!(session_id = %session.session_id(), "ready; press Ctrl-C to exit");
    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received");

    session.shutdown();
    info!("StreamPad client stopped");
    Ok(())
}
