//! Observer fan-out
//!
//! Observers receive every emitted label for feedback purposes (UI
//! overlays, web clients). They are strictly informational: nothing an
//! observer does can influence classification or dispatch.

use crossbeam_channel::Sender;
use handflow_core::Gesture;
use serde::Serialize;
use tracing::{debug, info};

/// Snapshot of one emitted gesture, with the level mirrors at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GestureEvent {
    /// The emitted label.
    pub gesture: Gesture,
    /// Frame timestamp in milliseconds since session start.
    pub timestamp_ms: u64,
    /// Brightness mirror, 0-100.
    pub brightness: u8,
    /// Volume mirror, 0-100.
    pub volume: u8,
}

/// Receives emitted gestures after dispatch.
pub trait GestureObserver: Send {
    fn on_gesture(&mut self, event: &GestureEvent);
}

/// Observer that writes labels to the log.
#[derive(Debug, Default)]
pub struct LogObserver;

impl GestureObserver for LogObserver {
    fn on_gesture(&mut self, event: &GestureEvent) {
        if event.gesture.is_mode_label() {
            debug!(gesture = event.gesture.name(), "mode active");
        } else {
            info!(
                gesture = event.gesture.name(),
                brightness = event.brightness,
                volume = event.volume,
                "gesture"
            );
        }
    }
}

/// Observer that forwards events over a channel, e.g. to a UI thread.
/// Disconnected receivers are ignored; feedback must never stall the
/// session.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<GestureEvent>,
}

impl ChannelObserver {
    /// Observer sending into `tx`.
    pub fn new(tx: Sender<GestureEvent>) -> Self {
        Self { tx }
    }
}

impl GestureObserver for ChannelObserver {
    fn on_gesture(&mut self, event: &GestureEvent) {
        let _ = self.tx.send(*event);
    }
}
