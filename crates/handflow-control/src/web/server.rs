//! Web feed server and its observer bridge

use super::routes;
use super::websocket::WsServerMessage;
use crate::error::Result;
use crate::observer::{GestureEvent, GestureObserver};
use handflow_core::Gesture;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// Web feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebFeedConfig {
    /// Address to bind, e.g. "127.0.0.1:5000".
    pub bind_addr: String,
    /// Event fan-out buffer per connected client.
    pub channel_capacity: usize,
}

impl Default for WebFeedConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            channel_capacity: 64,
        }
    }
}

/// Last known session state, served at `GET /state`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SharedSnapshot {
    /// Most recent actionable gesture.
    pub last_gesture: Option<Gesture>,
    /// Brightness mirror, 0-100.
    pub brightness: u8,
    /// Volume mirror, 0-100.
    pub volume: u8,
}

/// Shared state for route handlers.
#[derive(Clone)]
pub struct AppState {
    pub events: broadcast::Sender<WsServerMessage>,
    pub snapshot: Arc<RwLock<SharedSnapshot>>,
}

/// The web feed: owns the shared state and serves it.
pub struct WebFeed {
    config: WebFeedConfig,
    state: AppState,
}

impl WebFeed {
    /// Feed with the given configuration.
    pub fn new(config: WebFeedConfig) -> Self {
        let (events, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            config,
            state: AppState {
                events,
                snapshot: Arc::new(RwLock::new(SharedSnapshot::default())),
            },
        }
    }

    /// Observer that feeds this server; register it on the session.
    pub fn observer(&self) -> WebFeedObserver {
        WebFeedObserver {
            state: self.state.clone(),
        }
    }

    /// The shared route state.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Serve until the process ends.
    pub async fn serve(self) -> Result<()> {
        let router = routes::router(self.state);
        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr).await?;
        info!(addr = %self.config.bind_addr, "web feed listening");
        axum::serve(listener, router).await?;
        Ok(())
    }
}

/// Bridges session events into the web feed.
pub struct WebFeedObserver {
    state: AppState,
}

impl GestureObserver for WebFeedObserver {
    fn on_gesture(&mut self, event: &GestureEvent) {
        {
            let mut snapshot = self.state.snapshot.write();
            snapshot.brightness = event.brightness;
            snapshot.volume = event.volume;
            if !event.gesture.is_mode_label() {
                snapshot.last_gesture = Some(event.gesture);
            }
        }

        // Mode-active labels update the snapshot but are not pushed.
        if event.gesture.is_mode_label() {
            return;
        }

        // A send error only means no client is connected.
        let _ = self.state.events.send(WsServerMessage::Gesture {
            gesture: event.gesture,
            name: event.gesture.name().to_string(),
            brightness: event.brightness,
            volume: event.volume,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_updates_snapshot_and_broadcasts() {
        let feed = WebFeed::new(WebFeedConfig::default());
        let mut subscriber = feed.state().events.subscribe();
        let mut observer = feed.observer();

        observer.on_gesture(&GestureEvent {
            gesture: Gesture::SeekForward,
            timestamp_ms: 10,
            brightness: 70,
            volume: 55,
        });

        let snapshot = *feed.state().snapshot.read();
        assert_eq!(snapshot.last_gesture, Some(Gesture::SeekForward));
        assert_eq!(snapshot.brightness, 70);

        let message = subscriber.try_recv().unwrap();
        assert!(matches!(message, WsServerMessage::Gesture { .. }));
    }

    #[test]
    fn mode_labels_are_not_broadcast() {
        let feed = WebFeed::new(WebFeedConfig::default());
        let mut subscriber = feed.state().events.subscribe();
        let mut observer = feed.observer();

        observer.on_gesture(&GestureEvent {
            gesture: Gesture::BrightnessScroll,
            timestamp_ms: 10,
            brightness: 50,
            volume: 50,
        });

        assert!(subscriber.try_recv().is_err());
        // The snapshot still tracks the levels.
        assert_eq!(feed.state().snapshot.read().brightness, 50);
        assert_eq!(feed.state().snapshot.read().last_gesture, None);
    }
}
