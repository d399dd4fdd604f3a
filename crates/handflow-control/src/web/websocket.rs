//! WebSocket handler for the gesture stream

use super::server::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use handflow_core::Gesture;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// WebSocket message from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WsServerMessage {
    #[serde(rename = "gesture")]
    Gesture {
        gesture: Gesture,
        name: String,
        brightness: u8,
        volume: u8,
    },
    #[serde(rename = "error")]
    Error { message: String },
    #[serde(rename = "pong")]
    Pong,
}

/// WebSocket message from client to server
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WsClientMessage {
    #[serde(rename = "ping")]
    Ping,
}

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle a WebSocket connection
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    tracing::info!("WebSocket client connected");

    let mut events = state.events.subscribe();
    let push_task = tokio::spawn(async move {
        loop {
            let message = match events.recv().await {
                Ok(message) => message,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "WebSocket client lagging, dropping events");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };

            let Ok(json) = serde_json::to_string(&message) else {
                break;
            };
            if sender.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming messages
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) = handle_text_message(&text) {
                    tracing::warn!("Error handling WebSocket message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                tracing::info!("WebSocket client disconnected");
                break;
            }
            Err(e) => {
                tracing::error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    push_task.abort();
}

/// Handle a text message from the client
fn handle_text_message(text: &str) -> Result<(), String> {
    let message: WsClientMessage =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {}", e))?;

    match message {
        WsClientMessage::Ping => tracing::trace!("WebSocket ping"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_server_message_serialization() {
        let msg = WsServerMessage::Gesture {
            gesture: Gesture::Play,
            name: "Play".to_string(),
            brightness: 50,
            volume: 50,
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"gesture\""));
        assert!(json.contains("\"play\""));
    }

    #[test]
    fn test_ws_client_message_deserialization() {
        let json = r#"{"type":"ping"}"#;
        let msg: WsClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, WsClientMessage::Ping));
    }
}
