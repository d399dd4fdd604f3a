//! Web feed: REST endpoints and a WebSocket gesture stream
//!
//! Connected clients are pure observers of already-computed labels; no
//! client can influence classification.

mod routes;
mod server;
mod websocket;

pub use server::{AppState, SharedSnapshot, WebFeed, WebFeedConfig, WebFeedObserver};
pub use websocket::{WsClientMessage, WsServerMessage};
