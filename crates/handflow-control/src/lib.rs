//! HandFlow Control - Gesture Integration Shell
//!
//! This crate connects the gesture core to the outside world:
//! - **Sources**: landmark-frame delivery from an external hand tracker
//! - **Dispatch**: gesture labels mapped onto media/volume/brightness
//!   commands behind an action-performer abstraction
//! - **Observers**: informational fan-out of emitted labels
//! - **Session**: the single frame-synchronous processing loop
//! - **Web feed**: REST endpoints and a WebSocket gesture stream
//!   (requires the `http-api` feature)
//!
//! ## Feature Flags
//!
//! - `http-api`: Enable the web feed (requires `axum`, `tokio`)

#![allow(missing_docs)]

/// Error types
pub mod error;

/// Media commands and the action-performer boundary
pub mod action;
/// Gesture label to command dispatch
pub mod dispatch;
/// Observer fan-out
pub mod observer;
/// Session loop
pub mod session;
/// Landmark-frame sources
pub mod source;

#[cfg(feature = "http-api")]
/// Web feed server
pub mod web;

// Re-exports
pub use action::{ActionPerformer, ChannelPerformer, LogPerformer, MediaCommand};
pub use dispatch::Dispatcher;
pub use error::{ControlError, Result};
pub use observer::{ChannelObserver, GestureEvent, GestureObserver, LogObserver};
pub use session::Session;
pub use source::{spawn_source, JsonlSource, LandmarkSource, ScriptedSource, WireFrame, WireHand};

#[cfg(feature = "http-api")]
pub use web::{WebFeed, WebFeedConfig};
