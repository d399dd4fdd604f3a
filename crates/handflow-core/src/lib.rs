//! HandFlow Core - Gesture Recognition Domain Model
//!
//! This crate contains the gesture core for HandFlow, including:
//! - Hand landmark data model (21-point skeleton, fixed anatomical indexing)
//! - Finger-state extraction (extended/curled per digit, handedness-aware)
//! - Gesture classification (priority cascade, cooldowns, trajectory history)
//! - Classifier configuration
//!
//! The crate is pure computation: landmark detection happens in an external
//! tracker, timestamps are inputs, and no function here performs I/O or can
//! fail. Absence of a hand or an unrecognized pose is `None`, never an error.

#![warn(missing_docs)]

pub use glam::Vec2;

pub mod classifier;
pub mod config;
pub mod cooldown;
pub mod finger;
pub mod gesture;
pub mod history;
pub mod landmark;

// --- Re-exports grouped by category ---

// Landmarks
pub use landmark::{HandLandmarks, Handedness, Landmark, LandmarkFrame, LANDMARK_COUNT};

// Finger state
pub use finger::FingerState;

// Gestures
pub use gesture::{Gesture, GestureCategory};

// Classification
pub use classifier::GestureClassifier;
pub use config::ClassifierConfig;
pub use cooldown::CooldownBank;
pub use history::TrackHistory;
