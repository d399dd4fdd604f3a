//! Classifier tuning parameters

use crate::gesture::GestureCategory;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Thresholds, cooldowns and rate limits for the gesture classifier.
///
/// Distances are in the tracker's coordinate units; the defaults assume
/// pixel space at roughly 640x480. Trackers emitting normalized
/// coordinates should scale the distance fields accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Trajectory history capacity in samples.
    pub history_capacity: usize,
    /// Minimum samples for a swipe.
    pub swipe_min_samples: usize,
    /// Maximum age of swipe samples, in milliseconds.
    pub swipe_window_ms: u64,
    /// Minimum net horizontal displacement for a swipe.
    pub swipe_min_dx: f32,
    /// Minimum vertical motion per air-scroll step.
    pub scroll_threshold: f32,
    /// Pinch distance below which brightness decreases.
    pub pinch_low: f32,
    /// Pinch distance above which brightness increases.
    pub pinch_high: f32,
    /// Pinch distance beyond which the pinch rule disengages entirely,
    /// leaving wide thumb-index poses to the static table.
    pub pinch_disengage: f32,
    /// Vertical margin around the wrist for the thumb volume hold.
    pub thumb_margin: f32,
    /// Step applied to the brightness and volume mirrors per fire.
    pub level_step: u8,
    /// Cooldown for play/pause, in milliseconds.
    pub transport_cooldown_ms: u64,
    /// Cooldown for seeks, in milliseconds.
    pub seek_cooldown_ms: u64,
    /// Cooldown for track navigation, in milliseconds.
    pub track_cooldown_ms: u64,
    /// Rate limit for continuous volume gestures, in milliseconds.
    pub volume_rate_ms: u64,
    /// Rate limit for pinch brightness, in milliseconds.
    pub pinch_rate_ms: u64,
    /// Brightness mirror at session start, 0-100.
    pub initial_brightness: u8,
    /// Volume mirror at session start, 0-100.
    pub initial_volume: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            history_capacity: 8,
            swipe_min_samples: 5,
            swipe_window_ms: 400,
            swipe_min_dx: 60.0,
            scroll_threshold: 20.0,
            pinch_low: 40.0,
            pinch_high: 100.0,
            pinch_disengage: 180.0,
            thumb_margin: 20.0,
            level_step: 5,
            transport_cooldown_ms: 1000,
            seek_cooldown_ms: 1000,
            track_cooldown_ms: 1000,
            volume_rate_ms: 200,
            pinch_rate_ms: 150,
            initial_brightness: 50,
            initial_volume: 50,
        }
    }
}

impl ClassifierConfig {
    /// Declared cooldown duration for a gesture category.
    pub fn cooldown(&self, category: GestureCategory) -> Duration {
        let ms = match category {
            GestureCategory::Transport => self.transport_cooldown_ms,
            GestureCategory::Seek => self.seek_cooldown_ms,
            GestureCategory::Track => self.track_cooldown_ms,
            GestureCategory::Volume => self.volume_rate_ms,
            GestureCategory::PinchBrightness => self.pinch_rate_ms,
            GestureCategory::ScrollBrightness => 0,
        };
        Duration::from_millis(ms)
    }

    /// Maximum age of swipe samples.
    pub fn swipe_window(&self) -> Duration {
        Duration::from_millis(self.swipe_window_ms)
    }
}
