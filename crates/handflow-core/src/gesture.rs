//! Gesture labels and rate-limiting categories

use serde::{Deserialize, Serialize};

/// A recognized gesture, the classifier's output for one frame.
///
/// The set is closed; "no actionable gesture" is `Option::None`, not a
/// variant. Labels exist only for the frame that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Open palm: resume playback.
    Play,
    /// Closed fist: pause playback.
    Pause,
    /// Raise the volume one step.
    VolumeUp,
    /// Lower the volume one step.
    VolumeDown,
    /// Seek forward.
    SeekForward,
    /// Seek backward.
    SeekBackward,
    /// Return to the start of the current track.
    PreviousTrack,
    /// Raise the brightness level one step.
    BrightnessUp,
    /// Lower the brightness level one step.
    BrightnessDown,
    /// Pinch pose held inside the dead zone; no level change.
    BrightnessPinch,
    /// Scroll pose held without enough vertical motion; no level change.
    BrightnessScroll,
}

/// Rate-limiting category for a gesture.
///
/// Cooldowns are declared per category, not per label, so e.g. a swipe and
/// a static seek pose share one seek cooldown window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureCategory {
    /// Play/pause toggles.
    Transport,
    /// Forward/backward seeks.
    Seek,
    /// Track navigation.
    Track,
    /// Continuous volume adjustment.
    Volume,
    /// Pinch-driven brightness adjustment.
    PinchBrightness,
    /// Air-scroll brightness adjustment (no rate limit).
    ScrollBrightness,
}

impl Gesture {
    /// Whether this label only signals an active mode and carries no level
    /// or transport change. Mode labels are useful for UI feedback but are
    /// not broadcast or dispatched.
    pub fn is_mode_label(&self) -> bool {
        matches!(self, Gesture::BrightnessPinch | Gesture::BrightnessScroll)
    }

    /// Human-readable name for overlays and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Play => "Play",
            Gesture::Pause => "Pause",
            Gesture::VolumeUp => "Volume Up",
            Gesture::VolumeDown => "Volume Down",
            Gesture::SeekForward => "Seek Forward",
            Gesture::SeekBackward => "Seek Backward",
            Gesture::PreviousTrack => "Previous Track",
            Gesture::BrightnessUp => "Brightness Up",
            Gesture::BrightnessDown => "Brightness Down",
            Gesture::BrightnessPinch => "Brightness Pinch",
            Gesture::BrightnessScroll => "Brightness Scroll",
        }
    }
}
