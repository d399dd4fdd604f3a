//! Finger-state extraction
//!
//! Collapses a 21-point hand skeleton into five booleans, one per digit,
//! `true` meaning extended. The four fingers compare tip against PIP joint
//! (closer to the fingertip than MCP, which separates open from closed more
//! reliably at intermediate curl angles). The thumb is a sign test on the
//! x-axis against the IP joint and must be handedness-aware: identical
//! geometry reads as the opposite thumb state on the opposite hand.

use crate::landmark::{
    HandLandmarks, Handedness, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP,
    RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP,
};
use serde::{Deserialize, Serialize};

/// Extended/curled state of the five digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerState {
    /// Thumb extended.
    pub thumb: bool,
    /// Index finger extended.
    pub index: bool,
    /// Middle finger extended.
    pub middle: bool,
    /// Ring finger extended.
    pub ring: bool,
    /// Pinky extended.
    pub pinky: bool,
}

impl FingerState {
    /// Extract the finger state from one hand's landmarks.
    ///
    /// When the tracker did not report handedness, `Right` is assumed; a
    /// left hand presented without a handedness flag will have its thumb
    /// state inverted. The y-axis tests are orientation-free.
    pub fn detect(hand: &HandLandmarks) -> Self {
        let handedness = hand.handedness().unwrap_or_default();

        // Top-left origin: smaller y is higher, i.e. extended.
        let up = |tip: usize, pip: usize| hand.point(tip).y < hand.point(pip).y;

        let tip_x = hand.point(THUMB_TIP).x;
        let ip_x = hand.point(THUMB_IP).x;
        let thumb = match handedness {
            Handedness::Right => tip_x < ip_x,
            Handedness::Left => tip_x > ip_x,
        };

        Self {
            thumb,
            index: up(INDEX_TIP, INDEX_PIP),
            middle: up(MIDDLE_TIP, MIDDLE_PIP),
            ring: up(RING_TIP, RING_PIP),
            pinky: up(PINKY_TIP, PINKY_PIP),
        }
    }

    /// State as `[thumb, index, middle, ring, pinky]`.
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// Number of extended digits.
    pub fn count(&self) -> usize {
        self.as_array().iter().filter(|&&f| f).count()
    }

    /// All five digits extended (open palm).
    pub fn all_extended(&self) -> bool {
        self.count() == 5
    }

    /// All five digits curled (closed fist).
    pub fn none_extended(&self) -> bool {
        self.count() == 0
    }

    /// Exact pattern match against `[thumb, index, middle, ring, pinky]`.
    pub fn matches(&self, pattern: [bool; 5]) -> bool {
        self.as_array() == pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Landmark, LANDMARK_COUNT, THUMB_IP, THUMB_TIP};

    fn hand_with_thumb(tip_x: f32, ip_x: f32) -> HandLandmarks {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[THUMB_TIP] = Landmark::new(tip_x, 100.0);
        points[THUMB_IP] = Landmark::new(ip_x, 110.0);
        HandLandmarks::new(points)
    }

    #[test]
    fn thumb_sign_test_flips_with_handedness() {
        let geometry = hand_with_thumb(50.0, 90.0);

        let right = geometry.clone().with_handedness(Handedness::Right);
        let left = geometry.with_handedness(Handedness::Left);

        assert!(FingerState::detect(&right).thumb);
        assert!(!FingerState::detect(&left).thumb);
    }

    #[test]
    fn missing_handedness_assumes_right() {
        let hand = hand_with_thumb(50.0, 90.0);
        assert!(FingerState::detect(&hand).thumb);
    }

    #[test]
    fn pattern_helpers() {
        let state = FingerState {
            thumb: false,
            index: true,
            middle: true,
            ring: true,
            pinky: false,
        };
        assert_eq!(state.count(), 3);
        assert!(state.matches([false, true, true, true, false]));
        assert!(!state.all_extended());
        assert!(!state.none_extended());
    }
}
