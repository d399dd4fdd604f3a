//! Hand landmark data model
//!
//! A tracked hand is an ordered sequence of 21 points with fixed anatomical
//! indexing (0 = wrist, 4 = thumb tip, 8/12/16/20 = fingertips). Landmark
//! sets are produced by an external tracker once per captured frame and are
//! immutable for the duration of that frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of landmarks in a hand skeleton.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist landmark index.
pub const WRIST: usize = 0;
/// Thumb carpometacarpal joint.
pub const THUMB_CMC: usize = 1;
/// Thumb metacarpophalangeal joint.
pub const THUMB_MCP: usize = 2;
/// Thumb interphalangeal joint.
pub const THUMB_IP: usize = 3;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index finger metacarpophalangeal joint.
pub const INDEX_MCP: usize = 5;
/// Index finger proximal interphalangeal joint.
pub const INDEX_PIP: usize = 6;
/// Index finger distal interphalangeal joint.
pub const INDEX_DIP: usize = 7;
/// Index finger tip.
pub const INDEX_TIP: usize = 8;
/// Middle finger metacarpophalangeal joint.
pub const MIDDLE_MCP: usize = 9;
/// Middle finger proximal interphalangeal joint.
pub const MIDDLE_PIP: usize = 10;
/// Middle finger distal interphalangeal joint.
pub const MIDDLE_DIP: usize = 11;
/// Middle finger tip.
pub const MIDDLE_TIP: usize = 12;
/// Ring finger metacarpophalangeal joint.
pub const RING_MCP: usize = 13;
/// Ring finger proximal interphalangeal joint.
pub const RING_PIP: usize = 14;
/// Ring finger distal interphalangeal joint.
pub const RING_DIP: usize = 15;
/// Ring finger tip.
pub const RING_TIP: usize = 16;
/// Pinky metacarpophalangeal joint.
pub const PINKY_MCP: usize = 17;
/// Pinky proximal interphalangeal joint.
pub const PINKY_PIP: usize = 18;
/// Pinky distal interphalangeal joint.
pub const PINKY_DIP: usize = 19;
/// Pinky tip.
pub const PINKY_TIP: usize = 20;

/// A single tracked point on a hand.
///
/// Coordinates use a top-left origin, so "up" corresponds to smaller `y`.
/// `z` is 0.0 when the tracker only provides 2D positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position (pixel or normalized space).
    pub x: f32,
    /// Vertical position, increasing downward.
    pub y: f32,
    /// Depth, if the tracker provides it.
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    /// Create a 2D landmark.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// The 2D position of this landmark.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Which hand a landmark set belongs to, as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    /// Left hand.
    Left,
    /// Right hand.
    Right,
}

impl Default for Handedness {
    // Trackers facing a mirrored webcam most often report Right; when
    // handedness is unavailable we assume it, which can misread the thumb
    // of a left hand. See FingerState::detect.
    fn default() -> Self {
        Handedness::Right
    }
}

/// One hand's 21-point landmark set for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
    handedness: Option<Handedness>,
}

impl HandLandmarks {
    /// Build a hand from a full set of 21 points.
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self {
            points,
            handedness: None,
        }
    }

    /// Build a hand from a slice. Returns `None` unless the slice holds
    /// exactly 21 points; a malformed tracker frame is "no hand", not a
    /// failure.
    pub fn from_slice(points: &[Landmark]) -> Option<Self> {
        let points: [Landmark; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self::new(points))
    }

    /// Attach the tracker's handedness report.
    pub fn with_handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = Some(handedness);
        self
    }

    /// The reported handedness, if any.
    pub fn handedness(&self) -> Option<Handedness> {
        self.handedness
    }

    /// Landmark at a fixed anatomical index (see the index constants).
    ///
    /// Callers index with the named constants; all of them are in range.
    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// Landmark at an arbitrary index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    /// Euclidean distance between thumb tip and index tip.
    ///
    /// Zero when the tips coincide; never a division, so degenerate
    /// landmark sets are safe.
    pub fn pinch_distance(&self) -> f32 {
        self.point(THUMB_TIP)
            .xy()
            .distance(self.point(INDEX_TIP).xy())
    }
}

/// All hands detected in one captured frame, in detection order, plus the
/// frame's monotonic timestamp (time since session start).
///
/// A frame may contain zero, one, or two hands. Frames are produced and
/// discarded every capture cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    /// Detected hands, in detection order.
    pub hands: Vec<HandLandmarks>,
    /// Monotonic clock reading for this frame.
    pub timestamp: Duration,
}

impl LandmarkFrame {
    /// Frame with the given hands and timestamp.
    pub fn new(hands: Vec<HandLandmarks>, timestamp: Duration) -> Self {
        Self { hands, timestamp }
    }

    /// Frame with no detected hands.
    pub fn empty(timestamp: Duration) -> Self {
        Self {
            hands: Vec::new(),
            timestamp,
        }
    }

    /// Whether any hand was detected this frame.
    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_rejects_wrong_length() {
        let short = vec![Landmark::new(0.0, 0.0); 20];
        assert!(HandLandmarks::from_slice(&short).is_none());

        let exact = vec![Landmark::new(1.0, 2.0); 21];
        let hand = HandLandmarks::from_slice(&exact).unwrap();
        assert_eq!(hand.point(WRIST).x, 1.0);
    }

    #[test]
    fn pinch_distance_zero_when_tips_coincide() {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[THUMB_TIP] = Landmark::new(100.0, 100.0);
        points[INDEX_TIP] = Landmark::new(100.0, 100.0);
        let hand = HandLandmarks::new(points);
        assert_eq!(hand.pinch_distance(), 0.0);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let hand = HandLandmarks::new([Landmark::default(); LANDMARK_COUNT]);
        assert!(hand.get(LANDMARK_COUNT).is_none());
    }
}
