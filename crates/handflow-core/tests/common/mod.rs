//! Synthetic hand poses for classifier tests.
//!
//! Geometry is pixel-space, 640x480, right hand as seen in a mirrored
//! webcam view: the thumb extends toward smaller x, fingers extend upward
//! (smaller y).

// Not every test crate uses every helper.
#![allow(dead_code)]

use handflow_core::landmark::{
    HandLandmarks, Handedness, Landmark, LandmarkFrame, INDEX_MCP, INDEX_PIP, INDEX_TIP,
    LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_MCP,
    RING_PIP, RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};
use std::time::Duration;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

pub fn frame(hands: Vec<HandLandmarks>, at_ms: u64) -> LandmarkFrame {
    LandmarkFrame::new(hands, ms(at_ms))
}

pub fn empty_frame(at_ms: u64) -> LandmarkFrame {
    LandmarkFrame::empty(ms(at_ms))
}

/// Builder over a plausible right-hand skeleton.
pub struct HandBuilder {
    points: [Landmark; LANDMARK_COUNT],
    handedness: Option<Handedness>,
}

impl HandBuilder {
    /// Baseline: closed fist. Thumb tip rests level with its knuckle.
    pub fn new() -> Self {
        let mut points = [Landmark::default(); LANDMARK_COUNT];

        points[WRIST] = Landmark::new(320.0, 400.0);
        points[THUMB_CMC] = Landmark::new(260.0, 370.0);
        points[THUMB_MCP] = Landmark::new(240.0, 340.0);
        points[THUMB_IP] = Landmark::new(230.0, 320.0);
        points[THUMB_TIP] = Landmark::new(250.0, 335.0);

        // (mcp, pip, tip) columns for index, middle, ring, pinky.
        let columns = [
            (INDEX_MCP, INDEX_PIP, INDEX_TIP, 280.0),
            (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, 310.0),
            (RING_MCP, RING_PIP, RING_TIP, 340.0),
            (PINKY_MCP, PINKY_PIP, PINKY_TIP, 370.0),
        ];
        for (mcp, pip, tip, x) in columns {
            points[mcp] = Landmark::new(x, 300.0);
            points[pip] = Landmark::new(x, 260.0);
            points[tip] = Landmark::new(x, 290.0);
        }

        Self {
            points,
            handedness: None,
        }
    }

    /// Set each digit extended or curled.
    pub fn fingers(mut self, thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        if thumb {
            // Out past the IP joint, clearly above the knuckle.
            self.points[THUMB_TIP] = Landmark::new(160.0, 310.0);
        } else {
            self.points[THUMB_TIP] = Landmark::new(250.0, 335.0);
        }
        let columns = [
            (index, INDEX_TIP, 280.0),
            (middle, MIDDLE_TIP, 310.0),
            (ring, RING_TIP, 340.0),
            (pinky, PINKY_TIP, 370.0),
        ];
        for (extended, tip, x) in columns {
            let y = if extended { 200.0 } else { 290.0 };
            self.points[tip] = Landmark::new(x, y);
        }
        self
    }

    pub fn thumb_tip(mut self, x: f32, y: f32) -> Self {
        self.points[THUMB_TIP] = Landmark::new(x, y);
        self
    }

    pub fn index_tip(mut self, x: f32, y: f32) -> Self {
        self.points[INDEX_TIP] = Landmark::new(x, y);
        self
    }

    pub fn pinky_tip(mut self, x: f32, y: f32) -> Self {
        self.points[PINKY_TIP] = Landmark::new(x, y);
        self
    }

    pub fn middle_mcp(mut self, x: f32, y: f32) -> Self {
        self.points[MIDDLE_MCP] = Landmark::new(x, y);
        self
    }

    pub fn handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = Some(handedness);
        self
    }

    pub fn build(self) -> HandLandmarks {
        let hand = HandLandmarks::new(self.points);
        match self.handedness {
            Some(h) => hand.with_handedness(h),
            None => hand,
        }
    }
}

/// All five digits extended.
pub fn open_palm() -> HandLandmarks {
    HandBuilder::new().fingers(true, true, true, true, true).build()
}

/// All five digits curled.
pub fn fist() -> HandLandmarks {
    HandBuilder::new()
        .fingers(false, false, false, false, false)
        .build()
}

/// Index and middle extended; matches no rule in the cascade.
pub fn neutral_pose() -> HandLandmarks {
    HandBuilder::new()
        .fingers(false, true, true, false, false)
        .build()
}

/// Scroll pose: four fingers extended, thumb curled.
pub fn scroll_pose(middle_mcp_y: f32) -> HandLandmarks {
    HandBuilder::new()
        .fingers(false, true, true, true, true)
        .middle_mcp(310.0, middle_mcp_y)
        .build()
}
