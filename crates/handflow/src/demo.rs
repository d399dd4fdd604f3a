//! Scripted demo sequence
//!
//! A canned landmark script exercising the main gestures, so the binary
//! can run end to end without a tracker attached.

use handflow_core::landmark::{
    HandLandmarks, Landmark, LandmarkFrame, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP,
    RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};
use std::time::Duration;

const FRAME_MS: u64 = 33;

fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> HandLandmarks {
    let mut points = [Landmark::default(); LANDMARK_COUNT];

    points[WRIST] = Landmark::new(320.0, 400.0);
    points[THUMB_CMC] = Landmark::new(260.0, 370.0);
    points[THUMB_MCP] = Landmark::new(240.0, 340.0);
    points[THUMB_IP] = Landmark::new(230.0, 320.0);
    points[THUMB_TIP] = if thumb {
        Landmark::new(160.0, 310.0)
    } else {
        Landmark::new(250.0, 335.0)
    };

    let columns = [
        (index, INDEX_MCP, INDEX_PIP, INDEX_TIP, 280.0),
        (middle, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, 310.0),
        (ring, RING_MCP, RING_PIP, RING_TIP, 340.0),
        (pinky, PINKY_MCP, PINKY_PIP, PINKY_TIP, 370.0),
    ];
    for (extended, mcp, pip, tip, x) in columns {
        points[mcp] = Landmark::new(x, 300.0);
        points[pip] = Landmark::new(x, 260.0);
        points[tip] = Landmark::new(x, if extended { 200.0 } else { 290.0 });
    }

    HandLandmarks::new(points)
}

fn shifted(base: &HandLandmarks, dx: f32) -> HandLandmarks {
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    for i in 0..LANDMARK_COUNT {
        let p = base.point(i);
        points[i] = Landmark {
            x: p.x + dx,
            y: p.y,
            z: p.z,
        };
    }
    HandLandmarks::new(points)
}

/// The demo script: play, pause, a volume hold, and a forward swipe, with
/// gaps between poses.
pub fn demo_frames() -> Vec<LandmarkFrame> {
    let mut frames = Vec::new();
    let mut at = 0u64;
    let mut push = |frames: &mut Vec<LandmarkFrame>, hands: Vec<HandLandmarks>| {
        frames.push(LandmarkFrame::new(hands, Duration::from_millis(at)));
        at += FRAME_MS;
    };

    let open_palm = hand(true, true, true, true, true);
    let fist = hand(false, false, false, false, false);
    let three_fingers = hand(false, true, true, true, false);

    // Open palm: play.
    for _ in 0..10 {
        push(&mut frames, vec![open_palm.clone()]);
    }
    for _ in 0..5 {
        push(&mut frames, vec![]);
    }

    // Fist: pause. Held long enough for the transport cooldown opened by
    // the play above to expire.
    for _ in 0..20 {
        push(&mut frames, vec![fist.clone()]);
    }
    for _ in 0..5 {
        push(&mut frames, vec![]);
    }

    // Three fingers: volume up, repeating.
    for _ in 0..15 {
        push(&mut frames, vec![three_fingers.clone()]);
    }
    for _ in 0..5 {
        push(&mut frames, vec![]);
    }

    // Fast rightward motion: seek forward.
    let swiper = hand(false, true, true, false, false);
    for step in 0..6 {
        push(&mut frames, vec![shifted(&swiper, 35.0 * step as f32)]);
    }
    push(&mut frames, vec![]);

    frames
}
