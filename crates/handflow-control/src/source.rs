//! Landmark-frame sources
//!
//! The boundary to the external hand tracker. A source runs on its own
//! thread and delivers [`LandmarkFrame`]s over a bounded channel; the
//! session loop is the only consumer. How landmarks are produced is
//! entirely the tracker's business.

use crate::error::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use handflow_core::{HandLandmarks, Handedness, Landmark, LandmarkFrame};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// One hand as emitted by a tracker process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireHand {
    /// 21 points in the standard anatomical order.
    pub points: Vec<Landmark>,
    /// Tracker-reported handedness, if available.
    #[serde(default)]
    pub handedness: Option<Handedness>,
}

/// One frame as emitted by a tracker process, one JSON object per line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireFrame {
    /// Detected hands in detection order.
    #[serde(default)]
    pub hands: Vec<WireHand>,
    /// Monotonic timestamp in milliseconds, if the tracker provides one.
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
}

impl WireFrame {
    /// Convert to a domain frame. Hands without exactly 21 points are
    /// dropped (malformed tracker output is "no hand", not a failure);
    /// `fallback` supplies the timestamp when the tracker sent none.
    pub fn into_frame(self, fallback: Duration) -> LandmarkFrame {
        let hands = self
            .hands
            .into_iter()
            .filter_map(|wire| {
                let hand = HandLandmarks::from_slice(&wire.points)?;
                Some(match wire.handedness {
                    Some(handedness) => hand.with_handedness(handedness),
                    None => hand,
                })
            })
            .collect();
        let timestamp = self
            .timestamp_ms
            .map(Duration::from_millis)
            .unwrap_or(fallback);
        LandmarkFrame::new(hands, timestamp)
    }
}

/// Anything that can deliver landmark frames over a channel.
pub trait LandmarkSource: Send + 'static {
    /// Produce frames into `tx` until exhausted or disconnected.
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>) -> Result<()>;
}

/// Spawn a source on its own thread and return the receiving end.
pub fn spawn_source<S: LandmarkSource>(source: S) -> Result<Receiver<LandmarkFrame>> {
    let (tx, rx) = bounded(4);
    thread::Builder::new()
        .name("landmark-source".to_string())
        .spawn(move || {
            if let Err(error) = Box::new(source).run(tx) {
                warn!(%error, "landmark source stopped");
            }
        })?;
    Ok(rx)
}

/// Source reading one JSON frame per line from a file or stdin.
///
/// This is the transport from a real tracker process: the tracker writes
/// frames to its stdout, piped into us.
#[derive(Debug)]
pub struct JsonlSource {
    path: Option<PathBuf>,
}

impl JsonlSource {
    /// Read frames from a file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Read frames from stdin.
    pub fn from_stdin() -> Self {
        Self { path: None }
    }
}

impl LandmarkSource for JsonlSource {
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>) -> Result<()> {
        let reader: Box<dyn BufRead> = match &self.path {
            Some(path) => {
                info!(?path, "reading landmark frames");
                Box::new(BufReader::new(File::open(path)?))
            }
            None => Box::new(BufReader::new(io::stdin())),
        };

        let started = Instant::now();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<WireFrame>(&line) {
                Ok(wire) => {
                    let frame = wire.into_frame(started.elapsed());
                    if tx.send(frame).is_err() {
                        // Session ended first.
                        break;
                    }
                }
                Err(error) => warn!(%error, "skipping malformed landmark frame"),
            }
        }
        Ok(())
    }
}

/// Source replaying an in-memory frame sequence, optionally paced.
///
/// Used by the demo configuration and by tests; an interval of zero
/// replays as fast as the session consumes.
#[derive(Debug)]
pub struct ScriptedSource {
    frames: Vec<LandmarkFrame>,
    interval: Duration,
}

impl ScriptedSource {
    /// Replay `frames` with `interval` between sends.
    pub fn new(frames: Vec<LandmarkFrame>, interval: Duration) -> Self {
        Self { frames, interval }
    }
}

impl LandmarkSource for ScriptedSource {
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>) -> Result<()> {
        for frame in self.frames {
            if tx.send(frame).is_err() {
                break;
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
        Ok(())
    }
}
