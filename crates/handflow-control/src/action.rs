//! Media commands and the action-performer boundary
//!
//! The performer is the edge of the system: behind it sit OS input
//! injection, an audio endpoint API and a brightness API, any of which may
//! be unavailable. Failures are returned to the dispatcher, which logs and
//! continues; they never reach the classifier.

use crate::error::{ControlError, Result};
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A concrete control command derived from a gesture label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MediaCommand {
    /// Toggle between playing and paused.
    TogglePlayPause,
    /// Seek by or to `seconds`, depending on `relative`.
    Seek { seconds: f32, relative: bool },
    /// Adjust volume by a signed delta on a 0-100 scale.
    AdjustVolume { delta: f32 },
    /// Set the brightness level, 0-100.
    SetBrightness { level: u8 },
}

/// Abstract operations exposed by the host's playback/volume/brightness
/// capabilities.
pub trait ActionPerformer: Send {
    fn toggle_play_pause(&mut self) -> Result<()>;
    fn seek(&mut self, seconds: f32, relative: bool) -> Result<()>;
    fn adjust_volume(&mut self, delta: f32) -> Result<()>;
    fn set_brightness(&mut self, level: u8) -> Result<()>;

    /// Route a command to the matching operation.
    fn perform(&mut self, command: MediaCommand) -> Result<()> {
        match command {
            MediaCommand::TogglePlayPause => self.toggle_play_pause(),
            MediaCommand::Seek { seconds, relative } => self.seek(seconds, relative),
            MediaCommand::AdjustVolume { delta } => self.adjust_volume(delta),
            MediaCommand::SetBrightness { level } => self.set_brightness(level),
        }
    }
}

/// Performer that only logs; useful without any OS capabilities attached.
#[derive(Debug, Default)]
pub struct LogPerformer;

impl ActionPerformer for LogPerformer {
    fn toggle_play_pause(&mut self) -> Result<()> {
        info!("toggle play/pause");
        Ok(())
    }

    fn seek(&mut self, seconds: f32, relative: bool) -> Result<()> {
        info!(seconds, relative, "seek");
        Ok(())
    }

    fn adjust_volume(&mut self, delta: f32) -> Result<()> {
        info!(delta, "adjust volume");
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<()> {
        info!(level, "set brightness");
        Ok(())
    }
}

/// Performer that forwards commands over a channel to a host player loop.
#[derive(Debug, Clone)]
pub struct ChannelPerformer {
    tx: Sender<MediaCommand>,
}

impl ChannelPerformer {
    /// Performer sending into `tx`.
    pub fn new(tx: Sender<MediaCommand>) -> Self {
        Self { tx }
    }

    fn send(&self, command: MediaCommand) -> Result<()> {
        self.tx
            .send(command)
            .map_err(|e| ControlError::ChannelClosed(e.to_string()))
    }
}

impl ActionPerformer for ChannelPerformer {
    fn toggle_play_pause(&mut self) -> Result<()> {
        self.send(MediaCommand::TogglePlayPause)
    }

    fn seek(&mut self, seconds: f32, relative: bool) -> Result<()> {
        self.send(MediaCommand::Seek { seconds, relative })
    }

    fn adjust_volume(&mut self, delta: f32) -> Result<()> {
        self.send(MediaCommand::AdjustVolume { delta })
    }

    fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.send(MediaCommand::SetBrightness { level })
    }
}
