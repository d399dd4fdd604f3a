//! Gesture label to command dispatch
//!
//! Maps each emitted label onto at most one [`MediaCommand`] and hands it
//! to the performer. Performer failures are logged and swallowed here so
//! an unavailable OS capability degrades to a no-op instead of stopping
//! the session.

use crate::action::{ActionPerformer, MediaCommand};
use handflow_core::Gesture;
use tracing::warn;

/// Maps gestures to commands and tracks the playback-state mirror.
pub struct Dispatcher {
    performer: Box<dyn ActionPerformer>,
    /// Seconds per relative seek.
    seek_step: f32,
    /// Volume delta per volume gesture, 0-100 scale.
    volume_step: f32,
    /// Playback-state mirror; the external player may be
    /// read-after-write inconsistent, so the toggle is guarded here.
    paused: bool,
}

impl Dispatcher {
    /// Dispatcher with default steps (10 second seeks, volume steps of 5).
    pub fn new(performer: Box<dyn ActionPerformer>) -> Self {
        Self::with_steps(performer, 10.0, 5.0)
    }

    /// Dispatcher with explicit seek and volume steps.
    pub fn with_steps(performer: Box<dyn ActionPerformer>, seek_step: f32, volume_step: f32) -> Self {
        Self {
            performer,
            seek_step,
            volume_step,
            paused: false,
        }
    }

    /// Whether the playback mirror currently reads paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The command a label would produce right now, if any.
    ///
    /// Mode-active labels produce nothing. `Play` and `Pause` only toggle
    /// when the playback mirror disagrees, so a held palm does not flap
    /// the player.
    pub fn command_for(&self, gesture: Gesture, brightness: u8) -> Option<MediaCommand> {
        match gesture {
            Gesture::Play if self.paused => Some(MediaCommand::TogglePlayPause),
            Gesture::Pause if !self.paused => Some(MediaCommand::TogglePlayPause),
            Gesture::Play | Gesture::Pause => None,
            Gesture::VolumeUp => Some(MediaCommand::AdjustVolume {
                delta: self.volume_step,
            }),
            Gesture::VolumeDown => Some(MediaCommand::AdjustVolume {
                delta: -self.volume_step,
            }),
            Gesture::SeekForward => Some(MediaCommand::Seek {
                seconds: self.seek_step,
                relative: true,
            }),
            Gesture::SeekBackward => Some(MediaCommand::Seek {
                seconds: -self.seek_step,
                relative: true,
            }),
            Gesture::PreviousTrack => Some(MediaCommand::Seek {
                seconds: 0.0,
                relative: false,
            }),
            Gesture::BrightnessUp | Gesture::BrightnessDown => {
                Some(MediaCommand::SetBrightness { level: brightness })
            }
            Gesture::BrightnessPinch | Gesture::BrightnessScroll => None,
        }
    }

    /// Dispatch one label; returns the command that was performed.
    pub fn dispatch(&mut self, gesture: Gesture, brightness: u8) -> Option<MediaCommand> {
        let command = self.command_for(gesture, brightness)?;

        match gesture {
            Gesture::Play => self.paused = false,
            Gesture::Pause => self.paused = true,
            _ => {}
        }

        if let Err(error) = self.performer.perform(command) {
            warn!(%error, ?command, "action performer failed, continuing");
        }
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ChannelPerformer;
    use crate::error::{ControlError, Result};
    use crossbeam_channel::unbounded;

    struct FailingPerformer;

    impl ActionPerformer for FailingPerformer {
        fn toggle_play_pause(&mut self) -> Result<()> {
            Err(ControlError::Performer("no player".into()))
        }
        fn seek(&mut self, _seconds: f32, _relative: bool) -> Result<()> {
            Err(ControlError::Performer("no player".into()))
        }
        fn adjust_volume(&mut self, _delta: f32) -> Result<()> {
            Err(ControlError::Performer("no audio endpoint".into()))
        }
        fn set_brightness(&mut self, _level: u8) -> Result<()> {
            Err(ControlError::Performer("no display".into()))
        }
    }

    #[test]
    fn every_actionable_label_maps_to_a_command() {
        let dispatcher = Dispatcher::new(Box::new(LogStub));
        let actionable = [
            Gesture::Pause,
            Gesture::VolumeUp,
            Gesture::VolumeDown,
            Gesture::SeekForward,
            Gesture::SeekBackward,
            Gesture::PreviousTrack,
            Gesture::BrightnessUp,
            Gesture::BrightnessDown,
        ];
        for gesture in actionable {
            assert!(
                dispatcher.command_for(gesture, 50).is_some(),
                "{gesture:?} produced no command"
            );
        }
        assert!(dispatcher.command_for(Gesture::BrightnessPinch, 50).is_none());
        assert!(dispatcher
            .command_for(Gesture::BrightnessScroll, 50)
            .is_none());
    }

    struct LogStub;
    impl ActionPerformer for LogStub {
        fn toggle_play_pause(&mut self) -> Result<()> {
            Ok(())
        }
        fn seek(&mut self, _s: f32, _r: bool) -> Result<()> {
            Ok(())
        }
        fn adjust_volume(&mut self, _d: f32) -> Result<()> {
            Ok(())
        }
        fn set_brightness(&mut self, _l: u8) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn play_pause_toggle_is_guarded_by_the_mirror() {
        let (tx, rx) = unbounded();
        let mut dispatcher = Dispatcher::new(Box::new(ChannelPerformer::new(tx)));

        // Starts playing: a Play label is a no-op.
        assert_eq!(dispatcher.dispatch(Gesture::Play, 50), None);

        assert_eq!(
            dispatcher.dispatch(Gesture::Pause, 50),
            Some(MediaCommand::TogglePlayPause)
        );
        assert!(dispatcher.is_paused());
        // Held pause: already paused, nothing sent.
        assert_eq!(dispatcher.dispatch(Gesture::Pause, 50), None);

        assert_eq!(
            dispatcher.dispatch(Gesture::Play, 50),
            Some(MediaCommand::TogglePlayPause)
        );
        assert!(!dispatcher.is_paused());

        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn brightness_labels_carry_the_mirror_level() {
        let (tx, rx) = unbounded();
        let mut dispatcher = Dispatcher::new(Box::new(ChannelPerformer::new(tx)));

        dispatcher.dispatch(Gesture::BrightnessUp, 65);
        assert_eq!(rx.recv().unwrap(), MediaCommand::SetBrightness { level: 65 });
    }

    #[test]
    fn performer_failures_are_swallowed() {
        let mut dispatcher = Dispatcher::new(Box::new(FailingPerformer));

        // Still reports the command it attempted.
        assert_eq!(
            dispatcher.dispatch(Gesture::VolumeUp, 50),
            Some(MediaCommand::AdjustVolume { delta: 5.0 })
        );
    }
}
