//! Session loop
//!
//! One classification pass per received frame, strictly sequential:
//! receive, classify, dispatch, notify. No two passes ever run against
//! the same classifier, so none of the session state needs locking.

use crate::dispatch::Dispatcher;
use crate::observer::{GestureEvent, GestureObserver};
use crossbeam_channel::Receiver;
use handflow_core::{Gesture, GestureClassifier, LandmarkFrame};
use tracing::info;

/// A running gesture-control session.
pub struct Session {
    classifier: GestureClassifier,
    dispatcher: Dispatcher,
    observers: Vec<Box<dyn GestureObserver>>,
}

impl Session {
    /// Session from a classifier and dispatcher.
    pub fn new(classifier: GestureClassifier, dispatcher: Dispatcher) -> Self {
        Self {
            classifier,
            dispatcher,
            observers: Vec::new(),
        }
    }

    /// Register an observer for emitted labels.
    pub fn add_observer(&mut self, observer: Box<dyn GestureObserver>) {
        self.observers.push(observer);
    }

    /// The session's classifier state.
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// The session's dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process one frame; returns the emitted label, if any.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> Option<Gesture> {
        let gesture = self.classifier.classify(frame)?;

        self.dispatcher.dispatch(gesture, self.classifier.brightness());

        let event = GestureEvent {
            gesture,
            timestamp_ms: frame.timestamp.as_millis() as u64,
            brightness: self.classifier.brightness(),
            volume: self.classifier.volume(),
        };
        for observer in &mut self.observers {
            observer.on_gesture(&event);
        }

        Some(gesture)
    }

    /// Drain frames until the source disconnects.
    pub fn run(&mut self, frames: &Receiver<LandmarkFrame>) {
        for frame in frames.iter() {
            self.process_frame(&frame);
        }
        info!("landmark source disconnected, session ending");
    }
}
