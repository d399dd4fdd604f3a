//! Gesture classification
//!
//! The classifier is a strict priority cascade evaluated top to bottom,
//! first match wins, so at most one gesture fires per frame:
//!
//! 1. Horizontal swipe over the trajectory history (seek)
//! 2. Brightness air-scroll (rate-of-change controller while the scroll
//!    pose is held)
//! 3. Pinch-distance brightness (thumb-index distance with the remaining
//!    fingers curled)
//! 4. Directional thumb hold (volume)
//! 5. Static pose table
//!
//! The cascade is an ordered list of rule evaluators; each rule inspects
//! the finger state and landmarks and either emits a label, holds (pose
//! recognized but rate limited), or passes to the next rule.
//!
//! All session state lives on [`GestureClassifier`]: one instance per
//! session, mutated once per frame, never shared between sessions.
//! Timestamps are monotonic readings carried by the frame, so tests drive
//! a deterministic clock. No input, including a degenerate landmark set,
//! can make classification panic or fail; "nothing recognized" is `None`.

use crate::config::ClassifierConfig;
use crate::cooldown::CooldownBank;
use crate::finger::FingerState;
use crate::gesture::{Gesture, GestureCategory};
use crate::history::TrackHistory;
use crate::landmark::{
    HandLandmarks, LandmarkFrame, INDEX_TIP, MIDDLE_MCP, PINKY_MCP, PINKY_TIP, THUMB_MCP,
    THUMB_TIP,
};
use std::time::Duration;

/// Outcome of one rule for one hand.
enum Verdict {
    /// Emit this label for the frame.
    Emit(Gesture),
    /// Pose recognized but suppressed by its rate limiter. Stops the
    /// cascade for this hand without emitting, and keeps the last emitted
    /// gesture intact.
    Hold,
}

type Rule = fn(
    &mut GestureClassifier,
    &HandLandmarks,
    &FingerState,
    bool,
    Duration,
) -> Option<Verdict>;

/// Per-session gesture classifier state.
pub struct GestureClassifier {
    config: ClassifierConfig,
    cooldowns: CooldownBank,
    history: TrackHistory,
    scroll_baseline: Option<f32>,
    last_gesture: Option<Gesture>,
    brightness: u8,
    volume: u8,
}

impl GestureClassifier {
    /// Priority order of the cascade. First match wins.
    const RULES: [Rule; 5] = [
        Self::rule_swipe,
        Self::rule_air_scroll,
        Self::rule_pinch,
        Self::rule_thumb_hold,
        Self::rule_static,
    ];

    /// Classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        let history = TrackHistory::new(config.history_capacity);
        let brightness = config.initial_brightness.min(100);
        let volume = config.initial_volume.min(100);
        Self {
            config,
            cooldowns: CooldownBank::new(),
            history,
            scroll_baseline: None,
            last_gesture: None,
            brightness,
            volume,
        }
    }

    /// Classifier with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Classify one frame, mutating session state.
    ///
    /// Hands are evaluated in detection order; the first hand that emits a
    /// label wins. No hand and no recognized pose both yield `None`.
    pub fn classify(&mut self, frame: &LandmarkFrame) -> Option<Gesture> {
        let now = frame.timestamp;

        if !frame.has_hands() {
            // A gap resets edge-triggering and motion tracking, so
            // re-presenting the same pose later fires again.
            self.last_gesture = None;
            self.history.clear();
            self.scroll_baseline = None;
            return None;
        }

        let mut held = false;
        let mut emitted = None;
        for (index, hand) in frame.hands.iter().take(2).enumerate() {
            match self.classify_hand(hand, index == 0, now) {
                Some(Verdict::Emit(gesture)) => {
                    emitted = Some(gesture);
                    break;
                }
                Some(Verdict::Hold) => held = true,
                None => {}
            }
        }

        match emitted {
            Some(gesture) => {
                tracing::trace!(gesture = gesture.name(), "gesture emitted");
                self.last_gesture = Some(gesture);
                Some(gesture)
            }
            None => {
                if !held {
                    self.last_gesture = None;
                }
                None
            }
        }
    }

    /// Current brightness mirror, 0-100.
    ///
    /// The external brightness API may be read-after-write inconsistent,
    /// so the classifier keeps the authoritative level.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current volume mirror, 0-100.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// The most recently emitted gesture, `None` after a gap.
    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }

    /// The active configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn classify_hand(
        &mut self,
        hand: &HandLandmarks,
        first_hand: bool,
        now: Duration,
    ) -> Option<Verdict> {
        let fingers = FingerState::detect(hand);

        // The trajectory history tracks the first detected hand's index
        // tip; a second hand never feeds it.
        if first_hand {
            self.history.push(hand.point(INDEX_TIP).x, now);
        }

        for rule in Self::RULES {
            if let Some(verdict) = rule(self, hand, &fingers, first_hand, now) {
                return Some(verdict);
            }
        }
        None
    }

    // ── Rule 1: horizontal swipe ────────────────────────────────────────

    fn rule_swipe(
        &mut self,
        _hand: &HandLandmarks,
        _fingers: &FingerState,
        first_hand: bool,
        now: Duration,
    ) -> Option<Verdict> {
        if !first_hand {
            return None;
        }

        let dx = self.history.swipe(
            self.config.swipe_min_samples,
            self.config.swipe_window(),
            self.config.swipe_min_dx,
        )?;

        let cooldown = self.config.cooldown(GestureCategory::Seek);
        if !self.cooldowns.try_fire(GestureCategory::Seek, cooldown, now) {
            // Suppressed swipes keep falling through; motion is not a pose.
            return None;
        }

        // Consume the motion so one swipe cannot fire twice.
        self.history.clear();

        Some(Verdict::Emit(if dx > 0.0 {
            Gesture::SeekForward
        } else {
            Gesture::SeekBackward
        }))
    }

    // ── Rule 2: brightness air-scroll ───────────────────────────────────

    fn rule_air_scroll(
        &mut self,
        hand: &HandLandmarks,
        fingers: &FingerState,
        first_hand: bool,
        _now: Duration,
    ) -> Option<Verdict> {
        if !first_hand {
            return None;
        }

        if !fingers.matches([false, true, true, true, true]) {
            // Leaving the pose drops the reference point.
            self.scroll_baseline = None;
            return None;
        }

        // Middle-finger knuckle is a stable tracking point for whole-hand
        // vertical motion.
        let y = hand.point(MIDDLE_MCP).y;
        let baseline = match self.scroll_baseline {
            Some(baseline) => baseline,
            None => {
                self.scroll_baseline = Some(y);
                return Some(Verdict::Emit(Gesture::BrightnessScroll));
            }
        };

        let delta = y - baseline;
        let threshold = self.config.scroll_threshold;

        // Rate-of-change controller: re-baseline after every step so a
        // sustained motion keeps firing, with no cooldown.
        if delta <= -threshold {
            self.brightness = step_up(self.brightness, self.config.level_step);
            self.scroll_baseline = Some(y);
            Some(Verdict::Emit(Gesture::BrightnessUp))
        } else if delta >= threshold {
            self.brightness = step_down(self.brightness, self.config.level_step);
            self.scroll_baseline = Some(y);
            Some(Verdict::Emit(Gesture::BrightnessDown))
        } else {
            Some(Verdict::Emit(Gesture::BrightnessScroll))
        }
    }

    // ── Rule 3: pinch-distance brightness ───────────────────────────────

    fn rule_pinch(
        &mut self,
        hand: &HandLandmarks,
        fingers: &FingerState,
        _first_hand: bool,
        now: Duration,
    ) -> Option<Verdict> {
        // Thumb and index extended, remaining three curled. Requiring the
        // extended pair keeps a closed fist out of the pinch rule.
        if !(fingers.thumb && fingers.index && !fingers.middle && !fingers.ring && !fingers.pinky)
        {
            return None;
        }

        let distance = hand.pinch_distance();
        if distance > self.config.pinch_disengage {
            // Too wide to be a pinch; the static table may still match an
            // L-shape.
            return None;
        }

        let category = GestureCategory::PinchBrightness;
        let rate = self.config.cooldown(category);

        if distance < self.config.pinch_low {
            if self.cooldowns.try_fire(category, rate, now) {
                self.brightness = step_down(self.brightness, self.config.level_step);
                Some(Verdict::Emit(Gesture::BrightnessDown))
            } else {
                Some(Verdict::Emit(Gesture::BrightnessPinch))
            }
        } else if distance > self.config.pinch_high {
            if self.cooldowns.try_fire(category, rate, now) {
                self.brightness = step_up(self.brightness, self.config.level_step);
                Some(Verdict::Emit(Gesture::BrightnessUp))
            } else {
                Some(Verdict::Emit(Gesture::BrightnessPinch))
            }
        } else {
            // Dead zone: mode stays active, level unchanged.
            Some(Verdict::Emit(Gesture::BrightnessPinch))
        }
    }

    // ── Rule 4: directional thumb hold (volume) ─────────────────────────

    fn rule_thumb_hold(
        &mut self,
        hand: &HandLandmarks,
        fingers: &FingerState,
        _first_hand: bool,
        now: Duration,
    ) -> Option<Verdict> {
        if fingers.index || fingers.middle || fingers.ring || fingers.pinky {
            return None;
        }

        // Reference joint is the thumb's own knuckle: a tucked fist keeps
        // the tip level with it, a deliberate thumbs-up/down does not.
        let rise = hand.point(THUMB_MCP).y - hand.point(THUMB_TIP).y;
        if rise.abs() <= self.config.thumb_margin {
            // Not a hold; the static table decides (usually Pause).
            return None;
        }

        let category = GestureCategory::Volume;
        if !self
            .cooldowns
            .try_fire(category, self.config.cooldown(category), now)
        {
            return Some(Verdict::Hold);
        }

        if rise > 0.0 {
            self.volume = step_up(self.volume, self.config.level_step);
            Some(Verdict::Emit(Gesture::VolumeUp))
        } else {
            self.volume = step_down(self.volume, self.config.level_step);
            Some(Verdict::Emit(Gesture::VolumeDown))
        }
    }

    // ── Rule 5: static pose table ───────────────────────────────────────

    fn rule_static(
        &mut self,
        hand: &HandLandmarks,
        fingers: &FingerState,
        _first_hand: bool,
        now: Duration,
    ) -> Option<Verdict> {
        let verdict = match fingers.as_array() {
            [true, true, true, true, true] => {
                self.discrete(GestureCategory::Transport, Gesture::Play, now)
            }
            [false, false, false, false, false] => {
                self.discrete(GestureCategory::Transport, Gesture::Pause, now)
            }
            [false, true, true, true, false] => self.continuous_volume(Gesture::VolumeUp, now),
            [false, true, false, false, false] => self.continuous_volume(Gesture::VolumeDown, now),
            [false, false, false, false, true] => {
                // Pinky points the seek direction: tip past the knuckle
                // toward +x seeks forward, the mirror seeks backward.
                let gesture = if hand.point(PINKY_TIP).x >= hand.point(PINKY_MCP).x {
                    Gesture::SeekForward
                } else {
                    Gesture::SeekBackward
                };
                self.discrete(GestureCategory::Seek, gesture, now)
            }
            [true, true, false, false, false] => {
                self.discrete(GestureCategory::Track, Gesture::PreviousTrack, now)
            }
            [false, true, false, false, true] => {
                self.discrete(GestureCategory::Seek, Gesture::SeekForward, now)
            }
            _ => return None,
        };
        Some(verdict)
    }

    fn discrete(&mut self, category: GestureCategory, gesture: Gesture, now: Duration) -> Verdict {
        if self
            .cooldowns
            .try_fire(category, self.config.cooldown(category), now)
        {
            Verdict::Emit(gesture)
        } else {
            Verdict::Hold
        }
    }

    fn continuous_volume(&mut self, gesture: Gesture, now: Duration) -> Verdict {
        let category = GestureCategory::Volume;
        if !self
            .cooldowns
            .try_fire(category, self.config.cooldown(category), now)
        {
            return Verdict::Hold;
        }
        self.volume = match gesture {
            Gesture::VolumeDown => step_down(self.volume, self.config.level_step),
            _ => step_up(self.volume, self.config.level_step),
        };
        Verdict::Emit(gesture)
    }
}

fn step_up(level: u8, step: u8) -> u8 {
    level.saturating_add(step).min(100)
}

fn step_down(level: u8, step: u8) -> u8 {
    level.saturating_sub(step)
}
