//! Loudness-onset beat detection with a refractory hold.
//!
//! A beat fires when the current loudness clears a fixed floor, rises above the
//! previous tick's smoothed loudness, and no hold is in effect. Firing starts a
//! hold during which nothing can fire, so one sustained loud passage produces a
//! single beat instead of a burst.
//!
//! The comparison uses the smoothed value from *before* this tick's update.
//! Smoothing first would let a loud sample raise its own baseline and suppress
//! itself.

/// Fixed detection constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeatConfig {
    /// Loudness must exceed this to count as a beat
    pub min_threshold: f32,
    /// Ticks after a beat during which no new beat fires
    pub hold_frames: u32,
    /// Weight of the current sample in the smoothed loudness
    pub smoothing: f32,
}

impl Default for BeatConfig {
    fn default() -> Self {
        Self {
            min_threshold: 0.15,
            hold_frames: 30,
            smoothing: 0.9,
        }
    }
}

/// State carried from one tick to the next
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeatState {
    pub smoothed_loudness: f32,
    pub hold_frames_remaining: u32,
}

impl BeatState {
    /// Advance one tick. Returns whether a beat fired and the next state.
    pub fn step(self, loudness: f32, config: &BeatConfig) -> (bool, BeatState) {
        let mut next = self;

        let is_beat = loudness > config.min_threshold
            && loudness > self.smoothed_loudness
            && self.hold_frames_remaining == 0;
        if is_beat {
            next.hold_frames_remaining = config.hold_frames;
        }

        if next.hold_frames_remaining > 0 {
            next.hold_frames_remaining -= 1;
        }

        next.smoothed_loudness =
            loudness * config.smoothing + self.smoothed_loudness * (1.0 - config.smoothing);

        (is_beat, next)
    }
}

/// Stateful wrapper owned by the frame driver
#[derive(Clone, Debug, Default)]
pub struct BeatDetector {
    config: BeatConfig,
    state: BeatState,
}

impl BeatDetector {
    pub fn new() -> Self {
        Self::with_config(BeatConfig::default())
    }

    pub fn with_config(config: BeatConfig) -> Self {
        Self {
            config,
            state: BeatState::default(),
        }
    }

    /// Feed this tick's loudness; returns true on a beat
    pub fn update(&mut self, loudness: f32) -> bool {
        let (is_beat, next) = self.state.step(loudness, &self.config);
        self.state = next;
        is_beat
    }

    pub fn state(&self) -> BeatState {
        self.state
    }

    pub fn config(&self) -> &BeatConfig {
        &self.config
    }

    /// Forget history (new playback session)
    pub fn reset(&mut self) {
        self.state = BeatState::default();
    }
}
