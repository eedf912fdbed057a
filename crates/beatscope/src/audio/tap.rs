//! Analyser tap over a live playback session.

use beatscope_core::AudioTap;
use std::sync::Arc;

use super::{Analyser, Playback, Shared};

pub struct PlaybackTap {
    playback: Option<Playback>,
    shared: Arc<Shared>,
    analyser: Analyser,
    window: Vec<f32>,
}

impl PlaybackTap {
    pub fn new(playback: Playback, fft_size: usize) -> Self {
        let shared = Arc::clone(playback.shared());
        Self::with_shared(Some(playback), shared, fft_size)
    }

    fn with_shared(playback: Option<Playback>, shared: Arc<Shared>, fft_size: usize) -> Self {
        Self {
            playback,
            shared,
            analyser: Analyser::new(fft_size),
            window: Vec::with_capacity(fft_size),
        }
    }
}

impl AudioTap for PlaybackTap {
    fn time_domain(&mut self, out: &mut [u8]) {
        self.shared.snapshot(&mut self.window);
        self.analyser.time_domain(&self.window, out);
    }

    fn frequency_domain(&mut self, out: &mut [u8]) {
        self.shared.snapshot(&mut self.window);
        self.analyser.frequency_domain(&self.window, out);
    }

    fn set_gain(&mut self, gain: f32) {
        self.shared.set_gain(gain);
    }

    fn disconnect(&mut self) {
        // Dropping the stream stops the device callback
        self.playback = None;
        self.analyser.reset();
    }
}
