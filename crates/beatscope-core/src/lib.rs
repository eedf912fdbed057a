//! Audio-reactive visualization core.
//!
//! Turns per-frame analyser buffers into loudness, beats and scene state, and
//! paints one of three interchangeable styles onto a [`Surface`]. Everything in
//! here runs on the caller's thread and never blocks.

use std::num::NonZeroUsize;

pub mod audio;
pub mod draw;
pub mod driver;
pub mod interaction;
pub mod renderer;
pub mod scene;

pub use audio::{AudioTap, BeatConfig, BeatDetector, BeatState, FeatureExtractor, Features, SampleFrame};
pub use draw::{DrawCommand, DrawList, Hsl, Point, Surface};
pub use driver::{FrameDriver, TickReport, TickRequest};
pub use interaction::{DragState, InteractionController, InteractionOutcome, PointerEvent};
pub use renderer::{DrawContext, Visualization};
pub use scene::{SceneState, Style};

/// Analyser transform size used by the app; yields 128 bins per buffer.
pub const FFT_SIZE: usize = 256;

/// Number of samples in each analyser buffer.
pub const NUM_BINS: NonZeroUsize = match NonZeroUsize::new(FFT_SIZE / 2) {
    Some(n) => n,
    None => panic!("FFT_SIZE must be at least 2"),
};
