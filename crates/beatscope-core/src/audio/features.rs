//! Loudness extraction from analyser buffers.

use super::SampleFrame;

/// Midpoint of unsigned 8-bit time-domain samples
const MIDPOINT: f32 = 128.0;

/// Per-tick features handed to renderers. Borrows the frame buffers.
#[derive(Clone, Copy, Debug)]
pub struct Features<'a> {
    /// RMS loudness of the time-domain buffer (0 = silence)
    pub loudness: f32,
    pub time_domain: &'a [u8],
    pub freq_domain: &'a [u8],
}

/// Stateless loudness extractor.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Root-mean-square of the normalized time-domain samples.
    pub fn loudness(samples: &[u8]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = samples
            .iter()
            .map(|&s| {
                let v = (s as f32 - MIDPOINT) / MIDPOINT;
                v * v
            })
            .sum();
        (sum / samples.len() as f32).sqrt()
    }

    pub fn extract<'a>(&self, frame: &'a SampleFrame) -> Features<'a> {
        Features {
            loudness: Self::loudness(frame.time_domain()),
            time_domain: frame.time_domain(),
            freq_domain: frame.freq_domain(),
        }
    }
}
