//! Analyser tap contract and the per-frame sample buffers it fills.

use std::num::NonZeroUsize;

/// Source of analyser buffers for the frame driver.
///
/// Both buffers are refreshed on every call to reflect the most recently
/// played audio. Implementations must not block.
pub trait AudioTap {
    /// Fill `out` with time-domain bytes centered at 128.
    fn time_domain(&mut self, out: &mut [u8]);

    /// Fill `out` with spectral magnitudes (0 = silence, 255 = max).
    fn frequency_domain(&mut self, out: &mut [u8]);

    /// Set output gain, 0.0..=1.0
    fn set_gain(&mut self, gain: f32);

    /// Release the underlying audio graph. Called once when a session ends.
    fn disconnect(&mut self);
}

/// The pair of analyser buffers for one tick.
///
/// Length is fixed for the session and never zero.
#[derive(Clone, Debug)]
pub struct SampleFrame {
    time_domain: Vec<u8>,
    freq_domain: Vec<u8>,
}

impl SampleFrame {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            time_domain: vec![128; len.get()],
            freq_domain: vec![0; len.get()],
        }
    }

    pub fn len(&self) -> usize {
        self.time_domain.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn time_domain(&self) -> &[u8] {
        &self.time_domain
    }

    pub fn freq_domain(&self) -> &[u8] {
        &self.freq_domain
    }

    /// Refill both buffers in place from the tap
    pub fn refresh(&mut self, tap: &mut dyn AudioTap) {
        tap.time_domain(&mut self.time_domain);
        tap.frequency_domain(&mut self.freq_domain);
    }

    /// Builds a frame from existing buffers. Returns `None` if the buffers are
    /// empty or their lengths differ.
    pub fn from_buffers(time_domain: Vec<u8>, freq_domain: Vec<u8>) -> Option<Self> {
        if time_domain.is_empty() || time_domain.len() != freq_domain.len() {
            return None;
        }
        Some(Self {
            time_domain,
            freq_domain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_silent() {
        let frame = SampleFrame::new(NonZeroUsize::new(128).unwrap());
        assert_eq!(frame.len(), 128);
        assert!(frame.time_domain().iter().all(|&s| s == 128));
        assert!(frame.freq_domain().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_from_buffers_rejects_mismatched_lengths() {
        assert!(SampleFrame::from_buffers(vec![128; 4], vec![0; 3]).is_none());
        assert!(SampleFrame::from_buffers(Vec::new(), Vec::new()).is_none());
        assert!(SampleFrame::from_buffers(vec![128; 4], vec![0; 4]).is_some());
    }
}
