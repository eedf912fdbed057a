//! Byte-valued analyser buffers from raw samples.
//!
//! Time-domain bytes are `128 + 128 * sample`. Frequency bytes come from a
//! Blackman-windowed FFT whose magnitudes are smoothed over time, converted to
//! decibels and mapped from [`MIN_DECIBELS`, `MAX_DECIBELS`] onto 0..=255.

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

pub const MIN_DECIBELS: f32 = -100.0;
pub const MAX_DECIBELS: f32 = -30.0;

/// Weight of the previous frame in the spectrum smoothing
const SMOOTHING: f32 = 0.8;

pub struct Analyser {
    fft_size: usize,
    fft: Arc<dyn Fft<f32>>,
    fft_buffer: Vec<Complex<f32>>,
    window: Vec<f32>,
    smoothed: Vec<f32>,
}

impl Analyser {
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);

        // Blackman window
        let n = fft_size as f32;
        let window = (0..fft_size)
            .map(|i| {
                let x = std::f32::consts::TAU * i as f32 / n;
                0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos()
            })
            .collect();

        Self {
            fft_size,
            fft,
            fft_buffer: vec![Complex::new(0.0, 0.0); fft_size],
            window,
            smoothed: vec![0.0; fft_size / 2],
        }
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Forget spectrum history
    pub fn reset(&mut self) {
        self.smoothed.iter_mut().for_each(|v| *v = 0.0);
    }

    /// Write the oldest `out.len()` samples of the analysis window as bytes.
    ///
    /// `window` holds the most recent samples, oldest first; a short window is
    /// treated as zero-padded at the front.
    pub fn time_domain(&self, window: &[f32], out: &mut [u8]) {
        let padding = self.fft_size.saturating_sub(window.len());
        let start = window.len().saturating_sub(self.fft_size);
        for (i, byte) in out.iter_mut().enumerate() {
            let sample = if i < padding {
                0.0
            } else {
                window.get(start + i - padding).copied().unwrap_or(0.0)
            };
            *byte = (128.0 * (sample + 1.0)).clamp(0.0, 255.0) as u8;
        }
    }

    /// Write smoothed spectral magnitudes as bytes, one per bin
    pub fn frequency_domain(&mut self, window: &[f32], out: &mut [u8]) {
        let padding = self.fft_size.saturating_sub(window.len());
        let start = window.len().saturating_sub(self.fft_size);
        for i in 0..self.fft_size {
            let sample = if i < padding {
                0.0
            } else {
                window[start + i - padding]
            };
            self.fft_buffer[i] = Complex::new(sample * self.window[i], 0.0);
        }

        self.fft.process(&mut self.fft_buffer);

        let scale = 1.0 / self.fft_size as f32;
        for (smoothed, bin) in self.smoothed.iter_mut().zip(&self.fft_buffer) {
            let magnitude = bin.norm() * scale;
            *smoothed = SMOOTHING * *smoothed + (1.0 - SMOOTHING) * magnitude;
        }

        let range = MAX_DECIBELS - MIN_DECIBELS;
        for (byte, &magnitude) in out.iter_mut().zip(&self.smoothed) {
            let db = 20.0 * magnitude.max(1e-10).log10();
            let scaled = 255.0 * (db - MIN_DECIBELS) / range;
            *byte = scaled.clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence() {
        let mut analyser = Analyser::new(256);
        let window = vec![0.0; 256];
        let mut time = vec![0u8; 128];
        let mut freq = vec![255u8; 128];
        analyser.time_domain(&window, &mut time);
        analyser.frequency_domain(&window, &mut freq);
        assert!(time.iter().all(|&b| b == 128));
        assert!(freq.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_time_domain_clamps() {
        let analyser = Analyser::new(8);
        let window = [1.0, -1.0, 0.5, -0.5, 2.0, -2.0, 0.0, 0.0];
        let mut out = [0u8; 8];
        analyser.time_domain(&window, &mut out);
        assert_eq!(out, [255, 0, 192, 64, 255, 0, 128, 128]);
    }

    #[test]
    fn test_short_window_is_padded() {
        let analyser = Analyser::new(8);
        let mut out = [0u8; 8];
        analyser.time_domain(&[1.0, 1.0], &mut out);
        assert_eq!(out, [128, 128, 128, 128, 128, 128, 255, 255]);
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let mut analyser = Analyser::new(256);
        // Quiet tone centered on bin 16 of a 256-point transform
        let window: Vec<f32> = (0..256)
            .map(|i| 0.01 * (std::f32::consts::TAU * 16.0 * i as f32 / 256.0).sin())
            .collect();
        let mut freq = vec![0u8; 128];
        for _ in 0..30 {
            analyser.frequency_domain(&window, &mut freq);
        }
        let peak = freq
            .iter()
            .enumerate()
            .max_by_key(|&(_, &b)| b)
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 16);
        assert!(freq[16] > 100 && freq[16] < 255);
        assert!(freq[60] < freq[16]);
    }

    #[test]
    fn test_smoothing_decays_after_signal_stops() {
        let mut analyser = Analyser::new(256);
        let tone: Vec<f32> = (0..256)
            .map(|i| 0.01 * (std::f32::consts::TAU * 8.0 * i as f32 / 256.0).sin())
            .collect();
        let mut freq = vec![0u8; 128];
        for _ in 0..30 {
            analyser.frequency_domain(&tone, &mut freq);
        }
        let loud = freq[8];

        analyser.frequency_domain(&[0.0; 256], &mut freq);
        assert!(freq[8] < loud);
        assert!(freq[8] > 0);
    }
}
