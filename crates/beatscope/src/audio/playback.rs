//! Output stream playing a decoded track through a gain stage.
//!
//! The audio callback writes every sample it plays (after gain) into a shared
//! window so the analyser sees exactly what the listener hears.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, Stream, StreamConfig};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use super::DecodedTrack;
use crate::error::PlaybackError;

/// State shared between the audio callback and the render thread
pub struct Shared {
    window: Mutex<VecDeque<f32>>,
    window_len: usize,
    gain: AtomicU32,
    finished: AtomicBool,
}

impl Shared {
    pub fn new(window_len: usize, gain: f32) -> Self {
        Self {
            window: Mutex::new(VecDeque::from(vec![0.0; window_len])),
            window_len,
            gain: AtomicU32::new(gain.to_bits()),
            finished: AtomicBool::new(false),
        }
    }

    pub fn gain(&self) -> f32 {
        f32::from_bits(self.gain.load(Ordering::Relaxed))
    }

    pub fn set_gain(&self, gain: f32) {
        self.gain.store(gain.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }

    /// Copy the most recent samples, oldest first
    pub fn snapshot(&self, out: &mut Vec<f32>) {
        out.clear();
        if let Ok(window) = self.window.lock() {
            out.extend(window.iter().copied());
        }
    }

    fn push(&self, played: &[f32]) {
        // Skip the update rather than block or panic in the audio thread
        let Ok(mut window) = self.window.lock() else {
            return;
        };
        for &sample in played {
            if window.len() == self.window_len {
                window.pop_front();
            }
            window.push_back(sample);
        }
    }
}

/// Read head over a decoded track, resampling by simple stepping
pub struct Voice {
    track: DecodedTrack,
    cursor: f64,
    step: f64,
    scratch: Vec<f32>,
}

impl Voice {
    pub fn new(track: DecodedTrack, output_rate: u32) -> Self {
        let step = track.sample_rate as f64 / output_rate.max(1) as f64;
        Self {
            track,
            cursor: 0.0,
            step,
            scratch: Vec::new(),
        }
    }

    /// Fill `out` (interleaved, `channels` wide) and record the played mono signal.
    /// Returns false once the track is exhausted.
    pub fn render<T>(&mut self, out: &mut [T], channels: usize, shared: &Shared) -> bool
    where
        T: SizedSample + FromSample<f32>,
    {
        let gain = shared.gain();
        let samples = &self.track.samples;
        self.scratch.clear();

        for frame in out.chunks_mut(channels.max(1)) {
            let idx = self.cursor as usize;
            let value = match samples.get(idx) {
                Some(&a) => {
                    let b = samples.get(idx + 1).copied().unwrap_or(a);
                    let t = (self.cursor - idx as f64) as f32;
                    (a + (b - a) * t) * gain
                }
                None => 0.0,
            };
            for out_sample in frame.iter_mut() {
                *out_sample = T::from_sample(value);
            }
            self.scratch.push(value);
            self.cursor += self.step;
        }

        shared.push(&self.scratch);
        (self.cursor as usize) < samples.len()
    }
}

/// A running output stream. Dropping it stops playback.
pub struct Playback {
    _stream: Stream,
    shared: Arc<Shared>,
}

impl Playback {
    pub fn start(track: DecodedTrack, window_len: usize, gain: f32) -> Result<Self, PlaybackError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(PlaybackError::NoOutputDevice)?;
        let supported = device.default_output_config()?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();

        log::info!(
            "Output: {} ({} Hz, {} ch, {:?})",
            device.name().unwrap_or_else(|_| "unknown".to_string()),
            config.sample_rate.0,
            config.channels,
            sample_format
        );

        let shared = Arc::new(Shared::new(window_len, gain));
        let voice = Voice::new(track, config.sample_rate.0);

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(&device, &config, voice, Arc::clone(&shared))?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config, voice, Arc::clone(&shared))?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config, voice, Arc::clone(&shared))?,
            other => return Err(PlaybackError::UnsupportedSampleFormat(other)),
        };
        stream.play()?;

        Ok(Self {
            _stream: stream,
            shared,
        })
    }

    pub fn shared(&self) -> &Arc<Shared> {
        &self.shared
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut voice: Voice,
    shared: Arc<Shared>,
) -> Result<Stream, PlaybackError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let err_fn = |err| log::error!("Audio stream error: {}", err);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            if !voice.render(data, channels, &shared) {
                shared.finished.store(true, Ordering::Relaxed);
            }
        },
        err_fn,
        None,
    )?;
    Ok(stream)
}
