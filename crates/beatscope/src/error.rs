//! Error types for decoding and playback.

use std::path::PathBuf;

use thiserror::Error;

/// Decoding a media file failed; the track cannot be played
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to open audio file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(#[from] symphonia::core::errors::Error),

    #[error("No audio track found")]
    NoAudioTrack,

    #[error("Unknown sample rate")]
    UnknownSampleRate,

    #[error("File decoded to zero samples")]
    Empty,
}

/// Opening the output device failed
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("No output device available")]
    NoOutputDevice,

    #[error("Failed to get output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),

    #[error("Failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("Unsupported output sample format: {0:?}")]
    UnsupportedSampleFormat(cpal::SampleFormat),
}
