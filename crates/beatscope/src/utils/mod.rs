mod audio_info;
mod config;

pub use audio_info::log_audio_info;
pub use config::Config;
