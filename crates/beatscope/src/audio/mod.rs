mod analyser;
mod decoder;
mod playback;
mod tap;

pub use analyser::Analyser;
pub use decoder::{decode_file, DecodedTrack};
pub use playback::{Playback, Shared};
pub use tap::PlaybackTap;
