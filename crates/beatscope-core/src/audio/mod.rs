mod beat;
mod features;
mod tap;

pub use beat::{BeatConfig, BeatDetector, BeatState};
pub use features::{FeatureExtractor, Features};
pub use tap::{AudioTap, SampleFrame};
