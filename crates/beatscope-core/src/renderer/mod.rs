pub mod bars;
pub mod circles;
pub mod waveform;

use crate::audio::Features;
use crate::draw::{Point, Surface};
use crate::scene::Style;

pub use bars::Bars;
pub use circles::Circles;
pub use waveform::Waveform;

/// Everything a style needs to paint one frame
#[derive(Clone, Copy, Debug)]
pub struct DrawContext<'a> {
    pub features: Features<'a>,
    pub is_beat: bool,
    /// Surface center plus the current pan offset
    pub center: Point,
    /// Shared hue phase in degrees
    pub hue: f32,
    /// Seconds since the app started, drives continuous rotation
    pub elapsed_secs: f32,
}

/// Trait that all visualizations must implement.
///
/// Drawing is a pure function of the context: no state survives between
/// frames, so switching styles takes effect on the very next frame.
pub trait Visualization {
    fn draw(&self, ctx: &DrawContext, surface: &mut dyn Surface);
}

/// Pick the renderer for a style
pub fn for_style(style: Style) -> &'static dyn Visualization {
    match style {
        Style::Circles => &Circles,
        Style::Bars => &Bars,
        Style::Waveform => &Waveform,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::audio::{FeatureExtractor, SampleFrame};
    use crate::draw::DrawList;

    /// Frame whose time-domain samples sit at a constant distance from the midpoint
    pub fn frame_with_amplitude(amplitude: u8) -> SampleFrame {
        let time: Vec<u8> = (0..128)
            .map(|i| if i % 2 == 0 { 128 + amplitude } else { 128 - amplitude })
            .collect();
        let freq: Vec<u8> = (0..128).map(|i| (i * 2) as u8).collect();
        SampleFrame::from_buffers(time, freq).unwrap()
    }

    pub fn render(viz: &dyn Visualization, frame: &SampleFrame, is_beat: bool) -> DrawList {
        let mut list = DrawList::new(800.0, 400.0);
        let ctx = DrawContext {
            features: FeatureExtractor::new().extract(frame),
            is_beat,
            center: Point::new(400.0, 200.0),
            hue: 120.0,
            elapsed_secs: 1.5,
        };
        viz.draw(&ctx, &mut list);
        list
    }
}
