//! Mutable visual parameters carried across ticks.

use rand::Rng;

use crate::draw::Point;

/// Degrees of hue advanced per unit of loudness each tick
const HUE_RATE: f32 = 20.0;

/// Rendering style. Clicking cycles through them in declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Circles,
    Bars,
    Waveform,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Circles, Style::Bars, Style::Waveform];

    pub fn next(self) -> Style {
        match self {
            Style::Circles => Style::Bars,
            Style::Bars => Style::Waveform,
            Style::Waveform => Style::Circles,
        }
    }

    /// Uniform pick, used when a new track finishes loading
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Style {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Circles => "circles",
            Style::Bars => "bars",
            Style::Waveform => "waveform",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    /// Always within [0, 360)
    hue_phase: f32,
    pub pan_offset: Point,
    pub active_style: Style,
}

impl SceneState {
    pub fn new(style: Style) -> Self {
        Self {
            active_style: style,
            ..Self::default()
        }
    }

    pub fn hue_phase(&self) -> f32 {
        self.hue_phase
    }

    /// Louder audio cycles colors faster
    pub fn advance_hue(&mut self, loudness: f32) {
        self.hue_phase = (self.hue_phase + loudness * HUE_RATE).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if self.hue_phase >= 360.0 {
            self.hue_phase = 0.0;
        }
    }

    pub fn cycle_style(&mut self) {
        self.active_style = self.active_style.next();
    }
}
