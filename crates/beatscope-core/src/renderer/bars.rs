//! Spectrum bars along the bottom edge with a pulsing disc.
//!
//! Bars stay anchored to the surface, only the disc follows the pan offset.

use super::{DrawContext, Visualization};
use crate::draw::{Hsl, Point, Surface};

const BAR_HUE_STEP: f32 = 5.0;
const BEAT_JUMP: f32 = 1.3;

pub struct Bars;

impl Bars {
    pub fn disc_radius(loudness: f32, is_beat: bool) -> f32 {
        let radius = 50.0 + loudness * 200.0;
        if is_beat {
            radius * BEAT_JUMP
        } else {
            radius
        }
    }
}

impl Visualization for Bars {
    fn draw(&self, ctx: &DrawContext, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        let spectrum = ctx.features.freq_domain;

        if !spectrum.is_empty() {
            let bar_width = width / spectrum.len() as f32;
            let max_bar_height = height / 2.0;

            for (i, &magnitude) in spectrum.iter().enumerate() {
                let bar_height = magnitude as f32 / 255.0 * max_bar_height;
                surface.fill_rect(
                    Point::new(i as f32 * bar_width, height - bar_height),
                    bar_width,
                    bar_height,
                    0.0,
                    Hsl::vivid(ctx.hue + i as f32 * BAR_HUE_STEP),
                );
            }
        }

        surface.fill_circle(
            ctx.center,
            Self::disc_radius(ctx.features.loudness, ctx.is_beat),
            Hsl::vivid(ctx.hue),
        );
    }
}
