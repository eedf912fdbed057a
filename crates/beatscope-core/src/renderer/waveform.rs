//! Oscilloscope trace with a polygon that gains sides as the music gets louder.

use std::f32::consts::TAU;

use super::{DrawContext, Visualization};
use crate::draw::{Hsl, Point, Surface};

const TRACE_WEIGHT: f32 = 2.0;
const POLYGON_WEIGHT: f32 = 3.0;
const BASE_SIDES: usize = 5;
const BEAT_EXTRA_SIDES: usize = 3;
const BEAT_JUMP: f32 = 1.2;

pub struct Waveform;

impl Waveform {
    pub fn polygon_sides(loudness: f32, is_beat: bool) -> usize {
        let sides = BASE_SIDES + (loudness.max(0.0) * 10.0).floor() as usize;
        if is_beat {
            sides + BEAT_EXTRA_SIDES
        } else {
            sides
        }
    }

    pub fn polygon_radius(loudness: f32, is_beat: bool) -> f32 {
        let radius = 100.0 + loudness * 100.0;
        if is_beat {
            radius * BEAT_JUMP
        } else {
            radius
        }
    }
}

impl Visualization for Waveform {
    fn draw(&self, ctx: &DrawContext, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        let samples = ctx.features.time_domain;

        if !samples.is_empty() {
            let slice_width = width / samples.len() as f32;
            let trace: Vec<Point> = samples
                .iter()
                .enumerate()
                .map(|(i, &s)| Point::new(i as f32 * slice_width, s as f32 / 128.0 * height / 2.0))
                .collect();
            surface.stroke_path(&trace, false, TRACE_WEIGHT, Hsl::vivid(ctx.hue));
        }

        let loudness = ctx.features.loudness;
        let sides = Self::polygon_sides(loudness, ctx.is_beat);
        let radius = Self::polygon_radius(loudness, ctx.is_beat);
        let polygon: Vec<Point> = (0..sides)
            .map(|i| {
                let angle = TAU / sides as f32 * i as f32;
                ctx.center + Point::new(angle.cos() * radius, angle.sin() * radius)
            })
            .collect();
        surface.stroke_path(&polygon, true, POLYGON_WEIGHT, Hsl::vivid(ctx.hue + 180.0));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{frame_with_amplitude, render};
    use super::*;
    use crate::draw::DrawCommand;

    #[test]
    fn test_sides_follow_loudness() {
        assert_eq!(Waveform::polygon_sides(0.0, false), 5);
        assert_eq!(Waveform::polygon_sides(0.35, false), 8);
        assert_eq!(Waveform::polygon_sides(0.35, true), 11);
    }

    #[test]
    fn test_trace_spans_width() {
        let list = render(&Waveform, &frame_with_amplitude(0), false);
        match &list.commands()[0] {
            DrawCommand::StrokePath { points, closed, .. } => {
                assert!(!closed);
                assert_eq!(points.len(), 128);
                assert_eq!(points[0].x, 0.0);
                // Silent samples sit on the vertical middle
                assert!(points.iter().all(|p| (p.y - 200.0).abs() < 1e-4));
            }
            other => panic!("expected trace, got {:?}", other),
        }
    }

    #[test]
    fn test_polygon_is_closed_and_centered() {
        let list = render(&Waveform, &frame_with_amplitude(64), true);
        match list.commands().last() {
            Some(DrawCommand::StrokePath { points, closed, color, .. }) => {
                assert!(closed);
                assert_eq!(points.len(), Waveform::polygon_sides(0.5, true));
                assert_eq!(color.hue, 300.0);
                let radius = Waveform::polygon_radius(0.5, true);
                assert!((points[0].x - (400.0 + radius)).abs() < 1e-3);
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_beat_enlarges_polygon() {
        assert!(Waveform::polygon_radius(0.3, true) > Waveform::polygon_radius(0.3, false));
        assert!(Waveform::polygon_radius(0.6, false) > Waveform::polygon_radius(0.3, false));
    }
}
