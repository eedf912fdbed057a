//! Concentric rings with a spinning square.
//!
//! Ring radius grows with loudness and jumps by half again on a beat. The
//! square spins at a steady rate that doubles while a beat is flagged.

use super::{DrawContext, Visualization};
use crate::draw::{Hsl, Point, Surface};

const NUM_RINGS: usize = 5;
const RING_SPACING: f32 = 30.0;
const RING_HUE_STEP: f32 = 20.0;
const RING_WEIGHT: f32 = 3.0;
const BEAT_JUMP: f32 = 1.5;

pub struct Circles;

impl Circles {
    pub fn base_radius(loudness: f32, is_beat: bool) -> f32 {
        let radius = 50.0 + loudness * 200.0;
        if is_beat {
            radius * BEAT_JUMP
        } else {
            radius
        }
    }

    pub fn square_size(loudness: f32) -> f32 {
        50.0 + loudness * 100.0
    }
}

impl Visualization for Circles {
    fn draw(&self, ctx: &DrawContext, surface: &mut dyn Surface) {
        let loudness = ctx.features.loudness;
        let base_radius = Self::base_radius(loudness, ctx.is_beat);

        for i in 0..NUM_RINGS {
            let radius = base_radius + i as f32 * RING_SPACING;
            surface.stroke_circle(
                ctx.center,
                radius,
                RING_WEIGHT,
                Hsl::vivid(ctx.hue + i as f32 * RING_HUE_STEP),
            );
        }

        let spin = if ctx.is_beat { 2.0 } else { 1.0 };
        let size = Self::square_size(loudness);
        surface.fill_rect(
            ctx.center - Point::new(size / 2.0, size / 2.0),
            size,
            size,
            ctx.elapsed_secs * spin,
            Hsl::vivid(ctx.hue + 180.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{frame_with_amplitude, render};
    use super::*;
    use crate::draw::DrawCommand;

    fn ring_radii(commands: &[DrawCommand]) -> Vec<f32> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_draws_five_rings_and_square() {
        let frame = frame_with_amplitude(32);
        let list = render(&Circles, &frame, false);
        assert_eq!(ring_radii(list.commands()).len(), NUM_RINGS);
        assert!(matches!(
            list.commands().last(),
            Some(DrawCommand::FillRect { rotation, .. }) if (*rotation - 1.5).abs() < 1e-6
        ));
    }

    #[test]
    fn test_rings_grow_with_loudness() {
        let quiet = render(&Circles, &frame_with_amplitude(10), false);
        let loud = render(&Circles, &frame_with_amplitude(100), false);
        let quiet_radii = ring_radii(quiet.commands());
        let loud_radii = ring_radii(loud.commands());
        for (q, l) in quiet_radii.iter().zip(&loud_radii) {
            assert!(l > q);
        }
    }

    #[test]
    fn test_beat_jumps_radius_and_spin() {
        let frame = frame_with_amplitude(64);
        let calm = render(&Circles, &frame, false);
        let beat = render(&Circles, &frame, true);
        assert!((ring_radii(beat.commands())[0] - ring_radii(calm.commands())[0] * 1.5).abs() < 1e-3);
        assert!(matches!(
            beat.commands().last(),
            Some(DrawCommand::FillRect { rotation, .. }) if (*rotation - 3.0).abs() < 1e-6
        ));
    }

    #[test]
    fn test_ring_hues_follow_phase() {
        let list = render(&Circles, &frame_with_amplitude(0), false);
        let hues: Vec<f32> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeCircle { color, .. } => Some(color.hue),
                _ => None,
            })
            .collect();
        assert_eq!(hues, vec![120.0, 140.0, 160.0, 180.0, 200.0]);
    }
}
