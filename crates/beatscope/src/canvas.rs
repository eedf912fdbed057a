//! Replays recorded draw commands onto a nannou `Draw`.
//!
//! Recorded coordinates are surface-local (origin top-left, y down); nannou
//! draws around the window center with y up.

use beatscope_core::{DrawCommand, DrawList, Hsl, Point, Surface};
use nannou::prelude::*;

/// Convert a surface-local point to nannou coordinates
pub fn to_nannou(point: Point, size: (f32, f32)) -> Point2 {
    pt2(point.x - size.0 / 2.0, size.1 / 2.0 - point.y)
}

/// Convert a nannou point (e.g. the mouse position) to surface-local coordinates
pub fn from_nannou(point: Point2, size: (f32, f32)) -> Point {
    Point::new(point.x + size.0 / 2.0, size.1 / 2.0 - point.y)
}

fn color(c: Hsl) -> nannou::color::Hsl {
    hsl(c.hue / 360.0, c.saturation / 100.0, c.lightness / 100.0)
}

pub fn replay(list: &DrawList, draw: &Draw) {
    let size = list.size();

    for command in list.commands() {
        match command {
            DrawCommand::Clear => {
                draw.background().color(BLACK);
            }
            DrawCommand::StrokeCircle {
                center,
                radius,
                weight,
                color: c,
            } => {
                draw.ellipse()
                    .xy(to_nannou(*center, size))
                    .radius(*radius)
                    .no_fill()
                    .stroke(color(*c))
                    .stroke_weight(*weight);
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color: c,
            } => {
                draw.ellipse()
                    .xy(to_nannou(*center, size))
                    .radius(*radius)
                    .color(color(*c));
            }
            DrawCommand::FillRect {
                top_left,
                w,
                h,
                rotation,
                color: c,
            } => {
                let center = *top_left + Point::new(w / 2.0, h / 2.0);
                // y flips, so clockwise on the surface is negative in nannou
                draw.rect()
                    .xy(to_nannou(center, size))
                    .w_h(*w, *h)
                    .rotate(-rotation)
                    .color(color(*c));
            }
            DrawCommand::StrokePath {
                points,
                closed,
                weight,
                color: c,
            } => {
                let mut pts: Vec<Point2> = points.iter().map(|p| to_nannou(*p, size)).collect();
                if *closed {
                    if let Some(&first) = pts.first() {
                        pts.push(first);
                    }
                }
                draw.polyline().weight(*weight).points(pts).color(color(*c));
            }
        }
    }
}
