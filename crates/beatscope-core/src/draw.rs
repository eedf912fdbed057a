//! Drawing surface abstraction.
//!
//! Renderers talk to a [`Surface`] in surface-local coordinates: origin at the
//! top-left corner, x to the right, y down. [`DrawList`] records the calls so a
//! frame can be produced in `update` and replayed onto the real canvas later.

use std::ops::{Add, AddAssign, Sub};

/// Position or offset in surface-local pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Builds a color, wrapping the hue into [0, 360)
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
        }
    }

    /// Fully saturated, mid-lightness color
    pub fn vivid(hue: f32) -> Self {
        Self::new(hue, 100.0, 50.0)
    }
}

/// Primitive operations the renderers need from a canvas
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> (f32, f32);

    /// Clear the whole surface
    fn clear(&mut self);

    fn stroke_circle(&mut self, center: Point, radius: f32, weight: f32, color: Hsl);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Hsl);

    /// Filled rectangle given by its top-left corner, rotated about its center
    fn fill_rect(&mut self, top_left: Point, w: f32, h: f32, rotation: f32, color: Hsl);

    /// Connected line segments; `closed` joins the last point to the first
    fn stroke_path(&mut self, points: &[Point], closed: bool, weight: f32, color: Hsl);
}

/// One recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    StrokeCircle {
        center: Point,
        radius: f32,
        weight: f32,
        color: Hsl,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Hsl,
    },
    FillRect {
        top_left: Point,
        w: f32,
        h: f32,
        rotation: f32,
        color: Hsl,
    },
    StrokePath {
        points: Vec<Point>,
        closed: bool,
        weight: f32,
        color: Hsl,
    },
}

/// Surface that records commands for later replay
#[derive(Clone, Debug)]
pub struct DrawList {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands without changing the size
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Change the surface size; takes effect from the next recorded frame
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        // Anything before a clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, weight: f32, color: Hsl) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            weight,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Hsl) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, top_left: Point, w: f32, h: f32, rotation: f32, color: Hsl) {
        self.commands.push(DrawCommand::FillRect {
            top_left,
            w,
            h,
            rotation,
            color,
        });
    }

    fn stroke_path(&mut self, points: &[Point], closed: bool, weight: f32, color: Hsl) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            closed,
            weight,
            color,
        });
    }
}
