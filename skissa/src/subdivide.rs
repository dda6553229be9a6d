//! Splitting quadratic bezier segments.

use crate::{
    error::Error,
    path::{PathCommand, Point},
};

/// Result of splitting a quadratic bezier in two.
///
/// The first curve runs `start -> control0 -> mid` and the second runs
/// `mid -> control1 -> end`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct QuadSplit {
    pub start: Point,
    pub control0: Point,
    pub mid: Point,
    pub control1: Point,
    pub end: Point,
}

impl QuadSplit {
    /// The segment covering `[0, t]` of the original curve.
    pub fn first(&self) -> PathCommand {
        PathCommand::quad_to(self.control0, self.mid)
    }

    /// The segment covering `[t, 1]` of the original curve.
    pub fn second(&self) -> PathCommand {
        PathCommand::quad_to(self.control1, self.end)
    }

    /// Flattened coordinates: start, first control, split point, second
    /// control, end.
    pub fn coords(&self) -> [f32; 10] {
        [
            self.start.x,
            self.start.y,
            self.control0.x,
            self.control0.y,
            self.mid.x,
            self.mid.y,
            self.control1.x,
            self.control1.y,
            self.end.x,
            self.end.y,
        ]
    }
}

/// Splits the quadratic bezier `start, control, end` at parameter `t` using
/// de Casteljau's construction.
///
/// `t` must lie strictly inside (0, 1); it is never clamped.
pub fn split_quad(t: f32, start: Point, control: Point, end: Point) -> Result<QuadSplit, Error> {
    if !(t > 0.0 && t < 1.0) {
        return Err(Error::InvalidSubdivisionParameter(t));
    }
    let control0 = start.lerp(control, t);
    let control1 = control.lerp(end, t);
    let mid = control0.lerp(control1, t);
    Ok(QuadSplit {
        start,
        control0,
        mid,
        control1,
        end,
    })
}
