//! Geometry primitives and small helpers.
//!
//! All coordinates are `f64` logical pixels in the viewport coordinate space,
//! with the origin at the top-left and Y growing downward.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::Serialize;

/// A point in viewport coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
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
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

/// A size in logical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// An axis-aligned rectangle: the border box of an element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub loc: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(loc: Point, size: Size) -> Self {
        Self { loc, size }
    }

    pub fn left(&self) -> f64 {
        self.loc.x
    }

    pub fn top(&self) -> f64 {
        self.loc.y
    }

    pub fn right(&self) -> f64 {
        self.loc.x + self.size.w
    }

    pub fn bottom(&self) -> f64 {
        self.loc.y + self.size.h
    }
}

/// Clamps one axis of a box to `[0, limit]`.
///
/// The leading-edge clamp is checked first, so a box larger than the limit
/// ends up pinned at the trailing edge, matching the if/else chain of the
/// host-side style fixups this mirrors.
pub fn clamp_axis(pos: f64, size: f64, limit: f64) -> f64 {
    if pos < 0. {
        0.
    } else if pos + size > limit {
        limit - size
    } else {
        pos
    }
}

/// Clamps `value` to `[min, max]`.
///
/// `min` takes precedence when the interval is inverted.
pub fn ensure_min_max(value: f64, min: f64, max: f64) -> f64 {
    f64::max(min, f64::min(max, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_axis_keeps_box_within_limit() {
        assert_eq!(clamp_axis(-10., 100., 500.), 0.);
        assert_eq!(clamp_axis(450., 100., 500.), 400.);
        assert_eq!(clamp_axis(200., 100., 500.), 200.);
    }

    #[test]
    fn clamp_axis_oversized_box_pins_leading_edge_first() {
        // A 600px box in a 500px limit: the leading-edge check wins.
        assert_eq!(clamp_axis(-10., 600., 500.), 0.);
        // Already at 0, only the trailing check fires.
        assert_eq!(clamp_axis(0., 600., 500.), -100.);
    }

    #[test]
    fn ensure_min_max_prefers_min() {
        assert_eq!(ensure_min_max(50., 100., 400.), 100.);
        assert_eq!(ensure_min_max(500., 100., 400.), 400.);
        // Inverted interval: min wins.
        assert_eq!(ensure_min_max(250., 300., 200.), 300.);
    }
}
