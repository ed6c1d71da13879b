// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and pointer hit-testing.

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 <= f64::EPSILON {
        return p.distance(a);
    }
    let t = clamp((p - a).dot(ab) / len2, 0.0, 1.0);
    p.distance(a + Point::new(ab.x * t, ab.y * t))
}

/// Whether `p` lies on a stroke of half-width `half` drawn along `pts`: butt
/// caps at both ends, round joins between segments. A lone vertex counts as a
/// dot of radius `half`.
pub fn within_stroke(p: Point, pts: &[Point], half: f64) -> bool {
    match pts {
        [] => false,
        [only] => p.distance(*only) <= half,
        _ => {
            let last = pts.len() - 2;
            pts.windows(2).enumerate().any(|(i, w)| {
                let (a, b) = (w[0], w[1]);
                let ab = b - a;
                let len2 = ab.dot(ab);
                if len2 <= f64::EPSILON {
                    return false;
                }
                let t = (p - a).dot(ab) / len2;
                if (i == 0 && t < 0.0) || (i == last && t > 1.0) {
                    return false;
                }
                distance_to_segment(p, a, b) <= half
            })
        }
    }
}
