// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms between data and plot pixels.

/// Time coordinate (seconds since the Unix epoch).
pub type Time = f64;
/// Value Y coordinate (index value).
pub type Value = f64;

/// Horizontal time scale mapping `[t_min, t_max]` linearly onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f64,
    pub right_px: f64,
    pub t_min: Time,
    pub t_max: Time,
}

impl TimeScale {
    pub fn new(left_px: f64, right_px: f64, t_min: Time, t_max: Time) -> Self {
        Self { left_px, right_px, t_min, t_max }
    }

    fn span(&self) -> f64 { self.t_max - self.t_min }

    #[inline]
    pub fn to_px(&self, t: Time) -> f64 {
        let span = self.span();
        if span.abs() < 1e-12 {
            // Single-instant domain sits in the middle of the range.
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + (t - self.t_min) / span * (self.right_px - self.left_px)
    }

    /// Inverse of `to_px`; not clamped to the domain.
    #[inline]
    pub fn from_px(&self, px: f64) -> Time {
        let width = self.right_px - self.left_px;
        if width.abs() < 1e-12 || self.span().abs() < 1e-12 {
            return self.t_min;
        }
        self.t_min + (px - self.left_px) / width * self.span()
    }

    pub fn contains_px(&self, px: f64) -> bool {
        let (lo, hi) = if self.left_px <= self.right_px {
            (self.left_px, self.right_px)
        } else {
            (self.right_px, self.left_px)
        };
        px >= lo - 0.5 && px <= hi + 0.5
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[bottom_px, top_px]`:
/// larger values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        self.bottom_px - (y - self.vmin) / (self.vmax - self.vmin) * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> Value {
        let height = self.bottom_px - self.top_px;
        if height.abs() < 1e-12 {
            return self.vmin;
        }
        self.vmin + (self.bottom_px - py) / height * (self.vmax - self.vmin)
    }
}
