// File: crates/growth-core/src/scale.rs
// Summary: Year (X) and Value (Y) pixel transforms for rendering surfaces.

use crate::axis::{Axis, ScaleKind};

/// Horizontal year scale mapping `[min_year, max_year]` to `[left, right]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct YearScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min_year: f64,
    pub max_year: f64,
}

impl YearScale {
    pub fn new(left_px: f32, right_px: f32, axis: &Axis) -> Self {
        Self { left_px, right_px, min_year: axis.min, max_year: axis.min + axis.span() }
    }
    #[inline]
    pub fn to_px(&self, year: f64) -> f32 {
        let span = (self.max_year - self.min_year).max(1e-9);
        self.left_px + ((year - self.min_year) / span) as f32 * (self.right_px - self.left_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.max_year - self.min_year).max(1e-9);
        let w = (self.right_px - self.left_px).max(1.0);
        self.min_year + ((px - self.left_px) / w) as f64 * span
    }
    /// Nearest whole year under a cursor, clamped to the axis. Used for hover lookups.
    pub fn nearest_year(&self, px: f32) -> usize {
        let y = self.from_px(px).round().clamp(self.min_year.max(0.0), self.max_year.max(0.0));
        y as usize
    }
}

/// Vertical value scale: `top_px` sits at the axis maximum, `bottom_px` at the minimum.
/// Log axes work on `log10` of the value; anything under the axis minimum pins to the bottom.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    kind: ScaleKind,
    floor: f64,
    // axis ends after projection
    lo: f64,
    hi: f64,
}

const LOG_MIN_POSITIVE: f64 = 1e-12;

impl ValueScale {
    pub fn for_axis(top_px: f32, bottom_px: f32, axis: &Axis) -> Self {
        Self::new(top_px, bottom_px, axis.min, axis.max, axis.kind)
    }

    /// A flat range is stretched by one unit (one decade on log axes).
    pub fn new(top_px: f32, bottom_px: f32, min: f64, max: f64, kind: ScaleKind) -> Self {
        let floor = match kind {
            ScaleKind::Linear => min,
            ScaleKind::Log10 => min.max(LOG_MIN_POSITIVE),
        };
        let mut s = Self { top_px, bottom_px, kind, floor, lo: 0.0, hi: 0.0 };
        s.lo = s.project(floor);
        s.hi = s.project(max);
        if s.hi - s.lo < 1e-12 {
            s.hi = s.lo + 1.0;
        }
        s
    }

    pub fn kind(&self) -> ScaleKind { self.kind }

    /// Value drawn at `bottom_px`.
    pub fn min_value(&self) -> f64 { self.unproject(self.lo) }

    /// Value drawn at `top_px`.
    pub fn max_value(&self) -> f64 { self.unproject(self.hi) }

    fn project(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.max(self.floor).log10(),
        }
    }

    fn unproject(&self, p: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => p,
            ScaleKind::Log10 => 10f64.powf(p),
        }
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f32 {
        let t = (self.project(value) - self.lo) / (self.hi - self.lo);
        self.bottom_px - t as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let height = self.bottom_px - self.top_px;
        let t = if height.abs() < f32::EPSILON { 0.0 } else { ((self.bottom_px - py) / height) as f64 };
        self.unproject(self.lo + t * (self.hi - self.lo))
    }
}
