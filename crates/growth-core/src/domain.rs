// File: crates/growth-core/src/domain.rs
// Summary: Value-axis domain computed from the currently visible series.

use serde::{Deserialize, Serialize};

use crate::axis::ScaleKind;
use crate::store::SeriesStore;
use crate::visibility::VisibilityMask;

/// Domain used when nothing visible has any data.
pub const DEFAULT_DOMAIN: Domain = Domain { min: 0.0, max: 10.0 };

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self { DEFAULT_DOMAIN }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainOptions {
    /// Headroom multiplier applied to the observed maximum.
    pub margin_factor: f64,
    /// Lower bound used on log axes, where zero is undefined.
    pub log_floor: f64,
    pub scale: ScaleKind,
}

impl DomainOptions {
    pub fn logarithmic() -> Self {
        Self { scale: ScaleKind::Log10, ..Self::default() }
    }

    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self { margin_factor: 1.05, log_floor: 0.01, scale: ScaleKind::Linear }
    }
}

/// Largest value over every year of every visible entity.
pub fn visible_max(store: &SeriesStore, mask: &VisibilityMask) -> Option<f64> {
    store
        .entities()
        .iter()
        .filter(|e| mask.is_visible(&e.id))
        .filter_map(|e| e.max_value())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Compute `{min, max}` for the visible subset of `store`.
/// Never fails: an empty selection yields [`DEFAULT_DOMAIN`].
pub fn compute_domain(store: &SeriesStore, mask: &VisibilityMask, options: &DomainOptions) -> Domain {
    let Some(observed) = visible_max(store, mask) else {
        return DEFAULT_DOMAIN;
    };
    let max = tolerant_ceil(observed * options.margin_factor);
    let min = match options.scale {
        ScaleKind::Linear => 0.0,
        ScaleKind::Log10 => options.log_floor.max(f64::MIN_POSITIVE),
    };
    Domain { min, max: max.max(min) }
}

// ceil() that ignores the last few ulps of error, so 20 * 1.05 rounds to 21.
fn tolerant_ceil(x: f64) -> f64 {
    let nearest = x.round();
    if (x - nearest).abs() <= x.abs() * 4.0 * f64::EPSILON {
        nearest
    } else {
        x.ceil()
    }
}
