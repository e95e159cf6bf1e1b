// File: crates/growth-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick placement for the year and value axes.

use serde::{Deserialize, Serialize};

use crate::align::AlignedRow;
use crate::domain::Domain;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Spacing of the faint vertical reference lines on the year axis.
pub const REFERENCE_STEP_YEARS: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    /// Horizontal axis covering every aligned year.
    pub fn years(rows: &[AlignedRow]) -> Self {
        let last = rows.len().saturating_sub(1).max(1);
        Self::new("Years Since Founding", 0.0, last as f64)
    }

    /// Vertical axis for a computed value domain.
    pub fn value(domain: Domain, kind: ScaleKind) -> Self {
        let mut a = Self::new("Value (Billions USD)", domain.min, domain.max);
        a.kind = kind;
        a
    }

    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Tick positions: evenly spaced for linear axes, powers of ten for log axes.
    /// A flat axis (`min == max`) gets a single tick.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if (self.max - self.min).abs() < 1e-12 {
            return vec![self.min];
        }
        match self.kind {
            ScaleKind::Linear => linspace(self.min, self.max, count),
            ScaleKind::Log10 => {
                let lo = (self.min.max(1e-12).log10() - 1e-9).ceil() as i32;
                let hi = (self.max.max(1e-12).log10() + 1e-9).floor() as i32;
                let mut out: Vec<f64> = (lo..=hi).map(|p| 10f64.powi(p)).collect();
                if out.is_empty() {
                    out = vec![self.min, self.max];
                }
                out
            }
        }
    }

    /// Whole-year ticks from `min` to `max` inclusive.
    pub fn year_ticks(&self) -> Vec<usize> {
        let lo = self.min.max(0.0).ceil() as usize;
        let hi = self.max.max(0.0).floor() as usize;
        (lo..=hi).collect()
    }

    /// Years that get a reference line (every five years, never year 0).
    pub fn reference_years(&self) -> Vec<usize> {
        self.year_ticks()
            .into_iter()
            .filter(|y| *y > 0 && y % REFERENCE_STEP_YEARS == 0)
            .collect()
    }
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
