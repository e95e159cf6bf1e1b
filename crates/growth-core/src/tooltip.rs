// File: crates/growth-core/src/tooltip.rs
// Summary: Ranked, growth-annotated summary of the visible entities at a hovered year.

use std::cmp::Ordering;

use serde::Serialize;

use crate::align::AlignedRow;
use crate::format::{format_growth, format_value, format_year};
use crate::store::SeriesStore;
use crate::visibility::VisibilityMask;

/// Year-over-year change. `NotApplicable` when there is no usable prior year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Growth {
    Percent(f64),
    NotApplicable,
}

impl Growth {
    /// Percentage change from `prior` to `current`, rounded to one decimal.
    pub fn between(prior: Option<f64>, current: f64) -> Self {
        match prior {
            Some(p) if p != 0.0 => {
                let pct = (current - p) / p * 100.0;
                Growth::Percent((pct * 10.0).round() / 10.0)
            }
            _ => Growth::NotApplicable,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match *self {
            Growth::Percent(p) => Some(p),
            Growth::NotApplicable => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipEntry {
    pub id: String,
    pub value: f64,
    /// 1-based position after sorting by value.
    pub rank: usize,
    pub growth: Growth,
}

/// Visible entities with a value at `year`, largest first.
/// Out-of-range years and empty selections yield an empty list.
pub fn summarize(rows: &[AlignedRow], mask: &VisibilityMask, year: usize) -> Vec<TooltipEntry> {
    let Some(row) = rows.get(year) else {
        return Vec::new();
    };
    let prior = year.checked_sub(1).and_then(|p| rows.get(p));

    let mut visible: Vec<(&str, f64)> = row.iter().filter(|(id, _)| mask.is_visible(id)).collect();
    // stable: equal values keep store order
    visible.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    visible
        .into_iter()
        .enumerate()
        .map(|(i, (id, value))| TooltipEntry {
            id: id.to_string(),
            value,
            rank: i + 1,
            growth: Growth::between(prior.and_then(|r| r.get(id)), value),
        })
        .collect()
}

/// One display line of a tooltip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipLine {
    pub id: String,
    /// Name qualified by the reported metric, e.g. `Cursor (ARR)`.
    pub label: String,
    pub value: f64,
    pub formatted_value: String,
    pub rank: usize,
    pub growth: Growth,
    pub formatted_growth: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub year: usize,
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    /// Labeled tooltip for `year`, or `None` when there is nothing to show.
    pub fn build(store: &SeriesStore, rows: &[AlignedRow], mask: &VisibilityMask, year: usize) -> Option<Self> {
        let entries = summarize(rows, mask, year);
        if entries.is_empty() {
            return None;
        }
        let lines = entries
            .into_iter()
            .map(|e| {
                let label = match store.get(&e.id) {
                    Some(ent) => format!("{} ({})", e.id, ent.category.metric()),
                    None => e.id.clone(),
                };
                TooltipLine {
                    label,
                    formatted_value: format_value(e.value),
                    formatted_growth: format_growth(e.growth),
                    id: e.id,
                    value: e.value,
                    rank: e.rank,
                    growth: e.growth,
                }
            })
            .collect();
        Some(Self { year, title: format_year(year), lines })
    }
}
