// File: crates/growth-core/src/align.rs
// Summary: Merges per-entity series into one year-indexed table (one row per year since founding).

use serde::Serialize;

use crate::store::SeriesStore;

/// One year's cross-entity snapshot. Entities with no value that year are omitted.
/// Entries keep store order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignedRow {
    pub year: usize,
    pub values: Vec<(String, f64)>,
}

impl AlignedRow {
    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.iter().find(|(k, _)| k == id).map(|&(_, v)| v)
    }

    pub fn contains(&self, id: &str) -> bool { self.get(id).is_some() }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Build one row per year in `[0, store.max_len())`.
/// An empty store yields an empty table.
pub fn align(store: &SeriesStore) -> Vec<AlignedRow> {
    let max_len = store.max_len();
    (0..max_len)
        .map(|year| AlignedRow {
            year,
            values: store
                .entities()
                .iter()
                .filter_map(|e| e.value_at(year).map(|v| (e.id.clone(), v)))
                .collect(),
        })
        .collect()
}

/// Points of one entity as `(year, value)` runs, split wherever a year is absent.
/// Rendering surfaces draw each run as its own polyline so gaps are never bridged.
pub fn segments(rows: &[AlignedRow], id: &str) -> Vec<Vec<(f64, f64)>> {
    let mut out: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for row in rows {
        match row.get(id) {
            Some(v) => current.push((row.year as f64, v)),
            None if !current.is_empty() => out.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
