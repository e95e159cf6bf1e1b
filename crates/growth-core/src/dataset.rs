// File: crates/growth-core/src/dataset.rs
// Summary: Built-in company table (billions USD by years since founding) and its default selection.
// Sources: SEC filings and company reports. Hardware rows are annual revenue,
// software/AI rows are annual recurring revenue; those series stop once ARR reaches $500M.

use crate::store::{Category, Entity, SeriesStore, StoreError};
use crate::visibility::DefaultVisibility;

const HARDWARE: &[(&str, &[f64])] = &[
    ("Xiaomi", &[0.00, 0.85, 2.00, 5.20, 12.50, 12.50, 10.00, 18.00, 25.40, 29.80, 37.80, 50.90, 41.50, 38.20, 51.60]),
    ("Block", &[0.00, 0.00, 0.04, 0.20, 0.55, 0.85, 1.26, 1.71, 2.21, 3.30, 4.71, 9.50, 17.66, 17.53, 21.92, 24.12]),
    ("Tesla", &[0.00, 0.01, 0.05, 0.12, 0.07, 0.02, 0.11, 0.12, 0.20, 0.41, 2.01, 3.20, 4.05, 7.00, 11.76, 21.46]),
    ("Beats", &[0.00, 0.00, 0.03, 0.15, 0.35, 0.50, 0.86, 1.20, 1.50, 1.80, 2.00, 2.20, 2.50, 2.50, 2.00, 2.50]),
    ("DJI", &[0.00, 0.00, 0.00, 0.00, 0.13, 0.50, 1.00, 2.50, 3.40, 3.60, 2.90, 4.20]),
    ("Fitbit", &[0.00, 0.00, 0.01, 0.01, 0.01, 0.08, 0.27, 0.75, 1.86, 2.17, 1.62, 1.51, 1.43, 1.32, 1.21, 1.10]),
    ("Peloton", &[0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.22, 0.44, 0.92, 1.83, 4.02, 3.58, 2.80, 2.70]),
    ("Anker", &[0.00, 0.01, 0.02, 0.05, 0.10, 0.20, 0.40, 0.50, 0.65, 0.90, 1.35, 1.94, 2.06, 2.50, 3.53]),
    ("Rivian", &[0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.06, 1.66, 4.43, 4.97]),
    ("GoPro", &[0.00, 0.00, 0.00, 0.00, 0.00, 0.01, 0.03, 0.00, 0.08, 0.10, 0.14, 0.28, 0.32, 0.32, 0.40, 0.51]),
];

const SOFTWARE_AI: &[(&str, &[f64])] = &[
    ("Cursor", &[0.00, 0.00, 0.30, 0.50]),
    ("Anthropic", &[0.00, 0.00, 0.00, 0.05, 0.50]),
    ("Slack", &[0.00, 0.00, 0.01, 0.05, 0.10, 0.30, 0.50]),
    ("Uber", &[0.00, 0.00, 0.005, 0.03, 0.10, 0.50]),
    ("OpenAI", &[0.00, 0.00, 0.00, 0.00, 0.00, 0.01, 0.05, 0.10, 0.20, 0.50]),
    ("Zoom", &[0.00, 0.00, 0.005, 0.015, 0.03, 0.06, 0.10, 0.15, 0.33, 0.50]),
    ("Figma", &[0.00, 0.00, 0.00, 0.00, 0.005, 0.015, 0.03, 0.075, 0.20, 0.40, 0.50]),
    ("DocuSign", &[0.00, 0.00, 0.001, 0.003, 0.008, 0.015, 0.03, 0.06, 0.10, 0.15, 0.25, 0.35, 0.45, 0.50]),
];

/// Companies shown before the viewer changes anything.
pub const DEFAULT_VISIBLE: &[&str] = &["Xiaomi", "Tesla", "Cursor", "Anthropic"];

/// The built-in table, hardware first, in presentation order.
pub fn companies() -> Result<SeriesStore, StoreError> {
    let hw = HARDWARE.iter().map(|(id, v)| Entity::from_values(*id, Category::Hardware, v));
    let sw = SOFTWARE_AI.iter().map(|(id, v)| Entity::from_values(*id, Category::SoftwareAi, v));
    SeriesStore::new(hw.chain(sw).collect())
}

pub fn default_visibility() -> DefaultVisibility {
    DefaultVisibility::curated(DEFAULT_VISIBLE.iter().copied())
}
