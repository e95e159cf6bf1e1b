// File: crates/growth-core/src/encoding.rs
// Summary: Per-entity stroke styling (color, dash pattern, hover emphasis) derived from category order.

use std::collections::HashMap;

use serde::Serialize;

use crate::palette::{color_at, Rgb};
use crate::store::{Category, SeriesStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DashPattern {
    Solid,
    Dashed,
}

impl DashPattern {
    /// Even positions within a category are solid, odd ones dashed.
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { DashPattern::Solid } else { DashPattern::Dashed }
    }

    /// On/off intervals in pixels, `None` for a solid stroke.
    pub const fn intervals(&self) -> Option<[f32; 2]> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some([6.0, 4.0]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Encoding {
    pub color: Rgb,
    pub dash: DashPattern,
}

/// Resolved stroke parameters for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f32,
    pub opacity: f32,
}

pub const STROKE_WIDTH: f32 = 2.5;
pub const HOVER_STROKE_WIDTH: f32 = 3.0;
pub const DIMMED_OPACITY: f32 = 0.3;

impl Encoding {
    /// Stroke for `id` given the currently hovered entity: the hovered line thickens,
    /// every other line dims while something is hovered.
    pub fn stroke(&self, id: &str, hovered: Option<&str>) -> Stroke {
        match hovered {
            Some(h) if h == id => Stroke { width: HOVER_STROKE_WIDTH, opacity: 1.0 },
            Some(_) => Stroke { width: STROKE_WIDTH, opacity: DIMMED_OPACITY },
            None => Stroke { width: STROKE_WIDTH, opacity: 1.0 },
        }
    }
}

/// Encodings in store order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EncodingTable {
    entries: Vec<(String, Encoding)>,
}

impl EncodingTable {
    pub fn get(&self, id: &str) -> Option<&Encoding> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Encoding)> + '_ {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Assign each entity a color from its category palette and a dash pattern by parity,
/// both indexed by the entity's position within its category.
pub fn assign_encodings(store: &SeriesStore) -> EncodingTable {
    let mut next: HashMap<Category, usize> = HashMap::new();
    let entries = store
        .entities()
        .iter()
        .map(|e| {
            let slot = next.entry(e.category).or_insert(0);
            let index = *slot;
            *slot += 1;
            let enc = Encoding { color: color_at(e.category, index), dash: DashPattern::for_index(index) };
            (e.id.clone(), enc)
        })
        .collect();
    EncodingTable { entries }
}
