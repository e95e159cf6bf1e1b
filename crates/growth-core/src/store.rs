// File: crates/growth-core/src/store.rs
// Summary: Entity model and the SeriesStore that owns every per-company series for a session.
// Notes:
// - A year value is `Option<f64>`: `None` means "no data that year", which is
//   not the same thing as a recorded `0.0`.
// - Values are sanitized once at construction so downstream math never sees
//   negative or non-finite numbers.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of entity groupings. Used for encoding and labels only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Hardware,
    SoftwareAi,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Hardware, Category::SoftwareAi];

    /// Name of the metric the category reports (annual revenue vs. recurring revenue).
    pub const fn metric(&self) -> &'static str {
        match self {
            Category::Hardware => "Revenue",
            Category::SoftwareAi => "ARR",
        }
    }

    /// Heading used when grouping toggles by category.
    pub const fn heading(&self) -> &'static str {
        match self {
            Category::Hardware => "Hardware (Annual Revenue)",
            Category::SoftwareAi => "Software/AI (ARR)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Hardware => f.write_str("Hardware"),
            Category::SoftwareAi => f.write_str("Software/AI"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "hardware" | "hw" | "revenue" => Ok(Category::Hardware),
            "softwareai" | "software/ai" | "software_ai" | "software" | "ai" | "arr" => {
                Ok(Category::SoftwareAi)
            }
            _ => Err(UnknownCategory(s.trim().to_string())),
        }
    }
}

/// One tracked company and its per-year values (index 0 = founding year).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entity {
    pub id: String,
    pub category: Category,
    series: Vec<Option<f64>>,
}

impl Entity {
    /// Build an entity; negative or non-finite values become absent.
    pub fn new(id: impl Into<String>, category: Category, series: Vec<Option<f64>>) -> Self {
        let id = id.into();
        let series = series
            .into_iter()
            .enumerate()
            .map(|(year, v)| match v {
                Some(x) if x.is_finite() && x >= 0.0 => Some(x),
                Some(x) => {
                    tracing::warn!(entity = %id, year, value = x, "dropping invalid value");
                    None
                }
                None => None,
            })
            .collect();
        Self { id, category, series }
    }

    /// Convenience for dense series where every year has a value.
    pub fn from_values(id: impl Into<String>, category: Category, values: &[f64]) -> Self {
        Self::new(id, category, values.iter().copied().map(Some).collect())
    }

    pub fn series(&self) -> &[Option<f64>] { &self.series }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Value at `year`, `None` when absent or past the end of the series.
    pub fn value_at(&self, year: usize) -> Option<f64> {
        self.series.get(year).copied().flatten()
    }

    /// Defined values only, in year order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().filter_map(|v| *v)
    }

    /// Largest defined value, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.values().fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate entity id '{0}'")]
    DuplicateId(String),
}

/// Owner of all entities for a session, in insertion order.
/// Contract: ids are unique.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeriesStore {
    entities: Vec<Entity>,
}

impl SeriesStore {
    pub fn new(entities: Vec<Entity>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(entities.len());
        for e in &entities {
            if !seen.insert(e.id.as_str()) {
                return Err(StoreError::DuplicateId(e.id.clone()));
            }
        }
        Ok(Self { entities })
    }

    pub fn empty() -> Self { Self::default() }

    pub fn entities(&self) -> &[Entity] { &self.entities }

    pub fn len(&self) -> usize { self.entities.len() }

    pub fn is_empty(&self) -> bool { self.entities.is_empty() }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool { self.get(id).is_some() }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.iter().map(|e| e.id.as_str())
    }

    /// Longest series length across all entities (0 for an empty store).
    pub fn max_len(&self) -> usize {
        self.entities.iter().map(Entity::len).max().unwrap_or(0)
    }

    /// Entities of one category, in store order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter(move |e| e.category == category)
    }
}
