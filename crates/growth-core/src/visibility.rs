// File: crates/growth-core/src/visibility.rs
// Summary: Per-entity show/hide state driven by user toggles.
// Notes:
// - Each entity is either Visible or Hidden; only toggle/set_all move between them.
// - Ids missing from the mask count as hidden.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::store::SeriesStore;

/// Initial visibility applied when a dataset is first seeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DefaultVisibility {
    #[default]
    AllVisible,
    /// Only these ids start visible; everything else starts hidden.
    Curated(BTreeSet<String>),
}

impl DefaultVisibility {
    pub fn curated<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DefaultVisibility::Curated(ids.into_iter().map(Into::into).collect())
    }

    fn initial(&self, id: &str) -> bool {
        match self {
            DefaultVisibility::AllVisible => true,
            DefaultVisibility::Curated(ids) => ids.contains(id),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityMask {
    shown: BTreeMap<String, bool>,
    #[serde(skip)]
    seeded: bool,
}

impl VisibilityMask {
    pub fn new() -> Self { Self::default() }

    /// Mask with every entity of `store` visible.
    pub fn all_visible(store: &SeriesStore) -> Self {
        let mut m = Self::new();
        m.reset(store, &DefaultVisibility::AllVisible);
        m
    }

    /// Mask from explicit `(id, visible)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let shown: BTreeMap<String, bool> = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let seeded = !shown.is_empty();
        Self { shown, seeded }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.shown.get(id).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool { self.shown.is_empty() }

    pub fn len(&self) -> usize { self.shown.len() }

    /// Flip one entity. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        match self.shown.get_mut(id) {
            Some(v) => *v = !*v,
            None => tracing::debug!(entity = id, "toggle ignored for unknown entity"),
        }
    }

    /// Show or hide every known entity.
    pub fn set_all(&mut self, visible: bool) {
        for v in self.shown.values_mut() {
            *v = visible;
        }
    }

    /// Reconcile with a freshly loaded store. The first non-empty load seeds the mask
    /// from `defaults`; later loads only add unseen ids as visible.
    pub fn sync(&mut self, store: &SeriesStore, defaults: &DefaultVisibility) {
        if !self.seeded && self.shown.is_empty() {
            if store.is_empty() {
                return;
            }
            for id in store.ids() {
                self.shown.insert(id.to_string(), defaults.initial(id));
            }
            self.seeded = true;
            return;
        }
        for id in store.ids() {
            self.shown.entry(id.to_string()).or_insert(true);
        }
    }

    /// Rebuild from scratch for an explicit dataset reload.
    pub fn reset(&mut self, store: &SeriesStore, defaults: &DefaultVisibility) {
        self.shown.clear();
        self.seeded = false;
        self.sync(store, defaults);
    }

    /// Visible ids in store order.
    pub fn visible_ids<'a>(&'a self, store: &'a SeriesStore) -> impl Iterator<Item = &'a str> + 'a {
        store.ids().filter(move |id| self.is_visible(id))
    }
}
