// File: crates/growth-core/src/chart.rs
// Summary: GrowthChart session tying one dataset to its derived views, plus the plain-data
// ChartModel handed to rendering surfaces.

use serde::Serialize;

use crate::align::{align, segments, AlignedRow};
use crate::axis::{Axis, ScaleKind};
use crate::domain::{compute_domain, Domain, DomainOptions};
use crate::encoding::{assign_encodings, DashPattern, EncodingTable, Stroke};
use crate::palette::Rgb;
use crate::store::{Category, SeriesStore};
use crate::tooltip::{summarize, Tooltip, TooltipEntry};
use crate::visibility::{DefaultVisibility, VisibilityMask};

/// One session: the loaded store, its aligned rows and encodings, and the viewer's
/// visibility/hover state. Derived views are rebuilt whenever the store changes.
#[derive(Clone, Debug, Default)]
pub struct GrowthChart {
    store: SeriesStore,
    rows: Vec<AlignedRow>,
    encodings: EncodingTable,
    visibility: VisibilityMask,
    defaults: DefaultVisibility,
    hovered: Option<String>,
    pub options: DomainOptions,
}

impl GrowthChart {
    /// Session with no data yet; the first `load` seeds visibility from `defaults`.
    pub fn new(defaults: DefaultVisibility) -> Self {
        Self { defaults, ..Self::default() }
    }

    pub fn from_store(store: SeriesStore, defaults: DefaultVisibility) -> Self {
        let mut chart = Self::new(defaults);
        chart.load(store);
        chart
    }

    /// Accept a (possibly late-arriving) dataset without discarding visibility choices.
    pub fn load(&mut self, store: SeriesStore) {
        self.visibility.sync(&store, &self.defaults);
        self.install(store);
    }

    /// Replace the dataset and reset visibility to the defaults.
    pub fn reload(&mut self, store: SeriesStore) {
        self.visibility.reset(&store, &self.defaults);
        self.install(store);
    }

    fn install(&mut self, store: SeriesStore) {
        self.rows = align(&store);
        self.encodings = assign_encodings(&store);
        if let Some(h) = &self.hovered {
            if !store.contains(h) {
                self.hovered = None;
            }
        }
        self.store = store;
    }

    pub fn store(&self) -> &SeriesStore { &self.store }
    pub fn rows(&self) -> &[AlignedRow] { &self.rows }
    pub fn encodings(&self) -> &EncodingTable { &self.encodings }
    pub fn visibility(&self) -> &VisibilityMask { &self.visibility }
    pub fn hovered(&self) -> Option<&str> { self.hovered.as_deref() }

    pub fn toggle(&mut self, id: &str) { self.visibility.toggle(id); }

    pub fn set_all(&mut self, visible: bool) { self.visibility.set_all(visible); }

    pub fn is_visible(&self, id: &str) -> bool { self.visibility.is_visible(id) }

    pub fn set_logarithmic(&mut self, on: bool) {
        self.options.scale = if on { ScaleKind::Log10 } else { ScaleKind::Linear };
    }

    /// Mark an entity as hovered (emphasised). Unknown ids clear the hover.
    pub fn hover(&mut self, id: Option<&str>) {
        self.hovered = id.filter(|i| self.store.contains(i)).map(str::to_string);
    }

    pub fn domain(&self) -> Domain {
        compute_domain(&self.store, &self.visibility, &self.options)
    }

    pub fn x_axis(&self) -> Axis { Axis::years(&self.rows) }

    pub fn y_axis(&self) -> Axis { Axis::value(self.domain(), self.options.scale) }

    pub fn summary(&self, year: usize) -> Vec<TooltipEntry> {
        summarize(&self.rows, &self.visibility, year)
    }

    pub fn tooltip(&self, year: usize) -> Option<Tooltip> {
        Tooltip::build(&self.store, &self.rows, &self.visibility, year)
    }

    /// Toggle list grouped by category, in store order.
    pub fn legend(&self) -> Vec<LegendGroup> {
        Category::ALL
            .iter()
            .map(|&category| LegendGroup {
                category,
                heading: category.heading().to_string(),
                items: self
                    .store
                    .in_category(category)
                    .filter_map(|e| {
                        let enc = self.encodings.get(&e.id)?;
                        Some(LegendItem { id: e.id.clone(), color: enc.color, visible: self.is_visible(&e.id) })
                    })
                    .collect(),
            })
            .filter(|g| !g.items.is_empty())
            .collect()
    }

    /// Everything a surface needs to draw the current state. `year` adds a tooltip.
    pub fn model(&self, year: Option<usize>) -> ChartModel {
        let x_axis = self.x_axis();
        let hovered = self.hovered();
        let lines = self
            .visibility
            .visible_ids(&self.store)
            .filter_map(|id| {
                let enc = self.encodings.get(id)?;
                let category = self.store.get(id)?.category;
                Some(LineModel {
                    id: id.to_string(),
                    category,
                    color: enc.color,
                    dash: enc.dash,
                    stroke: enc.stroke(id, hovered),
                    segments: segments(&self.rows, id),
                })
            })
            .collect();
        ChartModel {
            reference_years: x_axis.reference_years(),
            x_axis,
            y_axis: self.y_axis(),
            lines,
            legend: self.legend(),
            tooltip: year.and_then(|y| self.tooltip(y)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineModel {
    pub id: String,
    pub category: Category,
    pub color: Rgb,
    pub dash: DashPattern,
    pub stroke: Stroke,
    /// Contiguous `(year, value)` runs; absent years split the line.
    pub segments: Vec<Vec<(f64, f64)>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendItem {
    pub id: String,
    pub color: Rgb,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendGroup {
    pub category: Category,
    pub heading: String,
    pub items: Vec<LegendItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartModel {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub reference_years: Vec<usize>,
    /// Visible series only, in store order (later entries draw on top).
    pub lines: Vec<LineModel>,
    pub legend: Vec<LegendGroup>,
    pub tooltip: Option<Tooltip>,
}
