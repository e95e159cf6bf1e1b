// File: crates/growth-core/src/lib.rs
// Summary: Core library entry point; exports the alignment, domain, encoding and tooltip API.

pub mod store;
pub mod align;
pub mod axis;
pub mod domain;
pub mod scale;
pub mod palette;
pub mod encoding;
pub mod visibility;
pub mod tooltip;
pub mod format;
pub mod loader;
pub mod dataset;
pub mod chart;

pub use store::{Category, Entity, SeriesStore, StoreError};
pub use align::{align, AlignedRow};
pub use axis::{Axis, ScaleKind};
pub use domain::{compute_domain, Domain, DomainOptions, DEFAULT_DOMAIN};
pub use scale::{ValueScale, YearScale};
pub use palette::Rgb;
pub use encoding::{assign_encodings, DashPattern, Encoding, EncodingTable, Stroke};
pub use visibility::{DefaultVisibility, VisibilityMask};
pub use tooltip::{summarize, Growth, Tooltip, TooltipEntry, TooltipLine};
pub use format::{format_growth, format_value};
pub use loader::{load_csv_path, load_csv_reader, LoadError};
pub use chart::{ChartModel, GrowthChart, LegendGroup, LegendItem, LineModel};
