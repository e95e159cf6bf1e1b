// File: crates/growth-core/src/loader.rs
// Summary: Delimited-text loader producing a SeriesStore (one row per entity, one column per year).
// Notes:
// - Header: an id column (`id`/`name`/`company`), a `category` column, and one
//   column per year index (`0`, `1`, ... or `year 3`, `y3`). Other columns are ignored.
// - Blank or unparseable numeric cells are absent, never zero. Trailing absent
//   years are trimmed so the series ends at its last recorded value.
// - Rows without an id or with an unknown category are skipped with a warning.
// - Year indices at or above MAX_YEARS (e.g. calendar years like `2019`) are
//   ignored with a warning.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::store::{Category, Entity, SeriesStore, StoreError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

const ID_HEADERS: &[&str] = &["id", "name", "company", "entity"];
const CATEGORY_HEADERS: &[&str] = &["category", "group", "kind"];

/// Upper bound (exclusive) on the year index a column may name.
pub const MAX_YEARS: usize = 200;

/// Load a CSV file from disk.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<SeriesStore, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|source| LoadError::Io { path: path.display().to_string(), source })?;
    load_csv_reader(file)
}

/// Load comma-separated data from any reader.
pub fn load_csv_reader<R: io::Read>(reader: R) -> Result<SeriesStore, LoadError> {
    load_delimited(reader, b',')
}

/// Load data separated by an arbitrary single-byte delimiter (e.g. `b'\t'`).
pub fn load_delimited<R: io::Read>(reader: R, delimiter: u8) -> Result<SeriesStore, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_id = idx(ID_HEADERS).ok_or(LoadError::MissingColumn("id"))?;
    let i_cat = idx(CATEGORY_HEADERS).ok_or(LoadError::MissingColumn("category"))?;

    let year_cols: Vec<(usize, usize)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != i_id && *i != i_cat)
        .filter_map(|(i, h)| parse_year_header(h).map(|y| (i, h, y)))
        .filter_map(|(i, h, y)| {
            if y < MAX_YEARS {
                Some((i, y))
            } else {
                tracing::warn!(column = %h, max = MAX_YEARS, "ignoring year column out of range");
                None
            }
        })
        .collect();
    let width = year_cols
        .iter()
        .filter_map(|&(_, y)| y.checked_add(1))
        .max()
        .unwrap_or(0);
    tracing::debug!(?headers, years = width, "csv header parsed");

    let mut entities = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let id = rec.get(i_id).unwrap_or("").trim();
        if id.is_empty() {
            tracing::warn!(row = line + 1, "skipping row without id");
            continue;
        }
        let category = match rec.get(i_cat).unwrap_or("").parse::<Category>() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(row = line + 1, entity = id, error = %e, "skipping row");
                continue;
            }
        };

        let mut series: Vec<Option<f64>> = vec![None; width];
        for &(col, year) in &year_cols {
            series[year] = rec.get(col).and_then(parse_cell);
        }
        while matches!(series.last(), Some(None)) {
            series.pop();
        }
        entities.push(Entity::new(id, category, series));
    }

    let store = SeriesStore::new(entities)?;
    tracing::info!(entities = store.len(), years = store.max_len(), "dataset loaded");
    Ok(store)
}

/// Accepts `3`, `year 3`, `year3`, `y3`.
fn parse_year_header(h: &str) -> Option<usize> {
    let h = h.trim();
    let digits = h
        .strip_prefix("year")
        .or_else(|| h.strip_prefix('y'))
        .unwrap_or(h)
        .trim_start_matches(|c: char| c == ' ' || c == '_');
    digits.parse::<usize>().ok()
}

fn parse_cell(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
