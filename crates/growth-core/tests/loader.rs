// File: crates/growth-core/tests/loader.rs
// Purpose: CSV loader contract: blanks and junk are absent (never zero), bad rows skipped.

use growth_core::loader::{load_delimited, LoadError, MAX_YEARS};
use growth_core::{align, load_csv_path, load_csv_reader, Category};

const SAMPLE: &str = "\
company,category,0,1,2,3
Xiaomi,Hardware,0,0.85,2.0,5.2
Cursor,SoftwareAI,0,,0.3,
Broken,Hardware,0,n/a,1.5,2
,Hardware,1,2,3,4
Mystery,Biotech,1,2,3,4
";

#[test]
fn blank_cells_are_absent_not_zero() {
    let store = load_csv_reader(SAMPLE.as_bytes()).unwrap();
    let cursor = store.get("Cursor").unwrap();
    assert_eq!(cursor.category, Category::SoftwareAi);
    assert_eq!(cursor.series(), &[Some(0.0), None, Some(0.3)], "trailing blank trimmed");
    assert_eq!(cursor.value_at(0), Some(0.0));

    let rows = align(&store);
    assert!(rows[0].contains("Cursor"));
    assert!(!rows[1].contains("Cursor"));
}

#[test]
fn unparseable_cells_are_absent() {
    let store = load_csv_reader(SAMPLE.as_bytes()).unwrap();
    let broken = store.get("Broken").unwrap();
    assert_eq!(broken.series(), &[Some(0.0), None, Some(1.5), Some(2.0)]);
}

#[test]
fn rows_without_id_or_known_category_are_skipped() {
    let store = load_csv_reader(SAMPLE.as_bytes()).unwrap();
    assert_eq!(store.ids().collect::<Vec<_>>(), vec!["Xiaomi", "Cursor", "Broken"]);
}

#[test]
fn year_columns_may_be_reordered_or_prefixed() {
    let csv = "category,year 2,name,year 0\nARR,7,Zoom,1\n";
    let store = load_csv_reader(csv.as_bytes()).unwrap();
    let zoom = store.get("Zoom").unwrap();
    assert_eq!(zoom.series(), &[Some(1.0), None, Some(7.0)]);
}

#[test]
fn tab_separated_input() {
    let tsv = "id\tcategory\t0\t1\nFigma\tsoftware\t0\t0.005\n";
    let store = load_delimited(tsv.as_bytes(), b'\t').unwrap();
    assert_eq!(store.get("Figma").unwrap().value_at(1), Some(0.005));
}

#[test]
fn missing_columns_and_duplicates_are_errors() {
    let err = load_csv_reader("category,0\nHardware,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("id")));

    let err = load_csv_reader("id,0\nA,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("category")));

    let err = load_csv_reader("id,category,0\nA,hw,1\nA,hw,2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Store(_)));
}

#[test]
fn header_only_file_is_an_empty_store() {
    let store = load_csv_reader("id,category,0,1\n".as_bytes()).unwrap();
    assert!(store.is_empty());
    assert!(align(&store).is_empty());
}

#[test]
fn missing_file_reports_path() {
    let err = load_csv_path("target/test_out/does-not-exist.csv").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.csv"));
}

#[test]
fn oversized_year_headers_are_ignored() {
    let csv = "id,category,0,1,18446744073709551615,1099511627776\nTesla,Hardware,0,0.1,5,6\n";
    let store = load_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(store.get("Tesla").unwrap().series(), &[Some(0.0), Some(0.1)]);
    assert_eq!(store.max_len(), 2);
}

#[test]
fn calendar_year_headers_do_not_pad_series() {
    let csv = "id,category,2019,2020\nZoom,software,1,2\n";
    let store = load_csv_reader(csv.as_bytes()).unwrap();
    assert!(store.get("Zoom").unwrap().is_empty());

    let last = format!("id,category,0,{}\nZoom,software,1,2\n", MAX_YEARS - 1);
    let store = load_csv_reader(last.as_bytes()).unwrap();
    assert_eq!(store.max_len(), MAX_YEARS);
}
