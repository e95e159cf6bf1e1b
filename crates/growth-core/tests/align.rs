// File: crates/growth-core/tests/align.rs
// Purpose: Aligned table shape, gap handling and determinism.

use growth_core::align::segments;
use growth_core::{align, Category, Entity, SeriesStore};

fn sparse_store() -> SeriesStore {
    SeriesStore::new(vec![
        Entity::new("gap", Category::Hardware, vec![Some(1.0), None, Some(3.0), Some(4.0)]),
        Entity::from_values("short", Category::SoftwareAi, &[0.0, 0.5]),
        Entity::new("empty", Category::SoftwareAi, vec![]),
        Entity::from_values("long", Category::Hardware, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
    ])
    .unwrap()
}

#[test]
fn empty_store_aligns_to_nothing() {
    assert!(align(&SeriesStore::empty()).is_empty());
}

#[test]
fn length_matches_longest_series() {
    let s = sparse_store();
    assert_eq!(align(&s).len(), 6);
    assert_eq!(align(&s).len(), s.max_len());
}

#[test]
fn rows_contain_exactly_the_defined_values() {
    let s = sparse_store();
    let rows = align(&s);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.year, y);
        for e in s.entities() {
            assert_eq!(row.contains(&e.id), e.value_at(y).is_some(), "{} at {}", e.id, y);
        }
    }
    assert!(!rows[1].contains("gap"));
    assert_eq!(rows[1].get("short"), Some(0.5));
    assert!(!rows[2].contains("short"));
}

#[test]
fn rows_follow_store_order() {
    let rows = align(&sparse_store());
    let ids: Vec<&str> = rows[0].iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["gap", "short", "long"]);
}

#[test]
fn align_is_idempotent() {
    let s = sparse_store();
    let a = serde_json::to_string(&align(&s)).unwrap();
    let b = serde_json::to_string(&align(&s)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn segments_break_at_gaps() {
    let rows = align(&sparse_store());
    let runs = segments(&rows, "gap");
    assert_eq!(runs, vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]);
    assert_eq!(segments(&rows, "long").len(), 1);
    assert!(segments(&rows, "missing").is_empty());
}

#[test]
fn invalid_values_become_absent() {
    let e = Entity::new("x", Category::Hardware, vec![Some(-1.0), Some(f64::NAN), Some(2.0)]);
    assert_eq!(e.series(), &[None, None, Some(2.0)]);
    assert_eq!(e.max_value(), Some(2.0));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = SeriesStore::new(vec![
        Entity::from_values("dup", Category::Hardware, &[1.0]),
        Entity::from_values("dup", Category::SoftwareAi, &[2.0]),
    ])
    .unwrap_err();
    assert_eq!(err.to_string(), "duplicate entity id 'dup'");
}
