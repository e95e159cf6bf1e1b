// File: crates/growth-core/tests/scale.rs
// Purpose: Axis ticks and pixel mapping for linear and log value scales.

use growth_core::{Axis, Domain, ScaleKind, ValueScale, YearScale};

#[test]
fn linear_value_scale_maps_ends() {
    let axis = Axis::value(Domain { min: 0.0, max: 10.0 }, ScaleKind::Linear);
    let s = ValueScale::for_axis(20.0, 220.0, &axis);
    assert_eq!(s.to_px(0.0), 220.0);
    assert_eq!(s.to_px(10.0), 20.0);
    assert!((s.from_px(120.0) - 5.0).abs() < 1e-9);
}

#[test]
fn log_value_scale_pins_values_below_floor() {
    let axis = Axis::value(Domain { min: 0.01, max: 100.0 }, ScaleKind::Log10);
    let s = ValueScale::for_axis(0.0, 400.0, &axis);
    assert_eq!(s.to_px(0.0), s.to_px(0.01));
    assert!((s.to_px(1.0) - 200.0).abs() < 1e-3);
    let ticks = axis.ticks(5);
    let want = [0.01, 0.1, 1.0, 10.0, 100.0];
    assert_eq!(ticks.len(), want.len());
    for (got, want) in ticks.iter().zip(want) {
        assert!((got / want - 1.0).abs() < 1e-9, "{got} vs {want}");
    }
}

#[test]
fn zero_height_domain_is_widened() {
    let s = ValueScale::new(0.0, 100.0, 0.0, 0.0, ScaleKind::Linear);
    assert_eq!(s.min_value(), 0.0);
    assert_eq!(s.max_value(), 1.0);
    assert_eq!(s.to_px(0.0), 100.0);

    let s = ValueScale::new(0.0, 100.0, 0.01, 0.01, ScaleKind::Log10);
    assert!((s.max_value() - 0.1).abs() < 1e-12);
    assert_eq!(s.to_px(0.0), 100.0);
}

#[test]
fn flat_axis_has_one_tick() {
    let axis = Axis::value(Domain { min: 0.0, max: 0.0 }, ScaleKind::Linear);
    assert_eq!(axis.ticks(6), vec![0.0]);
    let axis = Axis::value(Domain { min: 0.01, max: 0.01 }, ScaleKind::Log10);
    assert_eq!(axis.ticks(6).len(), 1);
}

#[test]
fn all_zero_selection_yields_single_tick_axis() {
    use growth_core::{compute_domain, Category, DomainOptions, Entity, SeriesStore, VisibilityMask};
    let store = SeriesStore::new(vec![Entity::from_values("Flat", Category::Hardware, &[0.0, 0.0])]).unwrap();
    let mask = VisibilityMask::all_visible(&store);
    let domain = compute_domain(&store, &mask, &DomainOptions::default());
    let axis = Axis::value(domain, ScaleKind::Linear);
    assert_eq!(axis.ticks(6), vec![0.0]);
}

#[test]
fn year_scale_and_reference_lines() {
    let axis = Axis::new("Years Since Founding", 0.0, 15.0);
    let s = YearScale::new(100.0, 400.0, &axis);
    assert_eq!(s.to_px(0.0), 100.0);
    assert_eq!(s.to_px(15.0), 400.0);
    assert_eq!(s.nearest_year(121.0), 1);
    assert_eq!(s.nearest_year(-50.0), 0);
    assert_eq!(s.nearest_year(10_000.0), 15);
    assert_eq!(axis.reference_years(), vec![5, 10, 15]);
    assert_eq!(axis.year_ticks().len(), 16);
}

#[test]
fn linear_ticks_are_even() {
    let axis = Axis::value(Domain { min: 0.0, max: 10.0 }, ScaleKind::Linear);
    assert_eq!(axis.ticks(6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}
