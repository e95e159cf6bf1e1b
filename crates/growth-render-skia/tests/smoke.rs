// File: crates/growth-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs for populated, hovered and empty charts.

use growth_core::{dataset, GrowthChart};
use growth_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, Theme};

fn chart() -> GrowthChart {
    GrowthChart::from_store(dataset::companies().unwrap(), dataset::default_visibility())
}

#[test]
fn render_builtin_dataset_png() {
    let mut c = chart();
    c.hover(Some("Tesla"));
    let model = c.model(Some(12));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/growth.png");
    render_to_png(&model, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&model, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn render_log_scale_without_labels() {
    let mut c = chart();
    c.set_all(true);
    c.set_logarithmic(true);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::named("dark").unwrap();
    let bytes = render_to_png_bytes(&c.model(None), &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    // top-left pixel is the opaque background
    assert_eq!(img.get_pixel(0, 0).0[3], 255);
}

#[test]
fn render_empty_chart() {
    let c = GrowthChart::new(dataset::default_visibility());
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    let bytes = render_to_png_bytes(&c.model(Some(0)), &opts).expect("empty chart still renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn rendering_is_deterministic() {
    let model = chart().model(Some(3));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let a = render_to_png_bytes(&model, &opts).unwrap();
    let b = render_to_png_bytes(&model, &opts).unwrap();
    let a = image::load_from_memory(&a).unwrap().to_rgba8();
    let b = image::load_from_memory(&b).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn theme_lookup_is_case_insensitive() {
    assert_eq!(Theme::named("DARK").unwrap().name, "dark");
    assert_eq!(Theme::named("light").unwrap().name, "light");
    assert!(Theme::named("solarized").is_none());
}
