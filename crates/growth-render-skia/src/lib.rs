// File: crates/growth-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a growth-core ChartModel using Skia CPU raster surfaces.

pub mod theme;

use std::path::Path;

use growth_core::format::format_value;
use growth_core::{ChartModel, LineModel, Rgb, ValueScale, YearScale};
use skia_safe as skia;
use thiserror::Error;

pub use theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 720;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(90, 30, 40, 80)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (ticks, axis titles, tooltip) is skipped when false.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), theme: Theme::light(), draw_labels: true }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// Plot rectangle in pixels.
#[derive(Clone, Copy)]
struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

/// Render `model` to PNG bytes.
pub fn render_to_png_bytes(model: &ChartModel, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(RenderError::Surface(opts.width, opts.height))?;
    let canvas = surface.canvas();
    let th = &opts.theme;

    canvas.clear(th.background);

    let plot = Plot {
        l: opts.insets.left as f32,
        t: opts.insets.top as f32,
        r: (opts.width - opts.insets.right as i32) as f32,
        b: (opts.height - opts.insets.bottom as i32) as f32,
    };
    let xs = YearScale::new(plot.l, plot.r, &model.x_axis);
    let ys = ValueScale::for_axis(plot.t, plot.b, &model.y_axis);

    let mut bg = skia::Paint::default();
    bg.set_color(th.plot_background);
    canvas.draw_rect(skia::Rect::from_ltrb(plot.l, plot.t, plot.r, plot.b), &bg);

    draw_reference_lines(canvas, plot, &xs, &model.reference_years, th);
    draw_grid(canvas, plot, &ys, model, th);
    draw_axes(canvas, plot, &xs, &ys, model, th, opts.draw_labels);

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(plot.l, plot.t, plot.r, plot.b), skia::ClipOp::Intersect, true);
    for line in &model.lines {
        draw_line(canvas, &xs, &ys, line);
    }
    canvas.restore();

    if let Some(tip) = &model.tooltip {
        draw_tooltip(canvas, plot, &xs, model, tip, th, opts.draw_labels);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    tracing::debug!(lines = model.lines.len(), bytes = data.as_bytes().len(), "rendered chart");
    Ok(data.as_bytes().to_vec())
}

/// Render `model` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(model: &ChartModel, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
    let bytes = render_to_png_bytes(model, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn color(rgb: Rgb, opacity: f32) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (a, r, g, b) = rgb.to_argb(a);
    skia::Color::from_argb(a, r, g, b)
}

fn text_paint(c: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(c);
    p
}

fn font(size: f32) -> skia::Font {
    let mut f = skia::Font::default();
    f.set_size(size);
    f
}

fn draw_reference_lines(canvas: &skia::Canvas, plot: Plot, xs: &YearScale, years: &[usize], th: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(th.reference_line);
    paint.set_stroke_width(1.0);
    for &y in years {
        let x = xs.to_px(y as f64);
        canvas.draw_line((x, plot.t), (x, plot.b), &paint);
    }
}

fn draw_grid(canvas: &skia::Canvas, plot: Plot, ys: &ValueScale, model: &ChartModel, th: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(th.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[2.0, 2.0], 0.0));

    // horizontals only
    for v in model.y_axis.ticks(6) {
        let y = ys.to_px(v);
        canvas.draw_line((plot.l, y), (plot.r, y), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: Plot,
    xs: &YearScale,
    ys: &ValueScale,
    model: &ChartModel,
    th: &Theme,
    labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(th.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    // X and Y axis lines
    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);
    canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &axis_paint);

    let year_ticks = model.x_axis.year_ticks();
    for &yr in &year_ticks {
        let x = xs.to_px(yr as f64);
        canvas.draw_line((x, plot.b), (x, plot.b + 5.0), &axis_paint);
    }
    let value_ticks = model.y_axis.ticks(6);
    for &v in &value_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.l - 5.0, y), (plot.l, y), &axis_paint);
    }

    if !labels {
        return;
    }
    let tick_paint = text_paint(th.tick);
    let tick_font = font(13.0);
    for &yr in &year_ticks {
        let x = xs.to_px(yr as f64);
        canvas.draw_str(yr.to_string(), (x - 4.0, plot.b + 22.0), &tick_font, &tick_paint);
    }
    for &v in &value_ticks {
        let y = ys.to_px(v);
        canvas.draw_str(format_value(v), (plot.l - 60.0, y + 4.0), &tick_font, &tick_paint);
    }

    let label_paint = text_paint(th.axis_label);
    let label_font = font(14.0);
    let mid_x = (plot.l + plot.r) * 0.5;
    canvas.draw_str(&model.x_axis.label, (mid_x - 70.0, plot.b + 50.0), &label_font, &label_paint);
    canvas.draw_str(&model.y_axis.label, (plot.l - 80.0, plot.t - 16.0), &label_font, &label_paint);
}

fn draw_line(canvas: &skia::Canvas, xs: &YearScale, ys: &ValueScale, line: &LineModel) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line.stroke.width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color(line.color, line.stroke.opacity));
    if let Some(intervals) = line.dash.intervals() {
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }

    for run in &line.segments {
        match run.as_slice() {
            [] => {}
            [(x, y)] => {
                // isolated year: a dot instead of a zero-length path
                let mut dot = stroke.clone();
                dot.set_style(skia::paint::Style::Fill);
                dot.set_path_effect(None::<skia::PathEffect>);
                canvas.draw_circle((xs.to_px(*x), ys.to_px(*y)), line.stroke.width, &dot);
            }
            [(x0, y0), rest @ ..] => {
                let mut path = skia::Path::new();
                path.move_to((xs.to_px(*x0), ys.to_px(*y0)));
                for &(x, y) in rest {
                    path.line_to((xs.to_px(x), ys.to_px(y)));
                }
                canvas.draw_path(&path, &stroke);
            }
        }
    }
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    plot: Plot,
    xs: &YearScale,
    model: &ChartModel,
    tip: &growth_core::Tooltip,
    th: &Theme,
    labels: bool,
) {
    let x = xs.to_px(tip.year as f64);
    let mut cross = skia::Paint::default();
    cross.set_color(th.crosshair);
    cross.set_stroke_width(1.0);
    canvas.draw_line((x, plot.t), (x, plot.b), &cross);

    let row_h = 20.0f32;
    let w = 260.0f32;
    let h = 34.0 + row_h * tip.lines.len() as f32;
    // flip to the left of the crosshair near the right edge
    let left = if x + 12.0 + w > plot.r { x - 12.0 - w } else { x + 12.0 };
    let top = plot.t + 8.0;
    let rect = skia::Rect::from_xywh(left, top, w, h);
    let rrect = skia::RRect::new_rect_xy(rect, 8.0, 8.0);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(th.tooltip_fill);
    canvas.draw_rrect(&rrect, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(th.tooltip_border);
    canvas.draw_rrect(&rrect, &border);

    let text = text_paint(th.tooltip_text);
    let title_font = font(14.0);
    let body_font = font(13.0);
    if labels {
        canvas.draw_str(&tip.title, (left + 12.0, top + 22.0), &title_font, &text);
    }
    for (i, entry) in tip.lines.iter().enumerate() {
        let base = top + 34.0 + row_h * i as f32;
        if let Some(line) = model.lines.iter().find(|l| l.id == entry.id) {
            let mut swatch = skia::Paint::default();
            swatch.set_anti_alias(true);
            swatch.set_color(color(line.color, 1.0));
            canvas.draw_circle((left + 16.0, base + 6.0), 4.0, &swatch);
        }
        if labels {
            let s = format!("{}  {}  {}", entry.label, entry.formatted_value, entry.formatted_growth);
            canvas.draw_str(s, (left + 28.0, base + 11.0), &body_font, &text);
        }
    }
}
