// File: crates/growth-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart surface colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub reference_line: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    /// Preset by name (`light` or `dark`, any case).
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xf8, 0xf9, 0xfa),
            plot_background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            reference_line: skia::Color::from_argb(12, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 0xe1, 0xe5, 0xe9),
            axis_label: skia::Color::from_argb(255, 0x64, 0x74, 0x8b),
            tick: skia::Color::from_argb(255, 0x64, 0x74, 0x8b),
            crosshair: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_fill: skia::Color::from_argb(242, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 0xe1, 0xe5, 0xe9),
            tooltip_text: skia::Color::from_argb(255, 0x1a, 0x1a, 0x1a),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            reference_line: skia::Color::from_argb(255, 32, 32, 36),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_fill: skia::Color::from_argb(235, 30, 30, 36),
            tooltip_border: skia::Color::from_argb(255, 70, 70, 80),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}
