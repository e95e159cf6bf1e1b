// File: crates/growth-demo/src/main.rs
// Summary: Demo loads the built-in company table (or a CSV), applies toggles, prints tooltips,
// and writes the chart model as JSON plus a rendered PNG.

use anyhow::{Context, Result};
use clap::Parser;
use growth_core::{dataset, load_csv_path, GrowthChart, SeriesStore};
use growth_render_skia::{render_to_png, RenderOptions, Theme};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "growth-demo")]
#[command(about = "Growth trajectories: tooltips, chart model JSON and PNG")]
struct Args {
    /// CSV with id, category and one column per year; built-in companies when omitted
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Only print (and highlight) this year
    #[arg(long)]
    year: Option<usize>,

    /// Logarithmic value axis
    #[arg(long)]
    log: bool,

    /// Show every company instead of the curated set
    #[arg(long = "all")]
    show_all: bool,

    /// Hide a company (repeatable)
    #[arg(long)]
    hide: Vec<String>,

    /// Show a company (repeatable)
    #[arg(long)]
    show: Vec<String>,

    /// Emphasize one company's line
    #[arg(long)]
    hover: Option<String>,

    /// Color theme: light or dark
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let store = load_store(args.csv.as_deref())?;
    println!("Loaded {} companies over {} years", store.len(), store.max_len());

    let mut chart = GrowthChart::from_store(store, dataset::default_visibility());
    if args.show_all {
        chart.set_all(true);
    }
    // toggles only flip ids whose current state differs from what was asked
    for id in &args.hide {
        if chart.is_visible(id) {
            chart.toggle(id);
        }
    }
    for id in &args.show {
        if !chart.is_visible(id) {
            chart.toggle(id);
        }
    }
    chart.set_logarithmic(args.log);
    chart.hover(args.hover.as_deref());

    for group in chart.legend() {
        println!("{}", group.heading);
        for item in &group.items {
            println!("  [{}] {} {}", if item.visible { 'x' } else { ' ' }, item.color, item.id);
        }
    }
    let domain = chart.domain();
    println!("Value axis: [{}, {}] ({:?})", domain.min, domain.max, chart.options.scale);

    let years: Vec<usize> = match args.year {
        Some(y) => vec![y],
        None => (0..chart.rows().len()).collect(),
    };
    for y in years {
        match chart.tooltip(y) {
            Some(tip) => {
                println!("{}", tip.title);
                for l in &tip.lines {
                    println!("  #{} {:<22} {:>7} {:>9}", l.rank, l.label, l.formatted_value, l.formatted_growth);
                }
            }
            None => println!("Year {y}: nothing to show"),
        }
    }

    let out_dir = args.out;
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let model = chart.model(args.year);
    let json_path = out_dir.join("growth_model.json");
    let json = serde_json::to_string_pretty(&model).context("serializing chart model")?;
    std::fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;
    println!("Wrote {}", json_path.display());

    let theme = Theme::named(&args.theme).with_context(|| format!("unknown theme '{}'", args.theme))?;
    let opts = RenderOptions { theme, ..RenderOptions::default() };
    let png_path = out_dir.join("growth.png");
    render_to_png(&model, &opts, &png_path).with_context(|| format!("rendering {}", png_path.display()))?;
    println!("Wrote {}", png_path.display());

    Ok(())
}

fn load_store(csv: Option<&Path>) -> Result<SeriesStore> {
    match csv {
        Some(path) => {
            println!("Using input file: {}", path.display());
            load_csv_path(path).with_context(|| format!("failed to load CSV '{}'", path.display()))
        }
        None => dataset::companies().context("built-in dataset"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn repeatable_toggles_and_defaults() {
        let args = Args::try_parse_from([
            "growth-demo", "--hide", "Tesla", "--hide", "Cursor", "--show", "Zoom", "--log", "--year", "3",
        ])
        .unwrap();
        assert_eq!(args.hide, vec!["Tesla", "Cursor"]);
        assert_eq!(args.show, vec!["Zoom"]);
        assert!(args.log && !args.show_all);
        assert_eq!(args.year, Some(3));
        assert_eq!(args.theme, "light");
        assert_eq!(args.out, PathBuf::from("target/out"));
        assert!(args.csv.is_none());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Args::try_parse_from(["growth-demo", "--year", "three"]).is_err());
        assert!(Args::try_parse_from(["growth-demo", "--bogus"]).is_err());
    }
}
