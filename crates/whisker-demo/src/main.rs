// File: crates/whisker-demo/src/main.rs
// Summary: Demo loads a CSV, builds the selected chart kind, and writes its option JSON plus a PNG preview.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use whisker_core::{theme, Aggregate, BoundPolicy, BuildParams, CategoryOrder, Chart, ChartRegistry, RenderOptions};
use whisker_plugins::{BoxPlotChart, SpotPriceHistogram};

/// Render box-plot and stacked-bar charts from tabular data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with a header row
    input: PathBuf,

    /// Chart kind to build (see --list)
    #[arg(short, long, default_value = "multi_boxplot")]
    chart: String,

    /// Whisker type: "min/max", "iqr" or "<k> iqr"
    #[arg(short, long, default_value = "iqr")]
    whisker: BoundPolicy,

    /// Category ordering: natural, numeric, lexical, chronological, first-seen
    #[arg(short, long, default_value = "natural")]
    order: CategoryOrder,

    /// Bar aggregation for the histogram: sum, mean or share
    #[arg(short, long, default_value = "share")]
    aggregate: Aggregate,

    /// Skip records whose value cell is empty instead of failing
    #[arg(long)]
    skip_missing: bool,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Preview theme: dark, light, solarized-light
    #[arg(long, default_value = "dark")]
    theme: String,

    /// List chart kinds and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Logging controlled by RUST_LOG, info by default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let registry = registry(cli.aggregate)?;

    if cli.list {
        for id in registry.ids() {
            if let Some(plugin) = registry.get(id) {
                let schema = plugin.schema();
                println!(
                    "{id:<24} {} [{} / {} / {}]",
                    plugin.name(),
                    schema.series_field.as_deref().unwrap_or("-"),
                    schema.category_field,
                    schema.value_field
                );
            }
        }
        return Ok(());
    }

    let plugin = registry
        .get(&cli.chart)
        .with_context(|| format!("unknown chart '{}' (known: {})", cli.chart, registry.ids().join(", ")))?;

    let records = load_records(&cli.input).with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    info!(records = records.len(), input = %cli.input.display(), "loaded records");
    if records.is_empty() {
        anyhow::bail!("no records loaded; check the header row and delimiter");
    }

    let mut schema = plugin.schema();
    if cli.skip_missing {
        schema = schema.skip_missing();
    }
    let rows = schema.decode(&records)?;
    let params = BuildParams { bound: cli.whisker, order: cli.order };
    let option = registry.build(&cli.chart, &rows, &params)?;
    info!(chart = %cli.chart, categories = option.categories().len(), series = option.series_names().len(), "built option");

    std::fs::create_dir_all(&cli.out_dir).with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let out_json = out_name_with(&cli.out_dir, &cli.input, &cli.chart, "json");
    std::fs::write(&out_json, serde_json::to_string_pretty(&option)?)
        .with_context(|| format!("writing {}", out_json.display()))?;
    println!("Wrote {}", out_json.display());

    let y_label = schema.value_field.clone();
    let chart = Chart::from_option(option).with_axis_labels(schema.category_field, y_label);
    let opts = RenderOptions { theme: theme::find(&cli.theme), ..RenderOptions::default() };
    let out_png = out_name_with(&cli.out_dir, &cli.input, &cli.chart, "png");
    chart.render_to_png(&opts, &out_png)?;
    println!("Wrote {}", out_png.display());
    Ok(())
}

fn registry(aggregate: Aggregate) -> Result<ChartRegistry> {
    Ok(ChartRegistry::new()
        .with(BoxPlotChart::multi_boxplot())?
        .with(BoxPlotChart::duid_generation())?
        .with(SpotPriceHistogram::new(aggregate))?)
}

/// Read every CSV row as a JSON object of strings keyed by header; empty cells become null.
fn load_records(path: &Path) -> Result<Vec<Value>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    info!(headers = ?headers.iter().collect::<Vec<_>>(), "csv headers");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let obj: Map<String, Value> = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, cell)| {
                let v = if cell.is_empty() { Value::Null } else { Value::String(cell.to_string()) };
                (h.to_string(), v)
            })
            .collect();
        out.push(Value::Object(obj));
    }
    Ok(out)
}

fn out_name_with(dir: &Path, input: &Path, chart: &str, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    dir.join(format!("{stem}_{chart}.{ext}"))
}
