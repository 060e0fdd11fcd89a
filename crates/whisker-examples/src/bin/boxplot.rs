// File: crates/whisker-examples/src/bin/boxplot.rs
// Summary: Minimal example that renders a two-series box plot to PNG.

use whisker_core::format::BoxTooltip;
use whisker_core::{
    assemble_box_plot_option, pivot_by_category, BoundPolicy, CategoryOrder, Chart, ChartOption, RenderOptions, Row,
};

fn main() {
    // Two regions, three years, with one spike in 2021
    let mut rows = Vec::new();
    for (year, base) in [("2019", 40.0), ("2020", 55.0), ("2021", 70.0)] {
        for k in 0..8 {
            rows.push(Row::new("NSW1", year, base + k as f64 * 2.5));
            rows.push(Row::new("QLD1", year, base * 0.8 + k as f64 * 4.0));
        }
    }
    rows.push(Row::new("QLD1", "2021", 250.0));

    let pivot = pivot_by_category(&rows);
    let categories = pivot.categories(CategoryOrder::Natural);
    let option = assemble_box_plot_option(&pivot, &categories, BoundPolicy::iqr(), &BoxTooltip::new("Region"));

    let chart = Chart::from_option(ChartOption::BoxPlot(option)).with_axis_labels("Year", "$/MWh");
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_boxplot.png");
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
