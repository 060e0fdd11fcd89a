// File: crates/whisker-core/tests/snapshot.rs
// Purpose: Golden snapshots for box-plot and stacked-bar previews with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes with labels off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns without failing to ease first run.
// - Layout facts (size, background, bar fills, median strokes) are asserted in every mode.

use whisker_core::format::no_tooltip;
use whisker_core::{
    assemble_box_plot_option, assemble_stacked_bar_option, pivot_by_category, Aggregate, BoundPolicy, CategoryOrder,
    Chart, ChartOption, RenderOptions, Row, Theme,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

type Rgba = [u8; 4];

fn rgba(c: skia_safe::Color) -> Rgba { [c.r(), c.g(), c.b(), c.a()] }

fn near(a: Rgba, b: Rgba) -> bool { a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 8) }

fn decode(bytes: &[u8]) -> image::RgbaImage { image::load_from_memory(bytes).expect("decode png").to_rgba8() }

fn render(option: ChartOption) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 320;
    opts.draw_labels = false; // deterministic
    Chart::from_option(option).render_to_png_bytes(&opts).expect("render bytes")
}

fn rows() -> Vec<Row> {
    let values = [
        ("A", "1", [2.0, 3.0, 4.0, 5.0, 9.0]),
        ("A", "2", [1.0, 1.5, 2.0, 2.5, 3.0]),
        ("B", "1", [4.0, 4.5, 5.0, 6.0, 7.0]),
        ("B", "2", [0.5, 2.0, 3.5, 5.0, 30.0]),
    ];
    values
        .iter()
        .flat_map(|(s, c, vs)| vs.iter().map(move |v| Row::new(*s, *c, *v)))
        .collect()
}

#[test]
fn golden_box_plot() {
    let p = pivot_by_category(&rows());
    let cats = p.categories(CategoryOrder::Natural);
    let option = assemble_box_plot_option(&p, &cats, BoundPolicy::iqr(), &no_tooltip);
    let bytes = render(ChartOption::BoxPlot(option));

    let img = decode(&bytes);
    let theme = Theme::dark();
    assert_eq!(img.dimensions(), (480, 320));
    assert_eq!(img.get_pixel(2, 2).0, rgba(theme.background));
    // plot area is x 72..456, y 24..264; every box draws a median stroke there
    let medians = img
        .enumerate_pixels()
        .filter(|(x, y, p)| (72..456).contains(x) && (24..264).contains(y) && near(p.0, rgba(theme.median)))
        .count();
    assert!(medians > 0, "no median strokes drawn");

    write_or_compare(&snapshot_path("box_plot.png"), &bytes);
}

#[test]
fn golden_stacked_bars() {
    let p = pivot_by_category(&rows());
    let cats = p.categories(CategoryOrder::Natural);
    let names = p.series_names(CategoryOrder::Lexical);
    let option = assemble_stacked_bar_option(&p, &names, &cats, Aggregate::Sum, "total");
    let bytes = render(ChartOption::StackedBar(option));

    // Totals 49.5 and 51 put the axis at 0..60; the plot spans y 24..264, so
    // in slot "1" (x = 168) series A fills 0..23 (y 172..264) and B 23..49.5 (y 66..172).
    let img = decode(&bytes);
    let theme = Theme::dark();
    assert_eq!(img.dimensions(), (480, 320));
    assert_eq!(img.get_pixel(2, 2).0, rgba(theme.background));
    assert_eq!(img.get_pixel(168, 230).0, rgba(theme.series_color(0)));
    assert_eq!(img.get_pixel(168, 140).0, rgba(theme.series_color(1)));
    assert_eq!(img.get_pixel(168, 40).0, rgba(theme.background));

    write_or_compare(&snapshot_path("stacked_bars.png"), &bytes);
}
