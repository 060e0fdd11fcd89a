// File: crates/whisker-core/src/chart.rs
// Summary: Chart wrapper around an assembled option and headless PNG preview rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::grid::value_ticks;
use crate::option::{BarChartOption, BoxPlotOption, ChartOption};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};

/// Most category labels drawn along X; denser axes show every n-th label.
const MAX_X_LABELS: usize = 20;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is platform dependent; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub option: ChartOption,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
}

impl Chart {
    /// Wrap `option`, deriving axes that cover every box, outlier or stack.
    pub fn from_option(option: ChartOption) -> Self {
        let categories = option.categories().to_vec();
        let y_axis = match &option {
            ChartOption::BoxPlot(o) => {
                let values = o
                    .series
                    .iter()
                    .flat_map(|s| {
                        s.box_values
                            .iter()
                            .flatten()
                            .copied()
                            .chain(s.outliers.iter().map(|(_, v)| *v))
                    })
                    .chain(o.y_axis_max);
                ValueAxis::covering("Value", values)
            }
            ChartOption::StackedBar(o) => ValueAxis::covering("Value", o.stack_totals()),
        };
        Self { option, x_axis: CategoryAxis::new("Period", categories), y_axis }
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis.label = x.into();
        self.y_axis.label = y.into();
        self
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let plot = PlotRect::inside(opts.width, opts.height, &opts.insets);
        tracing::debug!(
            width = opts.width,
            height = opts.height,
            categories = self.x_axis.categories.len(),
            "rendering chart"
        );

        draw_grid(canvas, &plot, &self.y_axis, &opts.theme);
        draw_axes(canvas, &plot, &self.x_axis, &self.y_axis, opts);

        match &self.option {
            ChartOption::BoxPlot(o) => draw_box_series(canvas, &plot, &self.x_axis, &self.y_axis, o, &opts.theme),
            ChartOption::StackedBar(o) => draw_stacked_bars(canvas, &plot, &self.x_axis, &self.y_axis, o, &opts.theme),
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn y_px(plot: &PlotRect, y_axis: &ValueAxis, v: f64) -> f32 {
    plot.bottom - y_axis.fraction(v) as f32 * plot.height()
}

fn x_px(plot: &PlotRect, x_axis: &CategoryAxis, i: usize) -> f32 {
    plot.left + x_axis.slot_center(i) as f32 * plot.width()
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, y_axis: &ValueAxis, theme: &Theme) {
    let paint = stroke(theme.grid, 1.0);
    for v in value_ticks(y_axis.min, y_axis.max, 6) {
        let y = y_px(plot, y_axis, v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, x: &CategoryAxis, y: &ValueAxis, opts: &RenderOptions) {
    let axis_paint = stroke(opts.theme.axis_line, 1.5);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);

    if !opts.draw_labels {
        return;
    }
    let text = fill(opts.theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    let every = x.categories.len().div_ceil(MAX_X_LABELS).max(1);
    for (i, label) in x.categories.iter().enumerate().step_by(every) {
        let cx = x_px(plot, x, i);
        canvas.draw_str(label, (cx - 3.0 * label.len() as f32, plot.bottom + 16.0), &font, &text);
    }
    for v in value_ticks(y.min, y.max, 6) {
        let label = format!("{v:.0}");
        canvas.draw_str(&label, (plot.left - 8.0 - 7.0 * label.len() as f32, y_px(plot, y, v) + 4.0), &font, &text);
    }

    font.set_size(14.0);
    canvas.draw_str(&x.label, (plot.right - 80.0, plot.bottom + 40.0), &font, &text);
    canvas.draw_str(&y.label, (plot.left - 56.0, plot.top - 8.0), &font, &text);
}

fn draw_box_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &CategoryAxis,
    y_axis: &ValueAxis,
    option: &BoxPlotOption,
    theme: &Theme,
) {
    let n_series = option.series.len();
    if n_series == 0 {
        return;
    }
    let slot_px = x_axis.slot_width() as f32 * plot.width();
    let lane_px = slot_px * 0.8 / n_series as f32;
    let half = (lane_px * 0.35).max(1.0);
    let median_paint = stroke(theme.median, 2.0);
    let outlier_paint = fill(theme.outlier);

    for (si, series) in option.series.iter().enumerate() {
        let color = theme.series_color(si);
        let line = stroke(color, 1.5);
        let mut body = fill(color);
        body.set_alpha(96);
        let lane_offset = -slot_px * 0.4 + lane_px * (si as f32 + 0.5);

        for (ci, b) in series.box_values.iter().enumerate() {
            let [low, q1, median, q3, high] = *b;
            let x = x_px(plot, x_axis, ci) + lane_offset;
            let (y_low, y_q1, y_med, y_q3, y_high) = (
                y_px(plot, y_axis, low),
                y_px(plot, y_axis, q1),
                y_px(plot, y_axis, median),
                y_px(plot, y_axis, q3),
                y_px(plot, y_axis, high),
            );

            // whiskers and caps
            canvas.draw_line((x, y_high), (x, y_q3), &line);
            canvas.draw_line((x, y_q1), (x, y_low), &line);
            canvas.draw_line((x - half * 0.5, y_high), (x + half * 0.5, y_high), &line);
            canvas.draw_line((x - half * 0.5, y_low), (x + half * 0.5, y_low), &line);

            // box body; keep at least one pixel tall so flat boxes stay visible
            let rect = skia::Rect::from_ltrb(x - half, y_q3, x + half, y_q1.max(y_q3 + 1.0));
            canvas.draw_rect(rect, &body);
            canvas.draw_rect(rect, &line);
            canvas.draw_line((x - half, y_med), (x + half, y_med), &median_paint);
        }

        for (cat, v) in &series.outliers {
            if let Some(ci) = x_axis.categories.iter().position(|c| c == cat) {
                let x = x_px(plot, x_axis, ci) + lane_offset;
                canvas.draw_circle((x, y_px(plot, y_axis, *v)), 2.5, &outlier_paint);
            }
        }
    }
}

fn draw_stacked_bars(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &CategoryAxis,
    y_axis: &ValueAxis,
    option: &BarChartOption,
    theme: &Theme,
) {
    let slot_px = x_axis.slot_width() as f32 * plot.width();
    let half = (slot_px * 0.35).max(1.0);
    let mut base_pos = vec![0.0f64; x_axis.categories.len()];
    let mut base_neg = vec![0.0f64; x_axis.categories.len()];

    for (si, series) in option.series.iter().enumerate() {
        let paint = fill(theme.series_color(si));
        for (ci, &v) in series.data.iter().enumerate().take(x_axis.categories.len()) {
            let base = if v >= 0.0 { &mut base_pos[ci] } else { &mut base_neg[ci] };
            let from = *base;
            *base += v;
            let x = x_px(plot, x_axis, ci);
            let (y0, y1) = (y_px(plot, y_axis, from), y_px(plot, y_axis, *base));
            let rect = skia::Rect::from_ltrb(x - half, y0.min(y1), x + half, y0.max(y1));
            canvas.draw_rect(rect, &paint);
        }
    }
}
