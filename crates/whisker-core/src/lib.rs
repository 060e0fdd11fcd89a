// File: crates/whisker-core/src/lib.rs
// Summary: Core library entry point; box-plot statistics, pivoting, chart options, registry and preview rendering.

pub mod quantile;
pub mod boxplot;
pub mod category;
pub mod rows;
pub mod pivot;
pub mod format;
pub mod option;
pub mod plugin;
pub mod error;
pub mod axis;
pub mod grid;
pub mod types;
pub mod theme;
pub mod chart;

pub use quantile::{quantile, sort_ascending};
pub use boxplot::{build_box_summary, BoundPolicy, BoxStats, BoxSummary};
pub use category::{CategoryKey, CategoryOrder};
pub use rows::{MissingValue, Row, RowSchema};
pub use pivot::{pivot_by_category, Pivot};
pub use format::{BoxTooltip, TooltipContext, TooltipFormatter};
pub use option::{
    assemble_box_plot_option, assemble_box_plot_option_for, assemble_stacked_bar_option, Aggregate,
    BarChartOption, BarSeries, BoxPlotOption, BoxSeries, ChartOption,
};
pub use plugin::{BuildParams, ChartPlugin, ChartRegistry};
pub use error::ChartError;
pub use chart::{Chart, RenderOptions};
pub use theme::Theme;
