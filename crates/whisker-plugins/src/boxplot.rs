// File: crates/whisker-plugins/src/boxplot.rs
// Summary: Box-plot chart kinds: one box per (series, period) with an HTML tooltip.

use whisker_core::format::BoxTooltip;
use whisker_core::{
    assemble_box_plot_option_for, pivot_by_category, BuildParams, ChartError, ChartOption, ChartPlugin, Row,
    RowSchema,
};

/// Grouped box plot; which columns are series/period/value is set by the schema.
#[derive(Clone, Debug)]
pub struct BoxPlotChart {
    id: &'static str,
    name: &'static str,
    schema: RowSchema,
    tooltip: BoxTooltip,
}

impl BoxPlotChart {
    pub fn new(id: &'static str, name: &'static str, schema: RowSchema, series_label: &str) -> Self {
        Self { id, name, schema, tooltip: BoxTooltip::new(series_label) }
    }

    /// Price distribution per region and period.
    pub fn multi_boxplot() -> Self {
        Self::new(
            "multi_boxplot",
            "Multiple Boxplot",
            RowSchema::new("Period", "SpotPrice").with_series("Region"),
            "Region",
        )
    }

    /// Generation distribution per dispatchable unit and year.
    pub fn duid_generation() -> Self {
        Self::new(
            "duid_generation",
            "DUID Generation",
            RowSchema::new("Year", "Generation").with_series("Duid"),
            "DUID",
        )
    }

    /// Replace the field mapping, e.g. for a differently named dataset.
    pub fn with_schema(mut self, schema: RowSchema) -> Self {
        self.schema = schema;
        self
    }
}

impl ChartPlugin for BoxPlotChart {
    fn id(&self) -> &'static str { self.id }

    fn name(&self) -> &'static str { self.name }

    fn schema(&self) -> RowSchema { self.schema.clone() }

    fn build(&self, rows: &[Row], params: &BuildParams) -> Result<ChartOption, ChartError> {
        let pivot = pivot_by_category(rows);
        let categories = pivot.categories(params.order);
        let series = pivot.series_names(params.order);
        tracing::debug!(chart = self.id, series = series.len(), categories = categories.len(), "building box plot");
        Ok(ChartOption::BoxPlot(assemble_box_plot_option_for(
            &pivot,
            &series,
            &categories,
            params.bound,
            &self.tooltip,
        )))
    }
}
