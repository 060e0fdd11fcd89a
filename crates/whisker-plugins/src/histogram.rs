// File: crates/whisker-plugins/src/histogram.rs
// Summary: Spot price histogram: stacked bars of price buckets per period, as sums or shares.

use whisker_core::{
    assemble_stacked_bar_option, pivot_by_category, Aggregate, BuildParams, ChartError, ChartOption, ChartPlugin,
    Row, RowSchema,
};

#[derive(Clone, Debug)]
pub struct SpotPriceHistogram {
    pub aggregate: Aggregate,
}

impl Default for SpotPriceHistogram {
    fn default() -> Self { Self { aggregate: Aggregate::Share } }
}

impl SpotPriceHistogram {
    pub fn new(aggregate: Aggregate) -> Self { Self { aggregate } }
}

impl ChartPlugin for SpotPriceHistogram {
    fn id(&self) -> &'static str { "spot_price_histogram" }

    fn name(&self) -> &'static str { "Spot Price Histogram" }

    fn schema(&self) -> RowSchema { RowSchema::new("Period", "Value").with_series("PriceBin") }

    /// Whisker policy does not apply to bars; only the ordering is used.
    fn build(&self, rows: &[Row], params: &BuildParams) -> Result<ChartOption, ChartError> {
        let pivot = pivot_by_category(rows);
        let categories = pivot.categories(params.order);
        let bins = pivot.series_names(params.order);
        Ok(ChartOption::StackedBar(assemble_stacked_bar_option(
            &pivot,
            &bins,
            &categories,
            self.aggregate,
            "SpotPrice",
        )))
    }
}
