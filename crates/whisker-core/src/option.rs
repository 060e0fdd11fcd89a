// File: crates/whisker-core/src/option.rs
// Summary: Library-agnostic chart options (box plot, stacked bars) assembled from pivoted samples.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::nice_ceiling;
use crate::boxplot::{build_box_summary, BoundPolicy};
use crate::category::CategoryKey;
use crate::error::ChartError;
use crate::format::{TooltipContext, TooltipFormatter};
use crate::pivot::Pivot;

/// Any option a chart plugin can produce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartOption {
    BoxPlot(BoxPlotOption),
    StackedBar(BarChartOption),
}

impl ChartOption {
    pub fn categories(&self) -> &[String] {
        match self {
            ChartOption::BoxPlot(o) => &o.x_axis_categories,
            ChartOption::StackedBar(o) => &o.x_axis_categories,
        }
    }

    pub fn series_names(&self) -> Vec<&str> {
        match self {
            ChartOption::BoxPlot(o) => o.series.iter().map(|s| s.name.as_str()).collect(),
            ChartOption::StackedBar(o) => o.series.iter().map(|s| s.name.as_str()).collect(),
        }
    }
}

/// One box-plot series aligned to `BoxPlotOption::x_axis_categories`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSeries {
    pub name: String,
    /// `[low, q1, median, q3, high]` per category.
    pub box_values: Vec<[f64; 5]>,
    /// `(category, value)` points outside the whiskers.
    pub outliers: Vec<(String, f64)>,
    /// Tooltip text per category (same length as `box_values`).
    pub tooltips: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotOption {
    pub x_axis_categories: Vec<String>,
    pub series: Vec<BoxSeries>,
    /// Largest box value rounded up to a multiple of ten.
    pub y_axis_max: Option<f64>,
    pub policy: BoundPolicy,
}

/// Assemble a box-plot option with series in the pivot's first-seen order.
pub fn assemble_box_plot_option<F>(
    pivot: &Pivot,
    categories: &[CategoryKey],
    policy: BoundPolicy,
    formatter: &F,
) -> BoxPlotOption
where
    F: TooltipFormatter + ?Sized,
{
    let names: Vec<String> = pivot.iter().map(|(name, _)| name.to_string()).collect();
    assemble_box_plot_option_for(pivot, &names, categories, policy, formatter)
}

/// Assemble a box-plot option for the given series, in the given order.
/// A series/category pairing absent from the pivot is summarized as an
/// empty sample, i.e. an all-zero box.
pub fn assemble_box_plot_option_for<F>(
    pivot: &Pivot,
    series_names: &[String],
    categories: &[CategoryKey],
    policy: BoundPolicy,
    formatter: &F,
) -> BoxPlotOption
where
    F: TooltipFormatter + ?Sized,
{
    let mut series = Vec::with_capacity(series_names.len());
    for name in series_names {
        let mut box_values = Vec::with_capacity(categories.len());
        let mut tooltips = Vec::with_capacity(categories.len());
        let mut outliers = Vec::new();
        for cat in categories {
            let stats = build_box_summary(pivot.sample(name, cat), policy);
            box_values.push(stats.summary.to_array());
            tooltips.push(formatter.format(&TooltipContext {
                series: name,
                category: cat.as_str(),
                summary: &stats.summary,
                policy,
                count: stats.count,
            }));
            outliers.extend(stats.outliers.into_iter().map(|v| (cat.as_str().to_string(), v)));
        }
        series.push(BoxSeries { name: name.clone(), box_values, outliers, tooltips });
    }

    let y_axis_max = series
        .iter()
        .flat_map(|s| s.box_values.iter().flatten().copied())
        .reduce(f64::max)
        .map(nice_ceiling);

    BoxPlotOption {
        x_axis_categories: categories.iter().map(|c| c.as_str().to_string()).collect(),
        series,
        y_axis_max,
        policy,
    }
}

/// How a bucket collapses into one bar segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    #[default]
    Sum,
    Mean,
    /// Bucket sum divided by the category total across all series.
    Share,
}

impl FromStr for Aggregate {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "value" => Ok(Aggregate::Sum),
            "mean" | "avg" | "average" => Ok(Aggregate::Mean),
            "share" | "proportion" | "percentage" => Ok(Aggregate::Share),
            _ => Err(ChartError::UnsupportedOption { option: "aggregate", value: s.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub name: String,
    pub stack: String,
    pub data: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartOption {
    pub x_axis_categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub aggregate: Aggregate,
}

impl BarChartOption {
    /// Height of each full stack, per category.
    pub fn stack_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.x_axis_categories.len()];
        for s in &self.series {
            for (t, v) in totals.iter_mut().zip(&s.data) {
                *t += v;
            }
        }
        totals
    }
}

/// Assemble stacked bars: one series per pivot series, one segment per category.
/// Absent pairings contribute 0.
pub fn assemble_stacked_bar_option(
    pivot: &Pivot,
    series_names: &[String],
    categories: &[CategoryKey],
    aggregate: Aggregate,
    stack: &str,
) -> BarChartOption {
    let series: Vec<BarSeries> = series_names
        .iter()
        .map(|name| {
            let data = categories
                .iter()
                .map(|cat| {
                    let sample = pivot.sample(name, cat);
                    let sum: f64 = sample.iter().sum();
                    match aggregate {
                        Aggregate::Mean if !sample.is_empty() => sum / sample.len() as f64,
                        Aggregate::Mean => 0.0,
                        Aggregate::Sum | Aggregate::Share => sum,
                    }
                })
                .collect();
            BarSeries { name: name.clone(), stack: stack.to_string(), data }
        })
        .collect();

    let mut option = BarChartOption {
        x_axis_categories: categories.iter().map(|c| c.as_str().to_string()).collect(),
        series,
        aggregate,
    };
    if aggregate == Aggregate::Share {
        let totals = option.stack_totals();
        for s in &mut option.series {
            for (v, t) in s.data.iter_mut().zip(&totals) {
                *v = if *t == 0.0 { 0.0 } else { *v / t };
            }
        }
    }
    option
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::no_tooltip;
    use crate::rows::Row;
    use crate::pivot::pivot_by_category;

    #[test]
    fn missing_pairing_is_zero_box() {
        let p = pivot_by_category(&[Row::new("A", "1", 5.0), Row::new("B", "2", 7.0)]);
        let cats = [CategoryKey::from("1"), CategoryKey::from("2")];
        let o = assemble_box_plot_option(&p, &cats, BoundPolicy::Extreme, &no_tooltip);
        assert_eq!(o.series[0].box_values[1], [0.0; 5]);
        assert_eq!(o.series[1].box_values[0], [0.0; 5]);
        assert_eq!(o.series[1].box_values[1], [7.0; 5]);
        assert_eq!(o.y_axis_max, Some(10.0));
    }

    #[test]
    fn serializes_camel_case_with_kind_tag() {
        let p = pivot_by_category(&[Row::new("A", "1", 5.0)]);
        let o = ChartOption::BoxPlot(assemble_box_plot_option(&p, &[CategoryKey::from("1")], BoundPolicy::iqr(), &no_tooltip));
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["kind"], "box_plot");
        assert_eq!(v["xAxisCategories"][0], "1");
        assert_eq!(v["series"][0]["boxValues"][0][2], 5.0);
    }

    #[test]
    fn mean_of_empty_bucket_is_zero() {
        let p = pivot_by_category(&[Row::new("A", "1", 2.0), Row::new("A", "1", 4.0)]);
        let cats = [CategoryKey::from("1"), CategoryKey::from("2")];
        let o = assemble_stacked_bar_option(&p, &["A".to_string()], &cats, Aggregate::Mean, "s");
        assert_eq!(o.series[0].data, vec![3.0, 0.0]);
    }
}
