// File: crates/whisker-core/src/format.rs
// Summary: Tooltip and axis-label formatters handed to the option assembler.

use crate::boxplot::{BoundPolicy, BoxSummary};

/// Everything a tooltip may show about one box.
#[derive(Clone, Copy, Debug)]
pub struct TooltipContext<'a> {
    pub series: &'a str,
    pub category: &'a str,
    pub summary: &'a BoxSummary,
    pub policy: BoundPolicy,
    /// Values behind the summary; 0 for a placeholder box.
    pub count: usize,
}

/// Pluggable tooltip text; any `Fn(&TooltipContext) -> String` works.
pub trait TooltipFormatter {
    fn format(&self, ctx: &TooltipContext<'_>) -> String;
}

impl<F> TooltipFormatter for F
where
    F: Fn(&TooltipContext<'_>) -> String,
{
    fn format(&self, ctx: &TooltipContext<'_>) -> String { self(ctx) }
}

/// HTML tooltip listing the five numbers, one per line.
#[derive(Clone, Debug)]
pub struct BoxTooltip {
    /// Caption for the series line, e.g. "Region" or "DUID".
    pub series_label: String,
}

impl BoxTooltip {
    pub fn new(series_label: impl Into<String>) -> Self { Self { series_label: series_label.into() } }
}

impl Default for BoxTooltip {
    fn default() -> Self { Self::new("Series") }
}

impl TooltipFormatter for BoxTooltip {
    fn format(&self, ctx: &TooltipContext<'_>) -> String {
        let s = ctx.summary;
        [
            format!("Whisker Type: <strong>{}</strong>", ctx.policy.label()),
            format!("{}: <strong>{}</strong>", self.series_label, ctx.series),
            format!("Period: <strong>{}</strong>", ctx.category),
            format!("Minimum: <strong>{:.2}</strong>", s.low),
            format!("Q1: <strong>{:.2}</strong>", s.q1),
            format!("Median: <strong>{:.2}</strong>", s.median),
            format!("Q3: <strong>{:.2}</strong>", s.q3),
            format!("Maximum: <strong>{:.2}</strong>", s.high),
        ]
        .join("<br/>")
    }
}

/// Drops tooltips entirely.
pub fn no_tooltip(_: &TooltipContext<'_>) -> String { String::new() }

/// `1234567.0` -> `"1.23M"`.
pub fn millions_label(value: f64) -> String { format!("{:.2}M", value / 1_000_000.0) }

/// `0.256` -> `"25.60%"`.
pub fn percent_label(value: f64) -> String { format!("{:.2}%", value * 100.0) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_tooltip_lists_five_numbers() {
        let s = BoxSummary { low: 1.0, q1: 2.0, median: 3.5, q3: 4.0, high: 5.126 };
        let ctx = TooltipContext { series: "NSW1", category: "2021", summary: &s, policy: BoundPolicy::Extreme, count: 4 };
        let text = BoxTooltip::new("Region").format(&ctx);
        assert!(text.starts_with("Whisker Type: <strong>Min/Max</strong><br/>Region: <strong>NSW1</strong>"));
        assert!(text.contains("Median: <strong>3.50</strong>"));
        assert!(text.ends_with("Maximum: <strong>5.13</strong>"));
    }

    #[test]
    fn functions_are_formatters() {
        let s = BoxSummary::ZERO;
        let ctx = TooltipContext { series: "a", category: "b", summary: &s, policy: BoundPolicy::iqr(), count: 0 };
        fn slash(c: &TooltipContext<'_>) -> String { format!("{}/{}", c.series, c.category) }
        assert_eq!(slash.format(&ctx), "a/b");
        assert_eq!(no_tooltip(&ctx), "");
    }

    #[test]
    fn label_helpers() {
        assert_eq!(millions_label(2_500_000.0), "2.50M");
        assert_eq!(percent_label(0.256), "25.60%");
    }
}
