// File: crates/whisker-core/src/boxplot.rs
// Summary: Five-number box summaries with whisker bound policies and outlier classification.
// Notes:
// - An empty sample produces an all-zero summary so a chart with a missing
//   bucket still renders; `BoxStats::count` tells callers the bucket was empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::quantile::{quartiles, sorted};

/// Default whisker multiplier for the Tukey (IQR) policy.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// How far whiskers reach.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundPolicy {
    /// Whiskers span the whole sample; nothing is an outlier.
    Extreme,
    /// Whiskers stop at `q1 - k*iqr` / `q3 + k*iqr`, clipped to the sample range.
    Iqr { multiplier: f64 },
}

impl BoundPolicy {
    pub const fn iqr() -> Self {
        BoundPolicy::Iqr { multiplier: DEFAULT_IQR_MULTIPLIER }
    }

    /// Map a raw multiplier onto a policy; `0` selects min/max whiskers.
    /// Negative or non-finite multipliers are rejected.
    pub fn from_multiplier(k: f64) -> Result<Self, ChartError> {
        if !k.is_finite() || k < 0.0 {
            return Err(ChartError::UnsupportedOption { option: "whisker", value: format!("{k} iqr") });
        }
        Ok(if k == 0.0 { BoundPolicy::Extreme } else { BoundPolicy::Iqr { multiplier: k } })
    }

    /// Short label used in tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            BoundPolicy::Extreme => "Min/Max",
            BoundPolicy::Iqr { .. } => "IQR",
        }
    }
}

impl Default for BoundPolicy {
    fn default() -> Self { Self::iqr() }
}

impl fmt::Display for BoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundPolicy::Extreme => write!(f, "min/max"),
            BoundPolicy::Iqr { multiplier } => write!(f, "{multiplier} iqr"),
        }
    }
}

impl FromStr for BoundPolicy {
    type Err = ChartError;

    /// Accepts the whisker-type names used by chart controls:
    /// `min/max`, `extreme`, `iqr`, `tukey`, or `<k> iqr` (e.g. `1.5 iqr`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        match t.as_str() {
            "min/max" | "minmax" | "extreme" => return Ok(BoundPolicy::Extreme),
            "iqr" | "tukey" => return Ok(BoundPolicy::iqr()),
            _ => {}
        }
        if let Some(k) = t.strip_suffix("iqr").map(str::trim) {
            if let Ok(k) = k.parse::<f64>() {
                return BoundPolicy::from_multiplier(k)
                    .map_err(|_| ChartError::UnsupportedOption { option: "whisker", value: s.to_string() });
            }
        }
        Err(ChartError::UnsupportedOption { option: "whisker", value: s.to_string() })
    }
}

/// Five-number summary: `low <= q1 <= median <= q3 <= high`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub high: f64,
}

impl BoxSummary {
    pub const ZERO: BoxSummary = BoxSummary { low: 0.0, q1: 0.0, median: 0.0, q3: 0.0, high: 0.0 };

    /// Construct a summary, rejecting values that break the ordering.
    pub fn try_new(low: f64, q1: f64, median: f64, q3: f64, high: f64) -> Result<Self, &'static str> {
        if low > q1 { return Err("low above q1"); }
        if q1 > median { return Err("q1 above median"); }
        if median > q3 { return Err("median above q3"); }
        if q3 > high { return Err("q3 above high"); }
        Ok(Self { low, q1, median, q3, high })
    }

    /// `[low, q1, median, q3, high]`, the layout box-plot series expect.
    pub fn to_array(&self) -> [f64; 5] {
        [self.low, self.q1, self.median, self.q3, self.high]
    }

    pub fn iqr(&self) -> f64 { self.q3 - self.q1 }

    pub fn is_monotonic(&self) -> bool {
        self.low <= self.q1 && self.q1 <= self.median && self.median <= self.q3 && self.q3 <= self.high
    }
}

/// Summary plus the points left outside the whiskers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxStats {
    pub summary: BoxSummary,
    /// Out-of-range values, ascending.
    pub outliers: Vec<f64>,
    /// Number of values the summary was built from.
    pub count: usize,
}

impl BoxStats {
    /// No data: the summary is the zero placeholder.
    pub fn is_empty(&self) -> bool { self.count == 0 }
}

/// Build the box summary of `raw` under `policy`. `raw` need not be sorted.
///
/// Values must be finite; filter NaN/inf before calling. An `Iqr` multiplier
/// that is negative or NaN acts as `0`, so fences never cross the box.
pub fn build_box_summary(raw: &[f64], policy: BoundPolicy) -> BoxStats {
    let asc = sorted(raw);
    let (q1, median, q3) = match quartiles(&asc) {
        Some(q) => q,
        None => return BoxStats::default(),
    };
    let min = asc[0];
    let max = asc[asc.len() - 1];

    let (low, high) = match policy {
        BoundPolicy::Extreme => (min, max),
        BoundPolicy::Iqr { multiplier } => {
            let k = if multiplier > 0.0 { multiplier } else { 0.0 };
            let bound = k * (q3 - q1);
            (min.max(q1 - bound), max.min(q3 + bound))
        }
    };

    let outliers = match policy {
        BoundPolicy::Extreme => Vec::new(),
        BoundPolicy::Iqr { .. } => asc.iter().copied().filter(|&v| v < low || v > high).collect(),
    };

    BoxStats { summary: BoxSummary { low, q1, median, q3, high }, outliers, count: asc.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whisker_names() {
        assert_eq!("min/max".parse::<BoundPolicy>().unwrap(), BoundPolicy::Extreme);
        assert_eq!("IQR".parse::<BoundPolicy>().unwrap(), BoundPolicy::iqr());
        assert_eq!("3 iqr".parse::<BoundPolicy>().unwrap(), BoundPolicy::Iqr { multiplier: 3.0 });
        assert_eq!("0 iqr".parse::<BoundPolicy>().unwrap(), BoundPolicy::Extreme);
        assert!("whatever".parse::<BoundPolicy>().is_err());
    }

    #[test]
    fn try_new_enforces_order() {
        assert!(BoxSummary::try_new(0.0, 1.0, 2.0, 3.0, 4.0).is_ok());
        assert_eq!(BoxSummary::try_new(0.0, 2.0, 1.0, 3.0, 4.0), Err("q1 above median"));
    }

    #[test]
    fn zero_multiplier_is_extreme() {
        assert_eq!(BoundPolicy::from_multiplier(0.0), Ok(BoundPolicy::Extreme));
        assert_eq!(BoundPolicy::from_multiplier(2.0), Ok(BoundPolicy::Iqr { multiplier: 2.0 }));
    }

    #[test]
    fn bad_multipliers_are_rejected() {
        for k in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                BoundPolicy::from_multiplier(k),
                Err(ChartError::UnsupportedOption { option: "whisker", .. })
            ));
        }
        assert!("-1 iqr".parse::<BoundPolicy>().is_err());
    }

    #[test]
    fn negative_multiplier_keeps_whiskers_outside_box() {
        let stats = build_box_summary(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0], BoundPolicy::Iqr { multiplier: -1.0 });
        assert!(stats.summary.is_monotonic(), "{:?}", stats.summary);
        assert_eq!((stats.summary.low, stats.summary.high), (2.5, 5.5));
        assert_eq!(stats.outliers, vec![1.0, 2.0, 6.0, 100.0]);
    }
}
