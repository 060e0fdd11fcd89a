// File: crates/whisker-core/src/category.rs
// Summary: Category keys and the explicit ordering rules used for chart axes and legends.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Label of one axis category (year, DUID, technology, half-hour...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(label: impl Into<String>) -> Self { Self(label.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Numeric reading of the label, if it is a finite number.
    pub fn as_number(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Timestamp reading of the label (RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`).
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        let s = self.0.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }
        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for CategoryKey {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for CategoryKey {
    fn from(s: String) -> Self { Self(s) }
}

impl From<i64> for CategoryKey {
    fn from(v: i64) -> Self { Self(v.to_string()) }
}

/// Ordering rule for distinct category (or series) keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryOrder {
    /// Numeric when every key is a number, lexical otherwise.
    #[default]
    Natural,
    /// Numbers ascending; non-numeric keys after them, lexically.
    Numeric,
    /// Plain string order.
    Lexical,
    /// Timestamps ascending; unparseable keys after them, lexically.
    Chronological,
    /// Order of first appearance in the input rows.
    FirstSeen,
}

impl FromStr for CategoryOrder {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" => Ok(CategoryOrder::Natural),
            "numeric" => Ok(CategoryOrder::Numeric),
            "lexical" => Ok(CategoryOrder::Lexical),
            "chronological" | "time" => Ok(CategoryOrder::Chronological),
            "first-seen" | "first_seen" | "insertion" => Ok(CategoryOrder::FirstSeen),
            _ => Err(ChartError::UnsupportedOption { option: "order", value: s.to_string() }),
        }
    }
}

fn numeric_cmp(a: &CategoryKey, b: &CategoryKey) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn chronological_cmp(a: &CategoryKey, b: &CategoryKey) -> Ordering {
    match (a.as_datetime(), b.as_datetime()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort `keys` in place under `order`. The sort is stable, so `FirstSeen`
/// keeps the incoming order.
pub fn sort_keys(keys: &mut [CategoryKey], order: CategoryOrder) {
    match order {
        CategoryOrder::Natural => {
            if keys.iter().all(|k| k.as_number().is_some()) {
                keys.sort_by(numeric_cmp);
            } else {
                keys.sort();
            }
        }
        CategoryOrder::Numeric => keys.sort_by(numeric_cmp),
        CategoryOrder::Lexical => keys.sort(),
        CategoryOrder::Chronological => keys.sort_by(chronological_cmp),
        CategoryOrder::FirstSeen => {}
    }
}

/// Deduplicate `keys` keeping first appearances, then order them.
pub fn distinct_sorted<I>(keys: I, order: CategoryOrder) -> Vec<CategoryKey>
where
    I: IntoIterator<Item = CategoryKey>,
{
    let mut seen = indexmap::IndexSet::new();
    for k in keys {
        seen.insert(k);
    }
    let mut out: Vec<CategoryKey> = seen.into_iter().collect();
    sort_keys(&mut out, order);
    out
}
