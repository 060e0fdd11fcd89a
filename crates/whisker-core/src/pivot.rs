// File: crates/whisker-core/src/pivot.rs
// Summary: Group typed rows into per-series, per-category numeric samples.

use indexmap::IndexMap;

use crate::category::{distinct_sorted, CategoryKey, CategoryOrder};
use crate::rows::Row;

/// Samples keyed by series, then by category. Maps keep first-seen order and
/// only hold pairings that occurred in the input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pivot {
    series: IndexMap<String, IndexMap<CategoryKey, Vec<f64>>>,
}

impl Pivot {
    pub fn new() -> Self { Self::default() }

    /// Append one value; buckets keep arrival order (no sorting here).
    pub fn push(&mut self, series: &str, category: &CategoryKey, value: f64) {
        let idx = match self.series.get_index_of(series) {
            Some(i) => i,
            None => self.series.insert_full(series.to_string(), IndexMap::new()).0,
        };
        let buckets = &mut self.series[idx];
        match buckets.get_mut(category) {
            Some(sample) => sample.push(value),
            None => {
                buckets.insert(category.clone(), vec![value]);
            }
        }
    }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    pub fn series_count(&self) -> usize { self.series.len() }

    /// Number of (series, category) buckets.
    pub fn bucket_count(&self) -> usize { self.series.values().map(|b| b.len()).sum() }

    /// Sample for a pairing; empty when the pairing never occurred.
    pub fn sample(&self, series: &str, category: &CategoryKey) -> &[f64] {
        self.series
            .get(series)
            .and_then(|b| b.get(category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, series: &str, category: &CategoryKey) -> bool {
        self.series.get(series).is_some_and(|b| b.contains_key(category))
    }

    /// Buckets of one series, in first-seen order.
    pub fn buckets(&self, series: &str) -> Option<&IndexMap<CategoryKey, Vec<f64>>> {
        self.series.get(series)
    }

    /// Iterate `(series, buckets)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<CategoryKey, Vec<f64>>)> {
        self.series.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Distinct categories across every series, ordered for the x axis.
    pub fn categories(&self, order: CategoryOrder) -> Vec<CategoryKey> {
        distinct_sorted(self.series.values().flat_map(|b| b.keys().cloned()), order)
    }

    /// Series names ordered for the legend.
    pub fn series_names(&self, order: CategoryOrder) -> Vec<String> {
        distinct_sorted(self.series.keys().map(|s| CategoryKey::new(s.as_str())), order)
            .into_iter()
            .map(|k| k.as_str().to_string())
            .collect()
    }
}

impl<'a> FromIterator<&'a Row> for Pivot {
    fn from_iter<I: IntoIterator<Item = &'a Row>>(iter: I) -> Self {
        let mut p = Pivot::new();
        for row in iter {
            p.push(&row.series, &row.category, row.value);
        }
        p
    }
}

/// Group `rows` by series then category in a single pass.
pub fn pivot_by_category(rows: &[Row]) -> Pivot {
    let pivot: Pivot = rows.iter().collect();
    tracing::debug!(
        rows = rows.len(),
        series = pivot.series_count(),
        buckets = pivot.bucket_count(),
        "pivoted rows"
    );
    pivot
}
