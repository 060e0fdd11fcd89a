// File: crates/whisker-core/src/rows.rs
// Summary: Typed rows and the schema that decodes loosely-typed JSON records into them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::CategoryKey;
use crate::error::ChartError;

/// One measurement: which series it belongs to, which category, and its value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub series: String,
    pub category: CategoryKey,
    pub value: f64,
}

impl Row {
    pub fn new(series: impl Into<String>, category: impl Into<CategoryKey>, value: f64) -> Self {
        Self { series: series.into(), category: category.into(), value }
    }
}

/// What to do with a record whose value field is absent or null.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValue {
    #[default]
    Reject,
    Skip,
}

/// Field names to read from each record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowSchema {
    pub category_field: String,
    pub value_field: String,
    /// When absent, every row's series is named after `value_field`.
    pub series_field: Option<String>,
    #[serde(default)]
    pub missing: MissingValue,
}

impl RowSchema {
    pub fn new(category_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            category_field: category_field.into(),
            value_field: value_field.into(),
            series_field: None,
            missing: MissingValue::Reject,
        }
    }

    pub fn with_series(mut self, series_field: impl Into<String>) -> Self {
        self.series_field = Some(series_field.into());
        self
    }

    pub fn skip_missing(mut self) -> Self {
        self.missing = MissingValue::Skip;
        self
    }

    /// Decode a batch of records (as returned by the chart data endpoint).
    pub fn decode(&self, records: &[Value]) -> Result<Vec<Row>, ChartError> {
        let mut out = Vec::with_capacity(records.len());
        for (i, rec) in records.iter().enumerate() {
            if let Some(row) = self.decode_one(i, rec)? {
                out.push(row);
            }
        }
        tracing::debug!(records = records.len(), rows = out.len(), "decoded rows");
        Ok(out)
    }

    /// Decode record `index`; `Ok(None)` means it was skipped for a missing value.
    pub fn decode_one(&self, index: usize, record: &Value) -> Result<Option<Row>, ChartError> {
        let obj = record.as_object().ok_or(ChartError::NotAnObject { row: index })?;

        let category = obj
            .get(&self.category_field)
            .map(key_label)
            .ok_or_else(|| ChartError::MissingField { row: index, field: self.category_field.clone() })?;

        let series = match &self.series_field {
            Some(field) => obj
                .get(field)
                .map(key_label)
                .ok_or_else(|| ChartError::MissingField { row: index, field: field.clone() })?,
            None => self.value_field.clone(),
        };

        let value = match obj.get(&self.value_field) {
            None | Some(Value::Null) => {
                return match self.missing {
                    MissingValue::Skip => Ok(None),
                    MissingValue::Reject => {
                        Err(ChartError::MissingField { row: index, field: self.value_field.clone() })
                    }
                };
            }
            Some(v) => numeric(index, &self.value_field, v)?,
        };

        Ok(Some(Row { series, category: CategoryKey::new(category), value }))
    }
}

/// Label for a key field. Non-string values keep their literal JSON text, so a
/// null key becomes a `"null"` bucket rather than an error.
fn key_label(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn numeric(row: usize, field: &str, v: &Value) -> Result<f64, ChartError> {
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let x = parsed.ok_or_else(|| ChartError::NonNumeric {
        row,
        field: field.to_string(),
        found: v.to_string(),
    })?;
    if !x.is_finite() {
        return Err(ChartError::NotFinite { row, field: field.to_string() });
    }
    Ok(x)
}
