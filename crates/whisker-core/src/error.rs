// File: crates/whisker-core/src/error.rs
// Summary: Error type for row decoding, option parsing and the chart registry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("row {row}: expected a JSON object")]
    NotAnObject { row: usize },

    #[error("row {row}: missing field '{field}'")]
    MissingField { row: usize, field: String },

    #[error("row {row}: field '{field}' is not numeric ({found})")]
    NonNumeric { row: usize, field: String, found: String },

    #[error("row {row}: field '{field}' is not finite")]
    NotFinite { row: usize, field: String },

    #[error("chart '{0}' is already registered")]
    DuplicateChart(String),

    #[error("unknown chart '{0}'")]
    UnknownChart(String),

    #[error("unsupported {option} '{value}'")]
    UnsupportedOption { option: &'static str, value: String },
}
