// File: crates/chartkit-core/src/error.rs
// Summary: Error type for degenerate chart inputs and unparseable values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series is empty")]
    EmptySeries,
    #[error("values sum to zero; slice angles are undefined")]
    ZeroTotal,
    #[error("value {value} at index {index} is not a finite non-negative number")]
    InvalidValue { index: usize, value: f64 },
    #[error("unrecognised color '{0}'")]
    InvalidColor(String),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown chart kind '{0}' (expected bar, line, pie or doughnut)")]
    UnknownKind(String),
}
