// File: crates/regionchart-core/src/error.rs
// Summary: Error type for input ingestion and settings parsing.
// Notes:
// - Only precondition failures live here. Degenerate thresholds, out-of-range
//   region samples, inverted gaps and null samples are recovered by policy
//   inside the engines and never become errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no categories in input")]
    MissingCategories,

    #[error("no value series in input")]
    MissingValues,

    #[error("value series '{name}' has no samples")]
    EmptySeries { name: String },

    #[error("value series '{name}' has {found} samples, expected {expected}")]
    LengthMismatch { name: String, expected: usize, found: usize },

    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("settings document is invalid: {0}")]
    Settings(#[from] serde_json::Error),
}

impl ChartError {
    /// True for the "caller must short-circuit" class of failures.
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            ChartError::MissingCategories | ChartError::MissingValues | ChartError::EmptySeries { .. }
        )
    }
}
