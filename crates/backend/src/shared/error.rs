use thiserror::Error;

/// Errors raised by the catalog loader and the analytics core.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Source unreachable or malformed. Fatal at startup.
    #[error("failed to load {resource}: {reason}")]
    DataLoad { resource: String, reason: String },

    /// The filtered range holds no data (or too few periods) for the computation.
    #[error("no data: {0}")]
    EmptyRange(String),

    #[error("insufficient data: seasonal decomposition needs at least {required} observations, got {actual}")]
    InsufficientSeriesLength { required: usize, actual: usize },

    #[error("invalid seasonal period {0}: expected 2 or more days, at most half a series")]
    InvalidPeriod(usize),

    #[error("multiplicative decomposition requires positive values, got {value} at position {index}")]
    NonPositiveValue { index: usize, value: f64 },
}

impl AnalyticsError {
    pub fn data_load(resource: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AnalyticsError::DataLoad {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    pub fn empty_range(what: impl Into<String>) -> Self {
        AnalyticsError::EmptyRange(what.into())
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
