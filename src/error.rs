//! Errors produced by [`Series`](crate::Series) operations.

use std::fmt;

/// Error returned by a [`Series`](crate::Series) operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// A value below [`MIN_TEMPERATURE`](crate::MIN_TEMPERATURE) was supplied at construction.
    InvalidInput {
        /// Offending value.
        value: f64,
        /// Position of the offending value in the input.
        index: usize,
    },
    /// A statistic was requested from a series with no values.
    EmptySeries,
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::InvalidInput { value, index } => write!(
                f,
                "temperature at index {index} must be at least {}, but is {value}",
                crate::MIN_TEMPERATURE
            ),
            SeriesError::EmptySeries => write!(f, "series must not be empty"),
        }
    }
}

impl std::error::Error for SeriesError {}
