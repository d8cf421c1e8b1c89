//! Error types for gridkit

use thiserror::Error;

/// Main error type for gridkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid dimensions below the 2x2 minimum
    #[error("Invalid grid shape: {rows}x{cols} (rows and cols must both be at least 2)")]
    InvalidShape { rows: usize, cols: usize },

    /// An input or output array does not have the size the connectivity requires
    #[error("Shape mismatch for `{array}`: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        array: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn shape_mismatch(
        array: &'static str,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Error::ShapeMismatch {
            array,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

/// Result type alias for gridkit operations
pub type Result<T> = std::result::Result<T, Error>;
