//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The requested axis has no entry in the catalog.
    #[error("AXIS/MISSING/{0}")]
    MissingAxis(String),

    /// A catalog entry does not fit the off/on/version shape of its axis.
    #[error("STATE/INVALID/{axis}: {reason}")]
    InvalidState { axis: String, reason: String },

    #[error("SOFTWARE/UNKNOWN/{0}")]
    UnknownSoftware(String),

    #[error("CATALOG/{0}")]
    Catalog(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),
}

impl MatrixError {
    pub fn invalid_state(axis: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            axis: axis.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MatrixError::MissingAxis("CMAKE".to_string()).to_string(),
            "AXIS/MISSING/CMAKE"
        );
        assert_eq!(
            MatrixError::invalid_state("NVCC", "duplicate version 11.0").to_string(),
            "STATE/INVALID/NVCC: duplicate version 11.0"
        );
    }
}
