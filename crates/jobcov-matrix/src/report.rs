//! Matrix reports handed to downstream tooling
use jobcov_core::{Combination, MatrixError, SoftwareId};
use serde::{Deserialize, Serialize};

/// Which enumeration produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixKind {
    /// Full Cartesian product over the backend axes
    BackendProduct,
    /// One accelerator backend at a time
    SingleBackend,
    /// Product over caller-chosen axes
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixReport {
    pub kind: MatrixKind,
    /// Axes taking part, in axis order
    pub axes: Vec<SoftwareId>,
    pub size: usize,
    /// `blake3:` digest of the canonical JSON of `combinations`
    pub fingerprint: String,
    pub combinations: Vec<Combination>,
}

impl MatrixReport {
    pub fn new(
        kind: MatrixKind,
        axes: Vec<SoftwareId>,
        combinations: Vec<Combination>,
    ) -> Result<Self, MatrixError> {
        let fingerprint = fingerprint(&combinations)?;
        Ok(Self {
            kind,
            axes,
            size: combinations.len(),
            fingerprint,
            combinations,
        })
    }

    pub fn to_json(&self) -> Result<String, MatrixError> {
        serde_json::to_string_pretty(self).map_err(|e| MatrixError::Serialize(e.to_string()))
    }
}

/// Stable digest of a matrix; equal matrices give equal fingerprints.
pub fn fingerprint(combinations: &[Combination]) -> Result<String, MatrixError> {
    let bytes =
        serde_json::to_vec(combinations).map_err(|e| MatrixError::Serialize(e.to_string()))?;
    Ok(format!("blake3:{}", blake3::hash(&bytes)))
}
