//! Version Catalog
//!
//! Ordered mapping from a software axis to its supported versions. The order
//! of axes and of versions inside an axis is preserved from the source file
//! and decides the order of every list built from the catalog.
//!
//! Catalog files are YAML (or JSON) mappings keyed by canonical names:
//!
//! ```yaml
//! GCC: ["9", "10", "11"]
//! NVCC: ["11.0", "11.2"]
//! BACKENDS:
//!   - alpaka_ACC_CPU_B_SEQ_T_SEQ_ENABLE
//!   - alpaka_ACC_GPU_CUDA_ENABLE
//! CMAKE: ["3.18.6", "3.19.8"]
//! ```

use crate::error::MatrixError;
use crate::software::{BackendKind, SoftwareId, SoftwareKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    axes: IndexMap<SoftwareId, Vec<String>>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_axis<I, S>(mut self, id: SoftwareId, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(id, versions);
        self
    }

    /// Set the versions of an axis. A new axis is appended at the end; an
    /// existing one keeps its position.
    pub fn insert<I, S>(&mut self, id: SoftwareId, versions: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axes.insert(id, versions.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, id: SoftwareId) -> bool {
        self.axes.contains_key(&id)
    }

    /// Versions of an axis, in catalog order.
    pub fn versions(&self, id: SoftwareId) -> Result<&[String], MatrixError> {
        self.axes
            .get(&id)
            .map(Vec::as_slice)
            .ok_or_else(|| MatrixError::MissingAxis(id.as_str().to_string()))
    }

    /// Axis identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = SoftwareId> + '_ {
        self.axes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SoftwareId, &[String])> + '_ {
        self.axes.iter().map(|(id, v)| (*id, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Backends declared in the `BACKENDS` axis, in catalog order.
    pub fn backends(&self) -> Result<Vec<(SoftwareId, BackendKind)>, MatrixError> {
        let axis = SoftwareId::Backends.as_str();
        let mut seen = HashSet::new();
        let mut backends = Vec::new();

        for name in self.versions(SoftwareId::Backends)? {
            let id: SoftwareId = name.parse().map_err(|_| {
                MatrixError::invalid_state(axis, format!("unknown backend {}", name))
            })?;
            let kind = id.backend_kind().ok_or_else(|| {
                MatrixError::invalid_state(axis, format!("{} is not a backend", name))
            })?;
            if !seen.insert(id) {
                return Err(MatrixError::invalid_state(
                    axis,
                    format!("backend {} listed twice", name),
                ));
            }
            backends.push((id, kind));
        }

        Ok(backends)
    }

    /// Versions of an axis, checked to be usable as distinct states.
    pub fn distinct_versions(&self, id: SoftwareId) -> Result<&[String], MatrixError> {
        let versions = self.versions(id)?;
        let mut seen = HashSet::new();
        for v in versions {
            if v.trim().is_empty() {
                return Err(MatrixError::invalid_state(id.as_str(), "blank version entry"));
            }
            if !seen.insert(v.as_str()) {
                return Err(MatrixError::invalid_state(
                    id.as_str(),
                    format!("duplicate version {}", v),
                ));
            }
        }
        Ok(versions)
    }

    /// Check every axis: non-empty, no blank or duplicate entries, and a
    /// `BACKENDS` list made only of backend identifiers.
    pub fn validate(&self) -> Result<(), MatrixError> {
        for (id, versions) in &self.axes {
            if versions.is_empty() {
                return Err(MatrixError::invalid_state(id.as_str(), "empty version list"));
            }
            self.distinct_versions(*id)?;
        }
        if self.contains(SoftwareId::Backends) {
            self.backends()?;
        }
        Ok(())
    }

    /// Whether `version` is a supported version of `id`.
    ///
    /// `CLANG_CUDA` answers from the `CLANG` list, the CUDA and HIP backends
    /// from their runtime axes.
    pub fn is_supported_version(
        &self,
        id: SoftwareId,
        version: &str,
    ) -> Result<bool, MatrixError> {
        let source = match id.kind() {
            SoftwareKind::DerivedCompiler => id.base_compiler().unwrap_or(id),
            SoftwareKind::Backend(kind) => kind.runtime_axis().ok_or_else(|| {
                MatrixError::invalid_state(id.as_str(), "backend has no version dimension")
            })?,
            SoftwareKind::BackendList => {
                return Err(MatrixError::invalid_state(
                    id.as_str(),
                    "backend list has no version dimension",
                ))
            }
            SoftwareKind::Compiler | SoftwareKind::Tool => id,
        };
        Ok(self.versions(source)?.iter().any(|v| v == version))
    }

    /// Parse and validate a YAML catalog.
    pub fn from_yaml(yaml: &str) -> Result<Self, MatrixError> {
        let catalog: Self = serde_yaml::from_str(yaml)
            .map_err(|e| MatrixError::Catalog(format!("Failed to parse catalog YAML: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self, MatrixError> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| MatrixError::Catalog(format!("Failed to parse catalog JSON: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file; `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatrixError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        tracing::debug!(path = %path.display(), axes = catalog.len(), "loaded version catalog");
        Ok(catalog)
    }

    /// Reference catalog of the alpaka CI.
    pub fn alpaka_defaults() -> Self {
        Self::new()
            .with_axis(SoftwareId::Gcc, ["5", "6", "7", "8", "9", "10", "11"])
            .with_axis(
                SoftwareId::Clang,
                ["6.0", "7", "8", "9", "10", "11", "12", "13", "14", "15"],
            )
            .with_axis(
                SoftwareId::Nvcc,
                ["10.0", "11.0", "11.1", "11.2", "11.3", "11.4", "11.5", "11.6"],
            )
            .with_axis(SoftwareId::Hipcc, ["4.3", "4.5", "5.0", "5.1"])
            .with_axis(
                SoftwareId::Backends,
                [
                    SoftwareId::CpuSerial.as_str(),
                    SoftwareId::CpuOmp2Blocks.as_str(),
                    SoftwareId::GpuCuda.as_str(),
                    SoftwareId::GpuHip.as_str(),
                ],
            )
            .with_axis(SoftwareId::Ubuntu, ["18.04", "20.04"])
            .with_axis(
                SoftwareId::Cmake,
                ["3.18.6", "3.19.8", "3.20.6", "3.21.6", "3.22.3"],
            )
            .with_axis(
                SoftwareId::Boost,
                ["1.66.0", "1.67.0", "1.74.0", "1.75.0", "1.76.0", "1.77.0", "1.78.0"],
            )
            .with_axis(
                SoftwareId::Alpaka,
                ["0.6.0", "0.6.1", "0.7.0", "0.8.0", "0.9.0", "develop"],
            )
            .with_axis(SoftwareId::CxxStandard, ["14", "17", "20"])
    }
}
