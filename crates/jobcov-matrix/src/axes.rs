//! Axis Builder
//!
//! Turns catalog version lists into per-axis state sequences. Software axes
//! become `(id, version)` pairs; backend axes become the mutually exclusive
//! states `Off`, `On` or a pinned runtime version.

use jobcov_core::{AxisSequence, AxisValue, BackendKind, MatrixError, SoftwareId, VersionCatalog};

/// Compiler name/version pairs for every compiler family, in the order of
/// [`SoftwareId::COMPILERS`]. Each family must be in the catalog.
///
/// With `include_derived`, the derived CUDA toolchain entry for a version
/// (e.g. `CLANG_CUDA 14`) directly follows the base entry (`CLANG 14`).
pub fn compiler_axis(
    catalog: &VersionCatalog,
    include_derived: bool,
) -> Result<AxisSequence, MatrixError> {
    let mut compilers = Vec::new();
    for family in SoftwareId::COMPILERS {
        let derived = family.derived_variant().filter(|_| include_derived);
        for version in catalog.distinct_versions(family)? {
            compilers.push(AxisValue::version(family, version.as_str()));
            if let Some(derived) = derived {
                compilers.push(AxisValue::version(derived, version.as_str()));
            }
        }
    }

    tracing::debug!(entries = compilers.len(), include_derived, "built compiler axis");
    Ok(compilers)
}

/// One state sequence per declared backend, in catalog order.
///
/// Every sequence starts with `Off`. CPU backends add `On`; the CUDA and HIP
/// backends add one entry per runtime version.
pub fn backend_axes(catalog: &VersionCatalog) -> Result<Vec<AxisSequence>, MatrixError> {
    let mut axes = Vec::new();

    for (backend, kind) in catalog.backends()? {
        let mut states = vec![AxisValue::off(backend)];
        match kind {
            BackendKind::Cpu => states.push(AxisValue::on(backend)),
            BackendKind::Cuda | BackendKind::Hip => {
                let runtime = kind.runtime_axis().ok_or_else(|| {
                    MatrixError::invalid_state(backend.as_str(), "no runtime axis")
                })?;
                for version in catalog.distinct_versions(runtime)? {
                    states.push(AxisValue::version(backend, version.as_str()));
                }
            }
        }
        tracing::debug!(backend = %backend, states = states.len(), "built backend axis");
        axes.push(states);
    }

    Ok(axes)
}

/// Project a single catalog axis to `(id, version)` pairs.
pub fn plain_axis(catalog: &VersionCatalog, id: SoftwareId) -> Result<AxisSequence, MatrixError> {
    Ok(catalog
        .distinct_versions(id)?
        .iter()
        .map(|v| AxisValue::version(id, v.as_str()))
        .collect())
}

/// Name/version pairs of the axis called `name`.
///
/// Unknown names fail the same way as axes missing from the catalog.
pub fn sw_tuple_list(catalog: &VersionCatalog, name: &str) -> Result<AxisSequence, MatrixError> {
    let id: SoftwareId = name
        .parse()
        .map_err(|_| MatrixError::MissingAxis(name.to_string()))?;
    plain_axis(catalog, id)
}
