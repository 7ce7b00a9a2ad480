//! Single-active-backend reduction
//!
//! A cheap smoke-test matrix: all CPU backends together in one combination,
//! then each accelerator backend alone at each of its runtime versions.
//! Backends not named in a combination are absent rather than `Off`, so
//! this is not a subset of the full product.

use jobcov_core::{
    AxisValue, BackendKind, Combination, CombinationMatrix, MatrixError, VersionCatalog,
};

/// Build the single-active-backend matrix for the declared backends.
///
/// With CPU, CUDA and HIP backends declared the matrix has
/// `1 + |CUDA versions| + |HIP versions|` combinations.
pub fn single_backend_matrix(catalog: &VersionCatalog) -> Result<CombinationMatrix, MatrixError> {
    let backends = catalog.backends()?;

    let cpu: Combination = backends
        .iter()
        .filter(|(_, kind)| *kind == BackendKind::Cpu)
        .map(|(id, _)| AxisValue::on(*id))
        .collect();

    let mut matrix = CombinationMatrix::new();
    if !cpu.is_empty() {
        matrix.push(cpu);
    }

    for (backend, kind) in backends {
        let Some(runtime) = kind.runtime_axis() else {
            continue;
        };
        for version in catalog.distinct_versions(runtime)? {
            matrix.push(vec![AxisValue::version(backend, version.as_str())].into());
        }
    }

    tracing::debug!(combinations = matrix.len(), "built single backend matrix");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobcov_core::{SoftwareId, StateValue};

    #[test]
    fn test_default_catalog_count() {
        let catalog = VersionCatalog::alpaka_defaults();
        let matrix = single_backend_matrix(&catalog).unwrap();
        // 1 CPU row + 8 CUDA + 4 HIP
        assert_eq!(matrix.len(), 13);
        assert_eq!(
            matrix[0].values(),
            &[
                AxisValue::on(SoftwareId::CpuSerial),
                AxisValue::on(SoftwareId::CpuOmp2Blocks),
            ]
        );
        assert_eq!(
            matrix[1].values(),
            &[AxisValue::version(SoftwareId::GpuCuda, "10.0")]
        );
        assert_eq!(
            matrix[12].values(),
            &[AxisValue::version(SoftwareId::GpuHip, "5.1")]
        );
    }

    #[test]
    fn test_accelerators_are_alone() {
        let matrix = single_backend_matrix(&VersionCatalog::alpaka_defaults()).unwrap();
        for combo in matrix.iter().skip(1) {
            assert_eq!(combo.len(), 1);
            assert!(!combo.values()[0].state.is_off());
        }
        assert!(matrix
            .iter()
            .flat_map(|c| c.iter())
            .all(|v| v.state != StateValue::Off));
    }

    #[test]
    fn test_only_declared_backends() {
        let catalog = VersionCatalog::new()
            .with_axis(SoftwareId::Nvcc, ["11.0"])
            .with_axis(SoftwareId::Hipcc, ["5.0", "5.1"])
            .with_axis(SoftwareId::Backends, [SoftwareId::GpuHip.as_str()]);
        let matrix = single_backend_matrix(&catalog).unwrap();
        assert_eq!(matrix.len(), 2);
        assert!(matrix.iter().all(|c| c.state_of(SoftwareId::GpuHip).is_some()));
    }

    #[test]
    fn test_requires_backend_list() {
        let catalog = VersionCatalog::new().with_axis(SoftwareId::Nvcc, ["11.0"]);
        assert_eq!(
            single_backend_matrix(&catalog).unwrap_err(),
            MatrixError::MissingAxis("BACKENDS".to_string())
        );
    }
}
