//! jobcov matrix: axis builder and combination-matrix composer
//!
//! Enumerates the software-version space of a CI test matrix. Deciding which
//! combinations are worth running is left to downstream filters.
//!
//! # Flow
//!
//! ```text
//! VersionCatalog → Axis Builder → Matrix Composer → MatrixReport
//!                   ↓                ↓
//!             AxisSequence    CombinationMatrix
//! ```
//!
//! # Example
//!
//! ```
//! use jobcov_core::{SoftwareId, VersionCatalog};
//! use jobcov_matrix::{backend_axes, combination_matrix, single_backend_matrix};
//!
//! let catalog = VersionCatalog::new()
//!     .with_axis(SoftwareId::Nvcc, ["10.0", "11.0"])
//!     .with_axis(SoftwareId::Hipcc, ["4.3"])
//!     .with_axis(
//!         SoftwareId::Backends,
//!         [
//!             SoftwareId::CpuSerial.as_str(),
//!             SoftwareId::CpuOmp2Blocks.as_str(),
//!             SoftwareId::GpuCuda.as_str(),
//!             SoftwareId::GpuHip.as_str(),
//!         ],
//!     );
//!
//! let axes = backend_axes(&catalog).unwrap();
//! assert_eq!(combination_matrix(&axes).len(), 2 * 2 * 3 * 2);
//! assert_eq!(single_backend_matrix(&catalog).unwrap().len(), 1 + 2 + 1);
//! ```

pub mod axes;
pub mod product;
pub mod report;
pub mod single;

pub use axes::{backend_axes, compiler_axis, plain_axis, sw_tuple_list};
pub use product::{
    combination_matrix, combinations, matrix_size, Combinations, MAX_PREALLOCATED,
};
pub use report::{fingerprint, MatrixKind, MatrixReport};
pub use single::single_backend_matrix;

use jobcov_core::{CombinationMatrix, MatrixError, VersionCatalog};

/// Full product over all declared backend axes.
pub fn backend_combination_matrix(
    catalog: &VersionCatalog,
) -> Result<CombinationMatrix, MatrixError> {
    let axes = backend_axes(catalog)?;
    Ok(combination_matrix(&axes))
}

/// Report for the full backend product.
pub fn backend_report(catalog: &VersionCatalog) -> Result<MatrixReport, MatrixError> {
    let axes = backend_axes(catalog)?;
    let ids = axes.iter().filter_map(|a| a.first().map(|v| v.id)).collect();
    MatrixReport::new(MatrixKind::BackendProduct, ids, combination_matrix(&axes))
}

/// Report for the single-active-backend matrix.
pub fn single_backend_report(catalog: &VersionCatalog) -> Result<MatrixReport, MatrixError> {
    let ids = catalog.backends()?.into_iter().map(|(id, _)| id).collect();
    MatrixReport::new(MatrixKind::SingleBackend, ids, single_backend_matrix(catalog)?)
}
