//! jobcov core: software identifiers, backend states and version catalogs
//!
//! Plain data shared by the axis builder and the matrix composer. Nothing in
//! here knows how combinations are enumerated.

pub mod catalog;
pub mod error;
pub mod software;
pub mod state;

pub use catalog::VersionCatalog;
pub use error::MatrixError;
pub use software::{BackendKind, SoftwareId, SoftwareKind};
pub use state::{AxisSequence, AxisValue, Combination, CombinationMatrix, StateValue};

/// Version of the jobcov data model
pub const JOBCOV_VERSION: &str = "0.3.0";
