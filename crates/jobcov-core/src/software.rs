//! Software identifiers
//!
//! Every dimension of the job matrix is named by a [`SoftwareId`]. The
//! canonical names are the constants used by the CI scripts, so catalogs
//! written for those scripts load unchanged.

use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one software dimension (compiler, tool, library, backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SoftwareId {
    #[serde(rename = "GCC")]
    Gcc,
    #[serde(rename = "CLANG")]
    Clang,
    #[serde(rename = "NVCC")]
    Nvcc,
    #[serde(rename = "CLANG_CUDA")]
    ClangCuda,
    #[serde(rename = "HIPCC")]
    Hipcc,
    #[serde(rename = "BACKENDS")]
    Backends,
    #[serde(rename = "UBUNTU")]
    Ubuntu,
    #[serde(rename = "CMAKE")]
    Cmake,
    #[serde(rename = "BOOST")]
    Boost,
    #[serde(rename = "ALPAKA")]
    Alpaka,
    #[serde(rename = "CXX_STANDARD")]
    CxxStandard,
    #[serde(rename = "alpaka_ACC_CPU_B_SEQ_T_SEQ_ENABLE")]
    CpuSerial,
    #[serde(rename = "alpaka_ACC_CPU_B_SEQ_T_THREADS_ENABLE")]
    CpuThreads,
    #[serde(rename = "alpaka_ACC_CPU_B_TBB_T_SEQ_ENABLE")]
    CpuTbbBlocks,
    #[serde(rename = "alpaka_ACC_CPU_B_OMP2_T_SEQ_ENABLE")]
    CpuOmp2Blocks,
    #[serde(rename = "alpaka_ACC_CPU_B_SEQ_T_OMP2_ENABLE")]
    CpuOmp2Threads,
    #[serde(rename = "alpaka_ACC_GPU_CUDA_ENABLE")]
    GpuCuda,
    #[serde(rename = "alpaka_ACC_GPU_HIP_ENABLE")]
    GpuHip,
}

/// Role of a software dimension in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftwareKind {
    /// A compiler family with its own version list
    Compiler,
    /// A toolchain generated from a base compiler's versions
    DerivedCompiler,
    /// The axis listing which backends take part
    BackendList,
    Backend(BackendKind),
    /// Build tools, libraries, standards, operating systems
    Tool,
}

/// How a backend's states are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Off or on, no version dimension
    Cpu,
    /// Off or pinned to a CUDA SDK version
    Cuda,
    /// Off or pinned to a ROCm/HIP SDK version
    Hip,
}

impl BackendKind {
    /// Catalog axis that carries the runtime versions, if any.
    pub const fn runtime_axis(self) -> Option<SoftwareId> {
        match self {
            BackendKind::Cpu => None,
            BackendKind::Cuda => Some(SoftwareId::Nvcc),
            BackendKind::Hip => Some(SoftwareId::Hipcc),
        }
    }
}

impl SoftwareId {
    pub const COUNT: usize = 18;

    pub const ALL: [SoftwareId; SoftwareId::COUNT] = [
        SoftwareId::Gcc,
        SoftwareId::Clang,
        SoftwareId::Nvcc,
        SoftwareId::ClangCuda,
        SoftwareId::Hipcc,
        SoftwareId::Backends,
        SoftwareId::Ubuntu,
        SoftwareId::Cmake,
        SoftwareId::Boost,
        SoftwareId::Alpaka,
        SoftwareId::CxxStandard,
        SoftwareId::CpuSerial,
        SoftwareId::CpuThreads,
        SoftwareId::CpuTbbBlocks,
        SoftwareId::CpuOmp2Blocks,
        SoftwareId::CpuOmp2Threads,
        SoftwareId::GpuCuda,
        SoftwareId::GpuHip,
    ];

    /// Compiler families, in the order the compiler axis lists them.
    pub const COMPILERS: [SoftwareId; 4] = [
        SoftwareId::Gcc,
        SoftwareId::Clang,
        SoftwareId::Nvcc,
        SoftwareId::Hipcc,
    ];

    /// Canonical name, as used in catalogs and CI scripts.
    pub const fn as_str(self) -> &'static str {
        match self {
            SoftwareId::Gcc => "GCC",
            SoftwareId::Clang => "CLANG",
            SoftwareId::Nvcc => "NVCC",
            SoftwareId::ClangCuda => "CLANG_CUDA",
            SoftwareId::Hipcc => "HIPCC",
            SoftwareId::Backends => "BACKENDS",
            SoftwareId::Ubuntu => "UBUNTU",
            SoftwareId::Cmake => "CMAKE",
            SoftwareId::Boost => "BOOST",
            SoftwareId::Alpaka => "ALPAKA",
            SoftwareId::CxxStandard => "CXX_STANDARD",
            SoftwareId::CpuSerial => "alpaka_ACC_CPU_B_SEQ_T_SEQ_ENABLE",
            SoftwareId::CpuThreads => "alpaka_ACC_CPU_B_SEQ_T_THREADS_ENABLE",
            SoftwareId::CpuTbbBlocks => "alpaka_ACC_CPU_B_TBB_T_SEQ_ENABLE",
            SoftwareId::CpuOmp2Blocks => "alpaka_ACC_CPU_B_OMP2_T_SEQ_ENABLE",
            SoftwareId::CpuOmp2Threads => "alpaka_ACC_CPU_B_SEQ_T_OMP2_ENABLE",
            SoftwareId::GpuCuda => "alpaka_ACC_GPU_CUDA_ENABLE",
            SoftwareId::GpuHip => "alpaka_ACC_GPU_HIP_ENABLE",
        }
    }

    pub const fn kind(self) -> SoftwareKind {
        match self {
            SoftwareId::Gcc | SoftwareId::Clang | SoftwareId::Nvcc | SoftwareId::Hipcc => {
                SoftwareKind::Compiler
            }
            SoftwareId::ClangCuda => SoftwareKind::DerivedCompiler,
            SoftwareId::Backends => SoftwareKind::BackendList,
            SoftwareId::Ubuntu
            | SoftwareId::Cmake
            | SoftwareId::Boost
            | SoftwareId::Alpaka
            | SoftwareId::CxxStandard => SoftwareKind::Tool,
            SoftwareId::CpuSerial
            | SoftwareId::CpuThreads
            | SoftwareId::CpuTbbBlocks
            | SoftwareId::CpuOmp2Blocks
            | SoftwareId::CpuOmp2Threads => SoftwareKind::Backend(BackendKind::Cpu),
            SoftwareId::GpuCuda => SoftwareKind::Backend(BackendKind::Cuda),
            SoftwareId::GpuHip => SoftwareKind::Backend(BackendKind::Hip),
        }
    }

    /// Backend kind, if this identifier names a backend.
    pub const fn backend_kind(self) -> Option<BackendKind> {
        match self.kind() {
            SoftwareKind::Backend(kind) => Some(kind),
            _ => None,
        }
    }

    /// CUDA-enabled toolchain built from this compiler's versions.
    pub const fn derived_variant(self) -> Option<SoftwareId> {
        match self {
            SoftwareId::Clang => Some(SoftwareId::ClangCuda),
            _ => None,
        }
    }

    /// Base compiler whose versions a derived toolchain reuses.
    pub const fn base_compiler(self) -> Option<SoftwareId> {
        match self {
            SoftwareId::ClangCuda => Some(SoftwareId::Clang),
            _ => None,
        }
    }

    pub fn is_compiler(self) -> bool {
        self.kind() == SoftwareKind::Compiler
    }
}

impl fmt::Display for SoftwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoftwareId {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoftwareId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| MatrixError::UnknownSoftware(s.to_string()))
    }
}
