//! jobcov: print CI job-matrix axes and combinations
//!
//! # Usage
//!
//! ```bash
//! # Compiler axis of the built-in alpaka catalog
//! jobcov compilers
//!
//! # Full backend product of a catalog file, as YAML
//! jobcov --catalog versions.yaml --format yaml matrix
//!
//! # One software axis
//! jobcov axis CMAKE
//! ```
//!
//! Data goes to stdout; logs go to stderr and follow `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jobcov_core::VersionCatalog;
use jobcov_matrix::{
    backend_axes, backend_report, compiler_axis, single_backend_report, sw_tuple_list,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jobcov")]
#[command(about = "Enumerate software-version combinations for a CI test matrix")]
#[command(version)]
struct Args {
    /// Catalog file (YAML, or JSON with a .json extension)
    ///
    /// Uses the built-in alpaka catalog when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compiler name/version pairs
    Compilers {
        /// Leave out derived CUDA toolchains (CLANG_CUDA)
        #[arg(long)]
        no_derived: bool,
    },
    /// State sequences of every declared backend
    Backends,
    /// Full Cartesian product over the backend axes
    Matrix,
    /// One active accelerator backend at a time
    Single,
    /// Name/version pairs of a single axis
    Axis {
        /// Canonical axis name, e.g. CMAKE
        name: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => VersionCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => VersionCatalog::alpaka_defaults(),
    };
    tracing::info!(axes = catalog.len(), "catalog ready");

    match &args.command {
        Command::Compilers { no_derived } => {
            emit(args.format, &compiler_axis(&catalog, !no_derived)?)
        }
        Command::Backends => emit(args.format, &backend_axes(&catalog)?),
        Command::Matrix => {
            let report = backend_report(&catalog)?;
            tracing::info!(
                size = report.size,
                fingerprint = %report.fingerprint,
                "backend product"
            );
            emit(args.format, &report)
        }
        Command::Single => {
            let report = single_backend_report(&catalog)?;
            tracing::info!(
                size = report.size,
                fingerprint = %report.fingerprint,
                "single backend matrix"
            );
            emit(args.format, &report)
        }
        Command::Axis { name } => emit(
            args.format,
            &sw_tuple_list(&catalog, name).with_context(|| format!("Unknown axis {}", name))?,
        ),
    }
}

fn emit<T: Serialize>(format: Format, value: &T) -> Result<()> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
