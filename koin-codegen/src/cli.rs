//! Command-line interface definitions for `koin-codegen`.

use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use clap::Parser;

use crate::config::ConfigOverrides;

/// Parsed CLI arguments for `koin-codegen`.
#[derive(Debug, Parser)]
#[command(name = "koin-codegen")]
#[command(about = "Generate chunked Koin module sources from definition metadata")]
#[command(version)]
pub struct Args {
    /// Metadata document describing modules and definitions (JSON).
    #[arg(long, value_name = "path")]
    pub metadata: Utf8PathBuf,
    /// Configuration file; defaults to `koin-codegen.toml` when present.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Output directory for generated sources.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Maximum registrations per generated routine.
    #[arg(long, value_name = "count")]
    pub rows_per_routine: Option<NonZeroUsize>,
    /// Package declared by generated sources.
    #[arg(long, value_name = "package")]
    pub package: Option<String>,
}

impl Args {
    /// Values given on the command line, to be layered over other sources.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rows_per_routine: self.rows_per_routine,
            generated_package: self.package.clone(),
            out_dir: self.out_dir.clone(),
        }
    }
}
