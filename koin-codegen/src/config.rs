//! Generator configuration and its layered loading.
//!
//! Layers, lowest precedence first: built-in defaults, a TOML file, the
//! `KOIN_CODEGEN_*` environment, then command-line overrides.

use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Default per-routine unit capacity.
pub const DEFAULT_ROWS_PER_ROUTINE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(499);

/// Package declared by every generated unit unless overridden.
pub const DEFAULT_GENERATED_PACKAGE: &str = "org.koin.ksp.generated";

/// Configuration file read from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "koin-codegen.toml";

/// Prefix of environment variables feeding the configuration.
pub const ENV_PREFIX: &str = "KOIN_CODEGEN_";

/// Settings shared by every generator in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum emission units per generated routine.
    pub rows_per_routine: NonZeroUsize,
    /// Package declared by generated units.
    pub generated_package: String,
    /// Directory receiving generated files.
    pub out_dir: Utf8PathBuf,
    /// File name of the default module unit.
    pub default_module_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows_per_routine: DEFAULT_ROWS_PER_ROUTINE,
            generated_package: DEFAULT_GENERATED_PACKAGE.to_owned(),
            out_dir: Utf8PathBuf::from("generated"),
            default_module_file: "KoinDefault.kt".to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Returns a copy with a different routine capacity.
    #[must_use]
    pub const fn with_rows_per_routine(mut self, rows_per_routine: NonZeroUsize) -> Self {
        self.rows_per_routine = rows_per_routine;
        self
    }
}

/// Command-line values layered over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    /// Overrides [`GeneratorConfig::rows_per_routine`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_per_routine: Option<NonZeroUsize>,
    /// Overrides [`GeneratorConfig::generated_package`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_package: Option<String>,
    /// Overrides [`GeneratorConfig::out_dir`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<Utf8PathBuf>,
}

/// Builds the layered configuration.
///
/// `config_path` must exist when given; otherwise [`DEFAULT_CONFIG_FILE`] is
/// read only if present.
///
/// # Errors
///
/// Returns [`CodegenError::Io`] when the configuration file cannot be read
/// and [`CodegenError::Config`] when a layer fails to parse or a value is
/// invalid, for example a zero routine capacity.
pub fn load_config(
    config_path: Option<&Utf8Path>,
    overrides: &ConfigOverrides,
) -> Result<GeneratorConfig> {
    let mut figment = Figment::from(Serialized::defaults(GeneratorConfig::default()));
    if let Some(data) = read_config_file(config_path)? {
        figment = figment.merge(Toml::string(&data));
    }
    let config: GeneratorConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(|err| CodegenError::Config(Box::new(err)))?;
    tracing::debug!(
        rows_per_routine = config.rows_per_routine.get(),
        package = %config.generated_package,
        out_dir = %config.out_dir,
        "resolved generator configuration"
    );
    Ok(config)
}

fn read_config_file(config_path: Option<&Utf8Path>) -> Result<Option<String>> {
    let path = match config_path {
        Some(path) => path,
        None if Utf8Path::new(DEFAULT_CONFIG_FILE).is_file() => Utf8Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(None),
    };
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|source| CodegenError::Io {
            path: path.to_owned(),
            source,
        })
}
