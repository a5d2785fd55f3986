//! Configuration loading inside `figment::Jail`.
//!
//! A jail gives each test its own working directory and environment, so
//! `koin-codegen.toml` and `KOIN_CODEGEN_*` fixtures never leak between
//! tests.

use anyhow::{Context as _, Result, anyhow};
use camino::Utf8Path;
use figment::Jail;
use koin_codegen::config::ConfigOverrides;
use koin_codegen::{GeneratorConfig, load_config};

/// Runs `setup` inside a fresh jail, then loads the configuration there.
///
/// The outer result reports jail failures, including errors raised by
/// `setup`; the inner one is the outcome of [`load_config`].
///
/// # Errors
///
/// Returns an error when the jail cannot be created or `setup` fails.
pub fn load_config_in_jail<F>(
    setup: F,
    config_path: Option<&Utf8Path>,
    overrides: &ConfigOverrides,
) -> Result<koin_codegen::Result<GeneratorConfig>>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<()>,
{
    let mut loaded = None;
    Jail::try_with(|jail| {
        setup(jail)?;
        loaded = Some(load_config(config_path, overrides));
        Ok(())
    })
    .map_err(|err| anyhow!("jail setup failed: {err}"))?;
    loaded.context("jail closure did not run")
}
