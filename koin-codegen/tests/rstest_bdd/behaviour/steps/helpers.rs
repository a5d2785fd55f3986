//! Slot plumbing shared by the step modules.

use anyhow::{Result, anyhow};
use koin_codegen::GeneratorConfig;
use rstest_bdd::Slot;

use crate::behaviour::fixtures::CodegenContext;

/// Replaces the value in `slot` with `apply(value)`.
pub(super) fn update<T>(slot: &Slot<T>, what: &str, apply: impl FnOnce(T) -> T) -> Result<()> {
    let value = slot
        .take()
        .ok_or_else(|| anyhow!("{what} must be set up first"))?;
    slot.set(apply(value));
    Ok(())
}

/// Configuration for the scenario, falling back to the defaults.
pub(super) fn config(codegen_context: &CodegenContext) -> GeneratorConfig {
    codegen_context.config.get().unwrap_or_default()
}

/// Stores a generation outcome as either output text or a failure message.
pub(super) fn record<E: std::fmt::Display>(
    codegen_context: &CodegenContext,
    outcome: Result<String, E>,
) {
    codegen_context.output.clear();
    codegen_context.failure.clear();
    match outcome {
        Ok(text) => codegen_context.output.set(text),
        Err(err) => codegen_context.failure.set(err.to_string()),
    }
}

/// Text of the last generated unit.
pub(super) fn output(codegen_context: &CodegenContext) -> Result<String> {
    codegen_context.output.get().ok_or_else(|| {
        let failure = codegen_context.failure.get();
        anyhow!("no generated output; failure: {failure:?}")
    })
}
