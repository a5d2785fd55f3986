//! Shared fixtures for the `rstest-bdd` behavioural suites.

use koin_codegen::{GeneratorConfig, Module};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state shared between generation steps.
#[derive(Debug, Default, ScenarioState)]
pub struct CodegenContext {
    /// Declared module under construction.
    pub module: Slot<Module>,
    /// Default module sources under construction.
    pub sources: Slot<Vec<Module>>,
    /// Configuration used by the generators.
    pub config: Slot<GeneratorConfig>,
    /// Text of the last generated unit.
    pub output: Slot<String>,
    /// Message of the last generation failure.
    pub failure: Slot<String>,
}

/// Provides a clean generation context.
#[fixture]
pub fn codegen_context() -> CodegenContext {
    CodegenContext::default()
}
