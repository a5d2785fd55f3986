//! Whole-run driver: every declared module plus the default module.
//!
//! Units are independent. A failing unit is logged and recorded, and the
//! remaining units are still generated; the run fails afterwards with every
//! recorded error.

use tracing::{info, warn};

use crate::aggregate::generate_default_module;
use crate::config::GeneratorConfig;
use crate::error::{CodegenError, Result};
use crate::model::{MetadataDocument, Module};
use crate::module::generate_module;
use crate::sink::SinkFactory;

/// Units committed by a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    units: Vec<String>,
}

impl GenerationReport {
    /// File names of the committed units, in generation order.
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }
}

/// File name of the unit generated for `module`, for example
/// `com_app_DataModuleGen.kt`.
#[must_use]
pub fn module_file_name(module: &Module) -> String {
    format!("{}Gen.kt", module.field_name())
}

/// Generates every module of `document`, then the default module.
///
/// The default module unit is always written, even when it pools nothing.
///
/// # Errors
///
/// Returns the failure of a lone failing unit, or
/// [`CodegenError::Aggregate`] listing every failed unit.
pub fn generate_run<F: SinkFactory>(
    document: &MetadataDocument,
    config: &GeneratorConfig,
    factory: &mut F,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    let mut failures = Vec::new();

    for module in &document.modules {
        let file_name = module_file_name(module);
        let outcome = generate_unit(factory, &file_name, |sink| {
            generate_module(module, config, sink)
        });
        record(outcome, file_name, &mut report, &mut failures);
    }

    let file_name = config.default_module_file.clone();
    let outcome = generate_unit(factory, &file_name, |sink| {
        generate_default_module(&document.default_modules, config, sink)
    });
    record(outcome, file_name, &mut report, &mut failures);

    if failures.is_empty() {
        Ok(report)
    } else {
        Err(CodegenError::aggregate(failures))
    }
}

fn generate_unit<F, G>(factory: &mut F, file_name: &str, generate: G) -> Result<()>
where
    F: SinkFactory,
    G: FnOnce(&mut F::Sink) -> Result<()>,
{
    let mut sink = factory.open_sink(file_name)?;
    generate(&mut sink)?;
    factory.complete(file_name, sink);
    Ok(())
}

fn record(
    outcome: Result<()>,
    file_name: String,
    report: &mut GenerationReport,
    failures: &mut Vec<CodegenError>,
) {
    match outcome {
        Ok(()) => {
            info!(unit = %file_name, "generated unit");
            report.units.push(file_name);
        }
        Err(err) => {
            warn!(unit = %file_name, error = %err, "unit generation failed");
            failures.push(err);
        }
    }
}
