//! The shared default module pooling definitions not owned by a declared
//! module.
//!
//! Unlike [`crate::module::generate_module`], the default module is written
//! as a single builder block with no chunk planning or routine split, so its
//! size is not capped by [`GeneratorConfig::rows_per_routine`]. Sources
//! feeding it are expected to stay small; a large default module can exceed
//! the JVM method size limit.

use crate::config::GeneratorConfig;
use crate::emit::{EmitContext, emit_definition, emit_scope_block, render_imports};
use crate::error::Result;
use crate::model::Module;
use crate::scope::group_by_scope;
use crate::sink::{CodeSink, StringSink, UnitWriter};
use crate::templates::{BLOCK_CLOSING, DEFAULT_MODULE_FUNCTION, default_module_header};

/// Unit name reported for default module failures.
pub const DEFAULT_MODULE_UNIT: &str = "defaultModule";

/// Writes the default module pooling every definition of `sources`.
///
/// Definitions are pooled in source order and exact duplicates dropped.
/// Unscoped definitions come first, then one block per scope in order of
/// first occurrence.
///
/// # Errors
///
/// Returns [`crate::error::CodegenError::MalformedModel`] for a class-bound
/// function, which has no module instance here, and
/// [`crate::error::CodegenError::Sink`] when the sink fails.
pub fn generate_default_module<S: CodeSink + ?Sized>(
    sources: &[Module],
    config: &GeneratorConfig,
    sink: &mut S,
) -> Result<()> {
    let definitions = sources.iter().flat_map(|module| &module.definitions);
    let grouping = group_by_scope(definitions.clone());
    tracing::debug!(
        sources = sources.len(),
        unscoped = grouping.unscoped.len(),
        scopes = grouping.scoped.len(),
        "pooled default module definitions"
    );

    let mut out = UnitWriter::open(DEFAULT_MODULE_UNIT, sink);
    out.append(&default_module_header(&config.generated_package))?;
    out.append(&render_imports(definitions))?;
    out.append(DEFAULT_MODULE_FUNCTION)?;
    for definition in &grouping.unscoped {
        emit_definition(&mut out, definition, EmitContext::DefaultModule)?;
    }
    for group in &grouping.scoped {
        emit_scope_block(
            &mut out,
            group.scope,
            group.members.iter().copied(),
            EmitContext::DefaultModule,
        )?;
    }
    out.append(BLOCK_CLOSING)?;
    out.finish()
}

/// Generates the default module into a string.
///
/// # Errors
///
/// See [`generate_default_module`].
pub fn generate_default_module_to_string(
    sources: &[Module],
    config: &GeneratorConfig,
) -> Result<String> {
    let mut sink = StringSink::new();
    generate_default_module(sources, config, &mut sink)?;
    Ok(sink.into_string())
}
