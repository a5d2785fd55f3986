//! Assembly of one user-declared module into a complete source unit.
//!
//! A unit is laid out as: header and imports, the module field opening a
//! builder block, includes, the module instance (when a class-bound
//! function needs one), dispatcher calls, the closed builder, one routine
//! per planned chunk, then the public accessor.

use crate::config::GeneratorConfig;
use crate::emit::{EmitContext, emit_definition, emit_includes, emit_scope_block, render_imports};
use crate::error::Result;
use crate::model::Module;
use crate::plan::{ChunkPlan, plan_chunks};
use crate::scope::{EmissionUnit, group_by_scope};
use crate::sink::{CodeSink, StringSink, UnitWriter};
use crate::templates::{
    BLOCK_CLOSING, KOIN_MODULE_TYPE, MODULE_INSTANCE, NEW_LINE, module_header, module_part_header,
    visibility_prefix,
};

/// Writes the unit for `module` into `sink`, then flushes and closes it.
///
/// On failure the sink is abandoned rather than closed.
///
/// # Errors
///
/// Returns [`crate::error::CodegenError::MalformedModel`] for a definition
/// that cannot be rendered and [`crate::error::CodegenError::Sink`] when the
/// sink fails.
pub fn generate_module<S: CodeSink + ?Sized>(
    module: &Module,
    config: &GeneratorConfig,
    sink: &mut S,
) -> Result<()> {
    let unit = module.path();
    let mut out = UnitWriter::open(&unit, sink);
    write_module(&mut out, module, config)?;
    out.finish()
}

/// Generates the unit for `module` into a string.
///
/// # Errors
///
/// See [`generate_module`].
pub fn generate_module_to_string(module: &Module, config: &GeneratorConfig) -> Result<String> {
    let mut sink = StringSink::new();
    generate_module(module, config, &mut sink)?;
    Ok(sink.into_string())
}

fn write_module<S: CodeSink + ?Sized>(
    out: &mut UnitWriter<'_, S>,
    module: &Module,
    config: &GeneratorConfig,
) -> Result<()> {
    let field = module.field_name();
    let path = module.path();
    let visibility = visibility_prefix(module.visibility);

    out.append(&module_header(&config.generated_package))?;
    out.append(&render_imports(&module.definitions))?;
    out.append(&format!("\n{visibility}val {field} : Module = module {{"))?;
    if let Some(includes) = module.includes.as_deref() {
        emit_includes(out, includes)?;
    }

    if module.definitions.is_empty() {
        out.append(BLOCK_CLOSING)?;
    } else {
        let instance_type = module.has_class_functions().then_some(path.as_str());
        let plan = plan_chunks(
            group_by_scope(&module.definitions).into_units(),
            config.rows_per_routine,
        );
        tracing::debug!(
            module = %path,
            units = plan.total_units(),
            routines = plan.chunks().len(),
            dispatchers = plan.dispatcher_count(),
            "planned module routines"
        );
        write_dispatcher(out, &plan, &field, instance_type)?;
        write_routines(out, &plan, module, &field, instance_type)?;
    }

    out.append(&format!(
        "\n{visibility}val {path}.module : {KOIN_MODULE_TYPE} get() = {field}"
    ))
}

/// Module instance construction, one call per planned routine, then the
/// builder closing.
fn write_dispatcher<S: CodeSink + ?Sized>(
    out: &mut UnitWriter<'_, S>,
    plan: &ChunkPlan<EmissionUnit<'_>>,
    field: &str,
    instance_type: Option<&str>,
) -> Result<()> {
    let argument = match instance_type {
        Some(path) => {
            out.append(&format!("{NEW_LINE}val {MODULE_INSTANCE} = {path}()"))?;
            MODULE_INSTANCE
        }
        None => "",
    };
    for index in 0..plan.dispatcher_count() {
        out.append(&format!("{NEW_LINE}{field}{index}({argument})"))?;
    }
    out.append(BLOCK_CLOSING)
}

fn write_routines<S: CodeSink + ?Sized>(
    out: &mut UnitWriter<'_, S>,
    plan: &ChunkPlan<EmissionUnit<'_>>,
    module: &Module,
    field: &str,
    instance_type: Option<&str>,
) -> Result<()> {
    let context = EmitContext::Module {
        instance: MODULE_INSTANCE,
    };
    for chunk in plan.chunks() {
        out.append("\n\n")?;
        out.append(&module_part_header(
            module.visibility,
            field,
            chunk.index,
            instance_type,
        ))?;
        for unit in &chunk.units {
            match unit {
                EmissionUnit::Single(definition) => emit_definition(out, definition, context)?,
                EmissionUnit::Group(group) => {
                    emit_scope_block(out, group.scope, group.members.iter().copied(), context)?;
                }
            }
        }
        out.append(BLOCK_CLOSING)?;
    }
    Ok(())
}
