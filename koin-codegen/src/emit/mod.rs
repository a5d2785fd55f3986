//! Registration statements for single definitions and include directives.
//!
//! `render_*` functions build statement text; `emit_*` functions append it
//! through a [`UnitWriter`].

mod params;

use crate::error::{CodegenError, MalformedReason, Result};
use crate::model::{Definition, DefinitionKind, ModuleRef, Scope, qualify};
use crate::sink::{CodeSink, UnitWriter};
use crate::templates::{NEW_LINE, SCOPE_CLOSING, string_literal};

/// Where a statement is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitContext<'a> {
    /// Inside a module routine; class-bound functions are called through
    /// `instance`.
    Module {
        /// Name of the module instance reference.
        instance: &'a str,
    },
    /// Inside the default module, where no module instance exists.
    DefaultModule,
}

/// Renders the registration statement for `definition`.
///
/// Output has the form
/// `<keyword>(<options>) { [params -> ]<target>(<args>) }[ bind(...)]`,
/// preceded by the statement line prefix.
///
/// # Errors
///
/// Returns a [`MalformedReason`] when the definition has a blank name or is
/// a class-bound function outside a module.
pub fn render_definition(
    definition: &Definition,
    context: EmitContext<'_>,
) -> Result<String, MalformedReason> {
    if definition.simple_name().trim().is_empty() {
        return Err(MalformedReason::EmptyName);
    }
    let target = match (&definition.kind, context) {
        (DefinitionKind::Class { class_name }, _) => qualify(&definition.package_name, class_name),
        (
            DefinitionKind::Function {
                function_name,
                is_class_function: false,
            },
            _,
        ) => qualify(&definition.package_name, function_name),
        (
            DefinitionKind::Function {
                function_name,
                is_class_function: true,
            },
            EmitContext::Module { instance },
        ) => format!("{instance}.{function_name}"),
        (
            DefinitionKind::Function {
                is_class_function: true,
                ..
            },
            EmitContext::DefaultModule,
        ) => return Err(MalformedReason::ClassFunctionOutsideModule),
    };

    let lambda_receiver = if params::needs_injected_params(&definition.parameters) {
        "params -> "
    } else {
        ""
    };
    Ok(format!(
        "{NEW_LINE}{keyword}({options}) {{ {lambda_receiver}{target}({arguments}) }}{bindings}",
        keyword = definition.keyword.keyword,
        options = render_options(definition),
        arguments = params::render_arguments(&definition.parameters),
        bindings = render_bindings(&definition.bindings),
    ))
}

/// Appends the registration statement for `definition`.
///
/// # Errors
///
/// Returns [`CodegenError::MalformedModel`] naming the unit and definition,
/// or [`CodegenError::Sink`] when the append fails.
pub fn emit_definition<S: CodeSink + ?Sized>(
    out: &mut UnitWriter<'_, S>,
    definition: &Definition,
    context: EmitContext<'_>,
) -> Result<()> {
    let statement =
        render_definition(definition, context).map_err(|reason| CodegenError::MalformedModel {
            unit: out.unit().to_owned(),
            definition: definition.label(),
            reason,
        })?;
    out.append(&statement)
}

/// Renders the `includes(...)` statement for `includes`, in order.
#[must_use]
pub fn render_includes(includes: &[ModuleRef]) -> String {
    let accessors = includes
        .iter()
        .map(|module| format!("{}().module", qualify(&module.package_name, &module.class_name)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{NEW_LINE}includes({accessors})")
}

/// Appends the `includes(...)` statement; nothing is written for an empty
/// list.
///
/// # Errors
///
/// Returns [`CodegenError::Sink`] when the append fails.
pub fn emit_includes<S: CodeSink + ?Sized>(
    out: &mut UnitWriter<'_, S>,
    includes: &[ModuleRef],
) -> Result<()> {
    if includes.is_empty() {
        return Ok(());
    }
    out.append(&render_includes(includes))
}

/// Renders the statement opening a scope block.
#[must_use]
pub fn render_scope_opening(scope: &Scope) -> String {
    match scope {
        Scope::Type(type_name) => format!("{NEW_LINE}scope<{type_name}> {{"),
        Scope::Named(name) => format!(
            "{NEW_LINE}scope(org.koin.core.qualifier.named({})) {{",
            string_literal(name)
        ),
    }
}

/// Appends a complete scope block: opening, every member, closing.
///
/// # Errors
///
/// Propagates member rendering and sink failures.
pub fn emit_scope_block<'d, S, I>(
    out: &mut UnitWriter<'_, S>,
    scope: &Scope,
    members: I,
    context: EmitContext<'_>,
) -> Result<()>
where
    S: CodeSink + ?Sized,
    I: IntoIterator<Item = &'d Definition>,
{
    out.append(&render_scope_opening(scope))?;
    for definition in members {
        emit_definition(out, definition, context)?;
    }
    out.append(SCOPE_CLOSING)
}

/// Renders the `import` lines for every keyword import, one per line.
///
/// Duplicates are kept; repeated imports are harmless in Kotlin.
#[must_use]
pub fn render_imports<'d, I>(definitions: I) -> String
where
    I: IntoIterator<Item = &'d Definition>,
{
    let mut imports = definitions
        .into_iter()
        .filter_map(|definition| definition.keyword.import.as_deref())
        .map(|import| format!("import {import}"))
        .collect::<Vec<_>>()
        .join("\n");
    imports.push('\n');
    imports
}

fn render_options(definition: &Definition) -> String {
    let mut options = Vec::new();
    if let Some(qualifier) = definition.qualifier.as_deref() {
        options.push(params::qualifier_argument(qualifier));
    }
    if definition.is_created_at_start {
        options.push("createdAtStart=true".to_owned());
    }
    options.join(",")
}

fn render_bindings(bindings: &[String]) -> String {
    match bindings {
        [] => String::new(),
        [single] => format!(" bind({single}::class)"),
        many => {
            let classes = many
                .iter()
                .map(|binding| format!("{binding}::class"))
                .collect::<Vec<_>>()
                .join(",");
            format!(" binds(arrayOf({classes}))")
        }
    }
}
