//! Fixed Kotlin fragments shared by the module and default-module writers.
//!
//! These are opaque lexical constants: the generators only concatenate them.

use crate::model::Visibility;

/// Line prefix for statements inside a builder block or routine.
pub const NEW_LINE: &str = "\n\t\t\t\t";

/// Closes a builder block, routine, or the default module.
pub const BLOCK_CLOSING: &str = "\n}";

/// Closes a scope block.
pub const SCOPE_CLOSING: &str = "\n\t\t\t\t}";

/// Local name of the module instance used by class-bound functions.
pub const MODULE_INSTANCE: &str = "moduleInstance";

/// Fully qualified container module type used by public accessors.
pub const KOIN_MODULE_TYPE: &str = "org.koin.core.module.Module";

/// Fully qualified string qualifier constructor.
pub const STRING_QUALIFIER: &str = "org.koin.core.qualifier.StringQualifier";

/// Package declaration and fixed imports for a module unit.
#[must_use]
pub fn module_header(package: &str) -> String {
    format!("package {package}\n\nimport org.koin.core.module.Module\nimport org.koin.dsl.*\n")
}

/// Package declaration and fixed imports for the default module unit.
#[must_use]
pub fn default_module_header(package: &str) -> String {
    format!(
        "package {package}\n\nimport org.koin.core.KoinApplication\nimport org.koin.core.module.Module\nimport org.koin.dsl.*\n"
    )
}

/// Extension function and field opening the default module builder.
pub const DEFAULT_MODULE_FUNCTION: &str = concat!(
    "public fun KoinApplication.defaultModule(): KoinApplication = modules(defaultModule)\n",
    "public val defaultModule : Module = module {",
);

/// Signature opening one numbered routine.
#[must_use]
pub fn module_part_header(
    visibility: Visibility,
    field_name: &str,
    index: usize,
    instance_type: Option<&str>,
) -> String {
    let parameter = instance_type.map_or_else(String::new, |ty| format!("{MODULE_INSTANCE}: {ty}"));
    format!(
        "{}fun Module.{field_name}{index}({parameter}){{",
        visibility_prefix(visibility)
    )
}

/// Source form of a visibility modifier, including its trailing space.
#[must_use]
pub const fn visibility_prefix(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public ",
        Visibility::Internal => "internal ",
        Visibility::Private => "private ",
    }
}

/// Escapes `value` as the body of a Kotlin string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
