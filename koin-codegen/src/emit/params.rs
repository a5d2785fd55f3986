//! Argument expressions for constructor and factory calls.

use crate::model::Parameter;
use crate::templates::{STRING_QUALIFIER, string_literal};

/// Renders the comma-joined argument list for a call.
pub(super) fn render_arguments(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(render_argument)
        .collect::<Vec<_>>()
        .join(",")
}

/// Whether the lambda must declare the `params` receiver.
pub(super) fn needs_injected_params(parameters: &[Parameter]) -> bool {
    parameters
        .iter()
        .any(|parameter| matches!(parameter, Parameter::Injected { .. }))
}

/// Qualifier argument in call form, for example `qualifier=...("name")`.
pub(super) fn qualifier_argument(qualifier: &str) -> String {
    format!("qualifier={STRING_QUALIFIER}({})", string_literal(qualifier))
}

fn render_argument(parameter: &Parameter) -> String {
    match parameter {
        Parameter::Dependency {
            qualifier,
            is_nullable,
            is_lazy,
        } => {
            let function = match (is_lazy, is_nullable) {
                (false, false) => "get",
                (false, true) => "getOrNull",
                (true, false) => "inject",
                (true, true) => "injectOrNull",
            };
            let argument = qualifier
                .as_deref()
                .map_or_else(String::new, qualifier_argument);
            format!("{function}({argument})")
        }
        Parameter::Injected { is_nullable: false } => "params.get()".to_owned(),
        Parameter::Injected { is_nullable: true } => "params.getOrNull()".to_owned(),
        Parameter::Property { key, is_nullable } => {
            let function = if *is_nullable {
                "getPropertyOrNull"
            } else {
                "getProperty"
            };
            format!("{function}({})", string_literal(key))
        }
        Parameter::List => "getAll()".to_owned(),
    }
}
