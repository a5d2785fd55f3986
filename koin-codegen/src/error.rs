//! Error types for `koin-codegen`.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results produced by the generators.
pub type Result<T, E = CodegenError> = std::result::Result<T, E>;

/// Reasons a definition cannot be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// A module-member factory was found where no module instance exists.
    #[error("is a class-bound function but has no module instance to call it through")]
    ClassFunctionOutsideModule,
    /// The class or function name was blank.
    #[error("has an empty class or function name")]
    EmptyName,
}

/// Errors surfaced by the `koin-codegen` pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodegenError {
    /// The metadata model cannot be rendered into valid source.
    #[error("unit '{unit}': definition '{definition}' {reason}")]
    MalformedModel {
        /// Generated unit being written when the problem was found.
        unit: String,
        /// Qualified name of the offending definition.
        definition: String,
        /// What is wrong with the definition.
        reason: MalformedReason,
    },

    /// The sink rejected an append, flush, or close.
    #[error("unit '{unit}': failed to write generated source: {source}")]
    Sink {
        /// Generated unit whose sink failed.
        unit: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Filesystem access outside a sink failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The metadata document could not be parsed.
    #[error("failed to parse metadata JSON: {0}")]
    MetadataJson(#[from] serde_json::Error),

    /// Configuration layers could not be merged or extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Several generated units failed during one run.
    #[error(transparent)]
    Aggregate(UnitFailures),
}

impl CodegenError {
    /// Wraps the collected unit failures, unwrapping a lone error.
    #[must_use]
    pub fn aggregate(mut errors: Vec<Self>) -> Self {
        if errors.len() == 1
            && let Some(single) = errors.pop()
        {
            return single;
        }
        Self::Aggregate(UnitFailures(errors))
    }

    /// Generated unit the failure belongs to, if any.
    #[must_use]
    pub const fn unit(&self) -> Option<&str> {
        match self {
            Self::MalformedModel { unit, .. } | Self::Sink { unit, .. } => Some(unit.as_str()),
            _ => None,
        }
    }
}

/// Failures recorded by one generation run, in generation order.
#[derive(Debug)]
pub struct UnitFailures(Vec<CodegenError>);

impl UnitFailures {
    /// The recorded failures.
    #[must_use]
    pub const fn as_slice(&self) -> &[CodegenError] {
        self.0.as_slice()
    }

    /// Names of the failed units; failures outside a unit are skipped.
    #[must_use = "iterators are lazy"]
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(CodegenError::unit)
    }
}

impl fmt::Display for UnitFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} generated unit(s) failed:", self.0.len())?;
        for failure in &self.0 {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnitFailures {}
