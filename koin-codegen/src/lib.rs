//! Chunked Koin module source generation.
//!
//! `koin_codegen` turns extracted definition metadata into Kotlin source
//! that registers every definition with a Koin container. Each declared
//! module becomes one unit whose registrations are split across numbered
//! routines of at most [`GeneratorConfig::rows_per_routine`] units, keeping
//! generated methods below the JVM size limit. Definitions not owned by a
//! declared module are pooled into one shared default module.
//!
//! The pipeline runs one way: [`model`] feeds [`scope`], which feeds
//! [`plan`], whose chunks are rendered by [`emit`] into a [`sink`]. The
//! [`module`] and [`aggregate`] generators drive it, and [`run`] generates a
//! whole metadata document.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod fs_helpers;
pub mod model;
pub mod module;
pub mod plan;
pub mod run;
pub mod scope;
pub mod sink;
pub mod templates;

pub use aggregate::{generate_default_module, generate_default_module_to_string};
pub use config::{ConfigOverrides, GeneratorConfig, load_config};
pub use error::{CodegenError, Result};
pub use model::{Definition, MetadataDocument, Module};
pub use module::{generate_module, generate_module_to_string};
pub use run::{GenerationReport, generate_run};
