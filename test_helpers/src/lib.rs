//! Test helpers shared across crates in the `koin-codegen` workspace.
//!
//! [`model`] builds metadata fixtures from dotted paths, [`text`] inspects
//! generated sources, and [`figment`] loads configuration inside
//! `figment::Jail`.

pub mod figment;
pub mod model;
pub mod text;
