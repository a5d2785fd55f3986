//! Scenario bindings, shared fixtures, and step registry.

mod fixtures;
mod scenarios;
pub mod steps;
