//! Behavioural step modules registered with `rstest-bdd`.

pub mod default_module_steps;
mod helpers;
pub mod module_steps;
