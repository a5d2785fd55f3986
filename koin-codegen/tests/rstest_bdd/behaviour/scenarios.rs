//! Binds the `koin-codegen` feature files to the step registry.

use super::fixtures::{CodegenContext, codegen_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/module_generation.feature",
    fixtures = [codegen_context: CodegenContext]
);
scenarios!(
    "tests/features/default_module.feature",
    fixtures = [codegen_context: CodegenContext]
);
