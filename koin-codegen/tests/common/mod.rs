//! Shared helpers for `koin-codegen` integration tests.

use camino::Utf8PathBuf;
use std::error::Error;

/// Resolves the compiled `koin-codegen` binary path from test environment
/// variables.
///
/// # Errors
///
/// Returns an error when none of the supported cargo/nextest binary
/// environment variables are present.
pub(crate) fn koin_codegen_exe() -> Result<Utf8PathBuf, Box<dyn Error>> {
    let env_vars = [
        "CARGO_BIN_EXE_koin-codegen",
        "CARGO_BIN_EXE_koin_codegen",
        "NEXTEST_BIN_EXE_koin-codegen",
        "NEXTEST_BIN_EXE_koin_codegen",
    ];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Ok(Utf8PathBuf::from(path));
        }
    }
    Err("koin-codegen binary path not found in environment".into())
}

/// Metadata document with one declared module and one default source.
pub(crate) const SAMPLE_METADATA: &str = r#"{
    "modules": [{
        "name": "AppModule",
        "package_name": "com.app",
        "definitions": [
            {"kind": "class", "class_name": "Repository", "package_name": "com.app.data",
             "keyword": {"keyword": "single"}},
            {"kind": "function", "function_name": "provideClient", "package_name": "com.app",
             "is_class_function": true, "keyword": {"keyword": "factory"},
             "parameters": [{"kind": "dependency"}]},
            {"kind": "class", "class_name": "Session", "package_name": "com.app",
             "keyword": {"keyword": "scoped"}, "scope": {"type": "com.app.Checkout"}}
        ]
    }],
    "default_modules": [{
        "name": "Loose",
        "package_name": "com.app.misc",
        "definitions": [
            {"kind": "class", "class_name": "Clock", "package_name": "com.app.misc",
             "keyword": {"keyword": "single"}}
        ]
    }]
}"#;

/// Metadata document whose only declared module has a blank class name.
pub(crate) const BROKEN_METADATA: &str = r#"{
    "modules": [
        {"name": "Broken", "package_name": "com.app",
         "definitions": [{"kind": "class", "class_name": "", "package_name": "com.app",
                          "keyword": {"keyword": "single"}}]},
        {"name": "Fine", "package_name": "com.app",
         "definitions": [{"kind": "class", "class_name": "Ok", "package_name": "com.app",
                          "keyword": {"keyword": "single"}}]}
    ]
}"#;
