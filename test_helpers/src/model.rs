//! Metadata fixtures addressed by dotted paths such as `com.app.Service`.

use koin_codegen::model::{Definition, Keyword, Module, Scope};

/// Splits `com.app.Service` into `("com.app", "Service")`.
///
/// A path without a dot has an empty package.
#[must_use]
pub fn split_path(path: &str) -> (&str, &str) {
    path.rsplit_once('.').unwrap_or(("", path))
}

/// Empty public module at `path`.
#[must_use]
pub fn module_at(path: &str) -> Module {
    let (package, name) = split_path(path);
    Module::new(package, name)
}

/// `single` class definition at `path`.
#[must_use]
pub fn class_at(path: &str) -> Definition {
    let (package, name) = split_path(path);
    Definition::class(package, name, Keyword::new("single"))
}

/// `factory` top-level function definition at `path`.
#[must_use]
pub fn function_at(path: &str) -> Definition {
    let (package, name) = split_path(path);
    Definition::function(package, name, Keyword::new("factory"))
}

/// `scoped` class definition at `path` inside the named scope `scope`.
#[must_use]
pub fn scoped_class_at(path: &str, scope: &str) -> Definition {
    let (package, name) = split_path(path);
    Definition::class(package, name, Keyword::new("scoped"))
        .in_scope(Scope::Named(scope.to_owned()))
}

/// Module at `path` holding `count` unscoped classes named `C0`, `C1`, ...
#[must_use]
pub fn module_with_classes(path: &str, count: usize) -> Module {
    let (package, _) = split_path(path);
    (0..count).fold(module_at(path), |module, index| {
        module.with_definition(class_at(&format!("{package}.C{index}")))
    })
}
