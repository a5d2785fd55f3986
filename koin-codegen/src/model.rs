//! Metadata model consumed by the generators.
//!
//! Values are produced by the symbol-extraction step (delivered as JSON),
//! built once per run and only read afterwards. Besides the scope predicates
//! and a few naming helpers nothing here carries behaviour.

use serde::{Deserialize, Serialize};

/// Registration keyword (`single`, `factory`, `scoped`, ...) and the import
/// needed to reference it from generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    /// DSL function used to register the definition.
    pub keyword: String,
    /// Fully qualified import required by the keyword, if any.
    #[serde(default)]
    pub import: Option<String>,
}

impl Keyword {
    /// Creates a keyword that needs no import.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            import: None,
        }
    }

    /// Attaches the import path the keyword requires.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }
}

/// Scope a definition is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Scope keyed by a type, rendered as `scope<Type>`.
    Type(String),
    /// Scope keyed by a string qualifier, rendered as `scope(named("..."))`.
    Named(String),
}

/// Visibility of the generated module field and accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere.
    #[default]
    Public,
    /// Visible inside the compilation module.
    Internal,
    /// Visible inside the generated file.
    Private,
}

/// How one constructor or factory argument is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Parameter {
    /// Resolved from the container.
    Dependency {
        /// String qualifier selecting a named definition.
        #[serde(default)]
        qualifier: Option<String>,
        /// Whether a missing definition resolves to `null`.
        #[serde(default)]
        is_nullable: bool,
        /// Whether resolution is deferred behind `Lazy`.
        #[serde(default)]
        is_lazy: bool,
    },
    /// Passed by the caller through `parametersOf(...)`.
    Injected {
        /// Whether the parameter may be absent.
        #[serde(default)]
        is_nullable: bool,
    },
    /// Read from the container's property store.
    Property {
        /// Property key.
        key: String,
        /// Whether a missing property resolves to `null`.
        #[serde(default)]
        is_nullable: bool,
    },
    /// Every definition bound to the parameter type.
    List,
}

impl Parameter {
    /// A plain `get()` dependency.
    #[must_use]
    pub const fn dependency() -> Self {
        Self::Dependency {
            qualifier: None,
            is_nullable: false,
            is_lazy: false,
        }
    }
}

/// Variant-specific part of a [`Definition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefinitionKind {
    /// A type instantiated through its constructor.
    Class {
        /// Simple class name.
        class_name: String,
    },
    /// A factory function.
    Function {
        /// Simple function name.
        function_name: String,
        /// Whether the function is a member of the module type.
        #[serde(default)]
        is_class_function: bool,
    },
}

/// One registration unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Definition {
    /// Class or function variant.
    #[serde(flatten)]
    pub kind: DefinitionKind,
    /// Package declaring the class or function.
    #[serde(default)]
    pub package_name: String,
    /// Registration keyword.
    pub keyword: Keyword,
    /// Scope the definition belongs to; `None` means unscoped.
    #[serde(default)]
    pub scope: Option<Scope>,
    /// Optional string qualifier.
    #[serde(default)]
    pub qualifier: Option<String>,
    /// Whether the container builds the instance eagerly.
    #[serde(default)]
    pub is_created_at_start: bool,
    /// Secondary types the definition is bound to.
    #[serde(default)]
    pub bindings: Vec<String>,
    /// Constructor or factory arguments in call order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Definition {
    /// Creates an unscoped class definition.
    #[must_use]
    pub fn class(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        keyword: Keyword,
    ) -> Self {
        Self::with_kind(
            DefinitionKind::Class {
                class_name: class_name.into(),
            },
            package_name.into(),
            keyword,
        )
    }

    /// Creates an unscoped top-level function definition.
    #[must_use]
    pub fn function(
        package_name: impl Into<String>,
        function_name: impl Into<String>,
        keyword: Keyword,
    ) -> Self {
        Self::with_kind(
            DefinitionKind::Function {
                function_name: function_name.into(),
                is_class_function: false,
            },
            package_name.into(),
            keyword,
        )
    }

    const fn with_kind(kind: DefinitionKind, package_name: String, keyword: Keyword) -> Self {
        Self {
            kind,
            package_name,
            keyword,
            scope: None,
            qualifier: None,
            is_created_at_start: false,
            bindings: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Places the definition inside `scope`.
    #[must_use]
    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Marks a function definition as a member of its module type.
    #[must_use]
    pub const fn member_of_module(mut self) -> Self {
        if let DefinitionKind::Function {
            is_class_function, ..
        } = &mut self.kind
        {
            *is_class_function = true;
        }
        self
    }

    /// Adds a string qualifier.
    #[must_use]
    pub fn qualified(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Requests eager creation.
    #[must_use]
    pub const fn created_at_start(mut self) -> Self {
        self.is_created_at_start = true;
        self
    }

    /// Binds the definition to an additional type.
    #[must_use]
    pub fn bound_to(mut self, binding: impl Into<String>) -> Self {
        self.bindings.push(binding.into());
        self
    }

    /// Appends a constructor or factory argument.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Whether the definition belongs to a scope.
    #[must_use]
    pub const fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }

    /// Whether the definition is registered at module level.
    #[must_use]
    pub const fn is_not_scoped(&self) -> bool {
        !self.is_scoped()
    }

    /// Whether the definition is a function that needs the module instance.
    #[must_use]
    pub const fn is_class_function(&self) -> bool {
        matches!(
            self.kind,
            DefinitionKind::Function {
                is_class_function: true,
                ..
            }
        )
    }

    /// Simple class or function name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match &self.kind {
            DefinitionKind::Class { class_name } => class_name,
            DefinitionKind::Function { function_name, .. } => function_name,
        }
    }

    /// Package-qualified name used in diagnostics.
    #[must_use]
    pub fn label(&self) -> String {
        qualify(&self.package_name, self.simple_name())
    }
}

/// Reference to another module whose generated accessor is included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    /// Package of the included module class.
    #[serde(default)]
    pub package_name: String,
    /// Simple name of the included module class.
    pub class_name: String,
}

impl ModuleRef {
    /// Creates a module reference.
    #[must_use]
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
        }
    }
}

/// A named, package-qualified group of definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    /// Simple module class name.
    pub name: String,
    /// Package declaring the module class.
    #[serde(default)]
    pub package_name: String,
    /// Visibility of the generated field and accessor.
    #[serde(default)]
    pub visibility: Visibility,
    /// Definitions in declaration order.
    #[serde(default)]
    pub definitions: Vec<Definition>,
    /// Other modules included by this one.
    #[serde(default)]
    pub includes: Option<Vec<ModuleRef>>,
}

impl Module {
    /// Creates an empty public module.
    #[must_use]
    pub fn new(package_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_name: package_name.into(),
            visibility: Visibility::Public,
            definitions: Vec::new(),
            includes: None,
        }
    }

    /// Sets the module visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Appends a definition.
    #[must_use]
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Appends an included module.
    #[must_use]
    pub fn including(mut self, module: ModuleRef) -> Self {
        self.includes.get_or_insert_with(Vec::new).push(module);
        self
    }

    /// Fully qualified module class path, for example `com.app.DataModule`.
    #[must_use]
    pub fn path(&self) -> String {
        qualify(&self.package_name, &self.name)
    }

    /// Name of the generated module field, unique per module.
    ///
    /// Package separators become underscores: `com.app` + `DataModule`
    /// yields `com_app_DataModule`.
    #[must_use]
    pub fn field_name(&self) -> String {
        if self.package_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.package_name.replace('.', "_"), self.name)
        }
    }

    /// Whether any definition needs the module instance.
    #[must_use]
    pub fn has_class_functions(&self) -> bool {
        self.definitions.iter().any(Definition::is_class_function)
    }
}

/// Everything extracted for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    /// User-declared modules, each generated into its own unit.
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Definition sources not owned by a declared module; pooled into the
    /// shared default module.
    #[serde(default)]
    pub default_modules: Vec<Module>,
}

pub(crate) fn qualify(package_name: &str, name: &str) -> String {
    if package_name.is_empty() {
        name.to_owned()
    } else {
        format!("{package_name}.{name}")
    }
}
