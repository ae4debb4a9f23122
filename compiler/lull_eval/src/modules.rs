//! Import resolution.
//!
//! Each `import module.name [as alias]` pulls one function out of another
//! source text and adds it to the importing program's function table under
//! `alias`. Sources come from a [`SourceProvider`]; each module is fetched
//! and parsed at most once per run. A module's own imports are not followed.

use std::collections::hash_map::Entry;
use std::rc::Rc;

use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{FunctionTable, ImportDecl};
use rustc_hash::FxHashMap;

/// Source text of a module plus the label used to identify it in errors
/// (a path, a bundle entry, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSource {
    pub code: String,
    pub label: String,
}

/// Supplies module sources by module name (`std` for `std.ll`).
pub trait SourceProvider {
    /// `None` when no source exists for `module`.
    fn fetch(&self, module: &str) -> Option<ModuleSource>;
}

/// Provider with no modules.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoModules;

impl SourceProvider for NoModules {
    fn fetch(&self, _module: &str) -> Option<ModuleSource> {
        None
    }
}

/// Provider backed by an in-memory name → source map.
#[derive(Clone, Debug, Default)]
pub struct InMemorySources {
    modules: FxHashMap<String, String>,
}

impl InMemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>, code: impl Into<String>) -> Self {
        self.insert(module, code);
        self
    }

    pub fn insert(&mut self, module: impl Into<String>, code: impl Into<String>) {
        self.modules.insert(module.into(), code.into());
    }
}

impl SourceProvider for InMemorySources {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        self.modules.get(module).map(|code| ModuleSource {
            code: code.clone(),
            label: format!("memory:{module}.ll"),
        })
    }
}

/// Try each provider in turn.
impl<P: SourceProvider> SourceProvider for [P] {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        self.iter().find_map(|provider| provider.fetch(module))
    }
}

impl<P: SourceProvider> SourceProvider for Vec<P> {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        self.as_slice().fetch(module)
    }
}

impl<P: SourceProvider + ?Sized> SourceProvider for Box<P> {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        (**self).fetch(module)
    }
}

impl<P: SourceProvider + ?Sized> SourceProvider for &P {
    fn fetch(&self, module: &str) -> Option<ModuleSource> {
        (**self).fetch(module)
    }
}

struct LoadedModule {
    functions: FunctionTable,
    label: String,
}

/// Memoizing import resolver for one run.
pub struct ModuleResolver<'p> {
    provider: &'p dyn SourceProvider,
    loaded: FxHashMap<String, LoadedModule>,
}

impl<'p> ModuleResolver<'p> {
    pub fn new(provider: &'p dyn SourceProvider) -> Self {
        ModuleResolver {
            provider,
            loaded: FxHashMap::default(),
        }
    }

    /// Resolve `imports` in order, adding each imported function to
    /// `functions` under its alias.
    #[tracing::instrument(level = "debug", skip_all, fields(imports = imports.len()))]
    pub fn resolve_imports(
        &mut self,
        functions: &mut FunctionTable,
        imports: &[ImportDecl],
    ) -> ScriptResult<()> {
        for import in imports {
            let module = self.load(import)?;
            let Some(function) = module.functions.get(&import.name) else {
                return Err(ScriptError::new(
                    ErrorKind::FunctionNotInModule {
                        module: import.module.clone(),
                        name: import.name.clone(),
                        label: module.label.clone(),
                    },
                    import.position,
                ));
            };
            let function = Rc::clone(function);
            if functions.contains_key(&import.alias) {
                return Err(ScriptError::new(
                    ErrorKind::AliasCollision {
                        alias: import.alias.clone(),
                    },
                    import.position,
                ));
            }
            tracing::trace!(
                module = %import.module,
                name = %import.name,
                alias = %import.alias,
                "imported function"
            );
            functions.insert(import.alias.clone(), function);
        }
        Ok(())
    }

    /// Number of distinct modules fetched so far.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    fn load(&mut self, import: &ImportDecl) -> ScriptResult<&LoadedModule> {
        match self.loaded.entry(import.module.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let Some(source) = self.provider.fetch(&import.module) else {
                    return Err(ScriptError::new(
                        ErrorKind::ModuleNotFound {
                            module: import.module.clone(),
                        },
                        import.position,
                    ));
                };
                tracing::debug!(module = %import.module, label = %source.label, "loading module");
                let parsed = lull_parse::parse_program(&source.code)?;
                Ok(entry.insert(LoadedModule {
                    functions: parsed.functions,
                    label: source.label,
                }))
            }
        }
    }
}
