//! Import binding extraction.
//!
//! Walks one file's AST and filters import declarations down to the tracked
//! libraries, producing two things: an import event per matched named
//! specifier, and the file-local alias table that the usage scanner resolves
//! JSX tags against. The table never outlives the file's analysis.

use std::collections::{HashMap, HashSet};

use swc_ecma_ast::{ImportDecl, ImportSpecifier, ModuleExportName};
use swc_ecma_visit::Visit;

use crate::core::stats::ComponentKey;

/// Immutable set of library identifiers configured for a run.
#[derive(Debug, Clone, Default)]
pub struct TrackedLibraries {
    names: HashSet<String>,
}

impl TrackedLibraries {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, library: &str) -> bool {
        self.names.contains(library)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// File-local alias table: local identifier -> originating (library, export).
///
/// When the same local name is bound twice in one file, the later binding
/// wins for resolution.
pub type ImportBindings = HashMap<String, ComponentKey>;

/// Visitor that collects tracked-library import bindings for a single file.
pub struct BindingCollector<'a> {
    tracked: &'a TrackedLibraries,
    /// Alias table for the usage scanner.
    pub bindings: ImportBindings,
    /// One event per matched named-import specifier, in source order.
    pub imports: Vec<ComponentKey>,
}

impl<'a> BindingCollector<'a> {
    pub fn new(tracked: &'a TrackedLibraries) -> Self {
        Self {
            tracked,
            bindings: ImportBindings::new(),
            imports: Vec::new(),
        }
    }
}

impl Visit for BindingCollector<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        let Some(library) = node.src.value.as_str() else {
            return;
        };
        // Declarations from untracked libraries are skipped entirely,
        // specifiers included.
        if !self.tracked.contains(library) {
            return;
        }

        for specifier in &node.specifiers {
            match specifier {
                ImportSpecifier::Named(named) => {
                    let local_name = named.local.sym.to_string();
                    let imported_name = named
                        .imported
                        .as_ref()
                        .map(|i| match i {
                            ModuleExportName::Ident(ident) => ident.sym.to_string(),
                            ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                        })
                        .unwrap_or_else(|| local_name.clone());

                    let key = ComponentKey::new(library, imported_name);
                    self.imports.push(key.clone());
                    self.bindings.insert(local_name, key);
                }
                // Default and namespace imports are not audited.
                ImportSpecifier::Default(_) | ImportSpecifier::Namespace(_) => {}
            }
        }
    }
}
