//! JSX usage scanning.
//!
//! Walks a file's AST after binding extraction and resolves JSX opening-tag
//! identifiers against that file's alias table. Only plain identifier tags
//! participate; member-expression tags (`<Ns.Button/>`) and namespaced tags
//! are out of scope, as is any non-JSX use of an imported symbol.

use swc_ecma_ast::{JSXElementName, JSXOpeningElement};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::bindings::ImportBindings;
use crate::core::stats::ComponentKey;

/// Visitor that resolves JSX opening elements for a single file.
pub struct UsageCollector<'a> {
    bindings: &'a ImportBindings,
    /// One event per resolved usage, in source order.
    pub usages: Vec<ComponentKey>,
}

impl<'a> UsageCollector<'a> {
    pub fn new(bindings: &'a ImportBindings) -> Self {
        Self {
            bindings,
            usages: Vec::new(),
        }
    }
}

impl Visit for UsageCollector<'_> {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        if let JSXElementName::Ident(ident) = &node.name {
            let tag = ident.sym.to_string();
            if let Some(key) = self.bindings.get(&tag) {
                self.usages.push(key.clone());
            }
        }
        // Attributes may contain nested JSX expressions.
        node.visit_children_with(self);
    }
}
