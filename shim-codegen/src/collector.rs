//! Method collection across builder classes.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use typeshim_declarations::{BuilderClass, MethodDeclaration};

use crate::LogicalMethod;

/// Result of collecting the methods of a set of builder classes.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Logical methods sorted by name.
    pub methods: Vec<LogicalMethod>,
    /// Names whose group turned out empty.
    pub skipped: Vec<String>,
}

/// Group the public named methods of `builders` into logical methods.
///
/// Methods are ordered alphabetically by name; overloads keep discovery
/// order (class order, then declaration order).
pub fn collect_methods(builders: &[BuilderClass]) -> Collection {
    let declarations: Vec<&MethodDeclaration> = builders
        .iter()
        .flat_map(BuilderClass::methods)
        .filter(|m| m.is_public() && m.name.is_some())
        .collect();

    let names: BTreeSet<&str> = declarations
        .iter()
        .filter_map(|m| m.name.as_deref())
        .collect();

    let mut groups: IndexMap<&str, Vec<MethodDeclaration>> = IndexMap::new();
    for declaration in &declarations {
        if let Some(name) = declaration.name.as_deref() {
            groups.entry(name).or_default().push((*declaration).clone());
        }
    }

    let mut collection = Collection::default();
    for name in names {
        let overloads = groups.swap_remove(name).unwrap_or_default();
        if overloads.is_empty() {
            tracing::warn!(method = name, "skipping method without declarations");
            collection.skipped.push(name.to_string());
            continue;
        }

        match LogicalMethod::new(name, overloads) {
            Some(method) => {
                tracing::debug!(
                    method = name,
                    overloads = method.overloads().len(),
                    parameters = %method.parameter_list(),
                    "collected method"
                );
                collection.methods.push(method);
            }
            None => collection.skipped.push(name.to_string()),
        }
    }

    tracing::info!(methods = collection.methods.len(), "collected builder methods");
    collection
}
