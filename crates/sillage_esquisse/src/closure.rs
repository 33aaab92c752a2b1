//! Dependency closure: from a symbol map to the import specifiers every
//! export transitively reaches.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use sillage_carton::{
    serialize_relation, sorted_relation, write_relation, CompactString, NameSet, Relation,
};

use crate::symbol_map::SymbolMap;

/// Export name -> every module specifier it reaches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportMap(Relation);

impl ExportMap {
    /// Specifiers reached by `export`
    pub fn get(&self, export: &str) -> Option<&NameSet> {
        self.0.get(export)
    }

    pub fn contains_export(&self, export: &str) -> bool {
        self.0.contains_key(export)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NameSet)> {
        self.0.iter().map(|(export, specifiers)| (export.as_str(), specifiers))
    }

    /// Exports and their specifiers, both sorted
    pub fn sorted(&self) -> BTreeMap<&str, Vec<&str>> {
        sorted_relation(&self.0)
    }

    pub fn into_inner(self) -> Relation {
        self.0
    }
}

impl From<Relation> for ExportMap {
    fn from(relation: Relation) -> Self {
        Self(relation)
    }
}

impl Serialize for ExportMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_relation(&self.0, serializer)
    }
}

impl fmt::Display for ExportMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_relation(f, &self.0)
    }
}

/// Invert a relation: every member maps to the keys that contain it.
pub fn reverse_relation(relation: &Relation) -> Relation {
    let mut reversed = Relation::default();
    for (key, members) in relation {
        for member in members {
            reversed
                .entry(member.clone())
                .or_default()
                .insert(key.clone());
        }
    }
    reversed
}

/// `entrypoint` and everything reachable from it through `relation`.
pub fn reachable_from(relation: &Relation, entrypoint: &str) -> NameSet {
    let mut visited = NameSet::default();
    let mut frontier = vec![CompactString::new(entrypoint)];

    while let Some(current) = frontier.pop() {
        if visited.contains(&current) {
            continue;
        }
        if let Some(next) = relation.get(current.as_str()) {
            frontier.extend(next.iter().filter(|name| !visited.contains(*name)).cloned());
        }
        visited.insert(current);
    }

    visited
}

/// Compute the export map of a module from its symbol map.
///
/// Direct re-exports and requires seed the result. Then, for every import
/// binding, every symbol that transitively depends on it propagates the
/// import's specifier to the exports that reference that symbol.
pub fn resolve_export_map(symbols: &SymbolMap) -> ExportMap {
    let mut exports = symbols.module_exports_to_direct_imports.clone();

    let importers = reverse_relation(&symbols.module_symbols_to_imports);
    let dependents = reverse_relation(&symbols.module_symbols_to_other_module_symbols);
    let exporters = reverse_relation(&symbols.module_exports_to_module_symbols);

    for (specifier, bound_symbols) in &importers {
        for bound in bound_symbols {
            for symbol in reachable_from(&dependents, bound) {
                let Some(export_names) = exporters.get(&symbol) else {
                    continue;
                };
                for export_name in export_names {
                    exports
                        .entry(export_name.clone())
                        .or_default()
                        .insert(specifier.clone());
                }
            }
        }
    }

    ExportMap(exports)
}
