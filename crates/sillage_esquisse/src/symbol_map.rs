//! Symbol maps: the per-module relations between top-level symbols, exports
//! and imported module specifiers.

use std::fmt;

use serde::Serialize;
use sillage_carton::{serialize_relation, write_relation, CompactString, NameSet, Relation};

/// Export name used for `export default` and `export =`.
pub const DEFAULT_EXPORT: &str = "default";

/// Binding relations of a single module.
///
/// Partial maps are produced per top-level statement and combined with
/// [`SymbolMap::merge`], which unions the member sets of shared keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMap {
    /// Top-level symbol -> specifiers it is bound to directly
    #[serde(serialize_with = "serialize_relation")]
    pub module_symbols_to_imports: Relation,
    /// Top-level symbol -> free identifiers of its definition
    #[serde(serialize_with = "serialize_relation")]
    pub module_symbols_to_other_module_symbols: Relation,
    /// Export name -> specifiers it re-exports or requires directly
    #[serde(serialize_with = "serialize_relation")]
    pub module_exports_to_direct_imports: Relation,
    /// Export name -> free identifiers of the exported value
    #[serde(serialize_with = "serialize_relation")]
    pub module_exports_to_module_symbols: Relation,
}

impl SymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all four relations are empty
    pub fn is_empty(&self) -> bool {
        self.module_symbols_to_imports.is_empty()
            && self.module_symbols_to_other_module_symbols.is_empty()
            && self.module_exports_to_direct_imports.is_empty()
            && self.module_exports_to_module_symbols.is_empty()
    }

    /// Union of `self` and `other`
    #[must_use]
    pub fn merge(mut self, other: SymbolMap) -> SymbolMap {
        self.merge_from(other);
        self
    }

    /// Union `other` into `self`, relation by relation
    pub fn merge_from(&mut self, other: SymbolMap) {
        union_into(
            &mut self.module_symbols_to_imports,
            other.module_symbols_to_imports,
        );
        union_into(
            &mut self.module_symbols_to_other_module_symbols,
            other.module_symbols_to_other_module_symbols,
        );
        union_into(
            &mut self.module_exports_to_direct_imports,
            other.module_exports_to_direct_imports,
        );
        union_into(
            &mut self.module_exports_to_module_symbols,
            other.module_exports_to_module_symbols,
        );
    }
}

fn union_into(target: &mut Relation, source: Relation) {
    for (key, members) in source {
        target.entry(key).or_default().extend(members);
    }
}

/// Add `members` to the set of `key`, creating the entry even when `members` is empty.
pub(crate) fn relate(
    relation: &mut Relation,
    key: CompactString,
    members: impl IntoIterator<Item = CompactString>,
) {
    relation.entry(key).or_insert_with(NameSet::default).extend(members);
}

impl fmt::Display for SymbolMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("module symbols -> imports", &self.module_symbols_to_imports),
            (
                "module symbols -> module symbols",
                &self.module_symbols_to_other_module_symbols,
            ),
            (
                "exports -> direct imports",
                &self.module_exports_to_direct_imports,
            ),
            (
                "exports -> module symbols",
                &self.module_exports_to_module_symbols,
            ),
        ];
        for (title, relation) in sections {
            writeln!(f, "[{title}]")?;
            write_relation(f, relation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn names(members: &[&str]) -> Vec<CompactString> {
        members.iter().map(|m| CompactString::new(m)).collect()
    }

    #[test]
    fn test_merge_unions_shared_keys() {
        let mut left = SymbolMap::new();
        relate(&mut left.module_symbols_to_imports, "a".into(), names(&["./x"]));
        relate(&mut left.module_exports_to_direct_imports, "e".into(), names(&["./m"]));

        let mut right = SymbolMap::new();
        relate(&mut right.module_symbols_to_imports, "a".into(), names(&["./y"]));
        relate(&mut right.module_symbols_to_imports, "b".into(), names(&[]));
        relate(&mut right.module_exports_to_direct_imports, "e".into(), names(&["./n"]));

        let merged = left.merge(right);
        assert_snapshot!(merged.to_string(), @r"
        [module symbols -> imports]
        a: ./x, ./y
        b: (none)
        [module symbols -> module symbols]
        [exports -> direct imports]
        e: ./m, ./n
        [exports -> module symbols]
        ");
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut map = SymbolMap::new();
        relate(
            &mut map.module_exports_to_module_symbols,
            DEFAULT_EXPORT.into(),
            names(&["foo"]),
        );
        assert_eq!(map.clone().merge(SymbolMap::new()), map);
        assert_eq!(SymbolMap::new().merge(map.clone()), map);
        assert!(SymbolMap::new().is_empty());
        assert!(!map.is_empty());
    }

    #[test]
    fn test_serialize_sorted() {
        let mut map = SymbolMap::new();
        relate(&mut map.module_symbols_to_imports, "b".into(), names(&["./z", "./a"]));
        relate(&mut map.module_symbols_to_imports, "a".into(), names(&[]));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"moduleSymbolsToImports":{"a":[],"b":["./a","./z"]},"moduleSymbolsToOtherModuleSymbols":{},"moduleExportsToDirectImports":{},"moduleExportsToModuleSymbols":{}}"#
        );
    }
}
