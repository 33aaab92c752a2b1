//! Sorted views over unordered name sets.
//!
//! Relations are stored in hash maps, so anything that leaves the process
//! (snapshots, JSON, terminal output) goes through these helpers to get a
//! stable order.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, Serializer};

use crate::{NameSet, Relation};

/// Members of a set in ascending order.
#[inline]
pub fn sorted_names(set: &NameSet) -> Vec<&str> {
    let mut names: Vec<&str> = set.iter().map(|name| name.as_str()).collect();
    names.sort_unstable();
    names
}

/// A relation with sorted keys and sorted members.
pub fn sorted_relation(relation: &Relation) -> BTreeMap<&str, Vec<&str>> {
    relation
        .iter()
        .map(|(key, members)| (key.as_str(), sorted_names(members)))
        .collect()
}

/// Serialize a relation as a JSON-like map with sorted keys and members.
///
/// Usable as `#[serde(serialize_with = "serialize_relation")]`.
pub fn serialize_relation<S>(relation: &Relation, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let sorted = sorted_relation(relation);
    let mut map = serializer.serialize_map(Some(sorted.len()))?;
    for (key, members) in &sorted {
        map.serialize_entry(key, members)?;
    }
    map.end()
}

/// Write one `key: a, b` line per entry; an empty set renders as `(none)`.
pub fn write_relation(f: &mut fmt::Formatter<'_>, relation: &Relation) -> fmt::Result {
    for (key, members) in sorted_relation(relation) {
        if members.is_empty() {
            writeln!(f, "{key}: (none)")?;
        } else {
            writeln!(f, "{key}: {}", members.join(", "))?;
        }
    }
    Ok(())
}
