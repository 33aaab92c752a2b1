//! Carton - The toolbox for Sillage.
//!
//! This crate provides the small set of data structures every other Sillage
//! crate shares, much like a carton (artist's portfolio case) holds the
//! materials an artist carries from one workshop to the next.
//!
//! # Modules
//!
//! - **Collections**: fast hash maps/sets and inline vectors re-exported from
//!   the crates the whole workspace agrees on
//! - **Sorted views**: deterministic rendering of name relations
//!
//! # Example
//!
//! ```
//! use sillage_carton::{CompactString, NameSet, Relation};
//!
//! let mut relation = Relation::default();
//! relation
//!     .entry(CompactString::new("default"))
//!     .or_insert_with(NameSet::default)
//!     .insert(CompactString::new("./bar"));
//!
//! assert_eq!(sillage_carton::sorted_relation(&relation)["default"], ["./bar"]);
//! ```

pub mod sorted;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::SmallVec;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

pub use sorted::{serialize_relation, sorted_names, sorted_relation, write_relation};

/// An unordered set of identifier names or module specifiers.
pub type NameSet = FxHashSet<CompactString>;

/// A mapping from a name to the set of names it relates to.
pub type Relation = FxHashMap<CompactString, NameSet>;
