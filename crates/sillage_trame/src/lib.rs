//! # sillage_trame
//!
//! Trame - The lexical scope layer for Sillage.
//!
//! ## Name Origin
//!
//! **Trame** (/tʁam/) is the weft of a woven fabric: the threads that run
//! across the warp and hold it together. `sillage_trame` weaves scopes
//! across the syntax tree so that every identifier reference can be traced
//! back to the declaration (or lack of one) that it hangs on.
//!
//! ## Purpose
//!
//! - **Scope Tracking**: an arena of [`LexicalScope`]s built while walking
//! - **Scope Walking**: [`ScopeWalker`] reports references with live scopes
//! - **Free Identifiers**: names a subtree needs from outside of itself
//! - **Require Scanning**: CommonJS `require("...")` specifiers in a subtree
//!
//! ## Architecture
//!
//! ```text
//!   oxc_parser (Parse)
//!        ↓
//!  sillage_trame (Scopes, references)  ← This crate
//!        ↓
//! sillage_esquisse (Symbol maps)
//! ```

mod binding;
mod references;
mod require;
mod scope;
mod walker;

pub use binding::{
    bound_names, bound_names_in_declaration, bound_names_in_parameters, collect_bound_names,
    type_parameter_names, BoundNames,
};
pub use references::{free_identifiers, FreeIdentifierCollector, ShadowCheck};
pub use require::{required_modules, RequireCollector};
pub use scope::{LexicalScope, ScopeId, ScopeStack};
pub use walker::{ScopeVisitor, ScopeWalker, WalkRoot};
