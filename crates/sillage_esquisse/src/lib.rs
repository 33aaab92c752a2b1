//! # sillage_esquisse
//!
//! Esquisse - The symbol resolution layer for Sillage.
//!
//! ## Name Origin
//!
//! **Esquisse** (/ɛs.kis/) is the preliminary sketch a painter lays down
//! before the finished work: the lines that decide what connects to what.
//! `sillage_esquisse` sketches the connections inside a module, from each
//! top-level symbol to what it uses, and from each export to the modules it
//! ultimately pulls in.
//!
//! ## Purpose
//!
//! - **Symbol Maps**: per-module relations built statement by statement
//! - **Binding Extraction**: one extractor per kind of top-level declaration
//! - **Dependency Closure**: export -> reachable import specifiers
//!
//! ## Example
//!
//! ```
//! use oxc_allocator::Allocator;
//! use oxc_parser::Parser;
//! use oxc_span::SourceType;
//! use sillage_esquisse::{get_export_map, ResolverOptions};
//!
//! let source = r#"
//!     import bar from "./bar";
//!     const helper = () => bar();
//!     export default function run() { return helper(); }
//! "#;
//! let allocator = Allocator::default();
//! let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
//!
//! let exports = get_export_map(&ret.program, &ResolverOptions::default()).unwrap();
//! assert_eq!(exports.sorted()["default"], ["./bar"]);
//! ```

mod bindings;
mod closure;
mod declaration;
mod driver;
mod error;
mod options;
mod symbol_map;

pub use bindings::{Dependencies, ExtractContext};
pub use closure::{reachable_from, resolve_export_map, reverse_relation, ExportMap};
pub use declaration::{ExportModifier, TopLevelDeclaration};
pub use driver::{bindings_from_statement, get_export_map, get_symbol_map};
pub use error::{ResolveError, ResolveResult};
pub use options::{ResolverOptions, ShadowCheck, SideEffectImports};
pub use symbol_map::{SymbolMap, DEFAULT_EXPORT};
