//! # Sillage
//!
//! Export-to-import dependency resolution for JavaScript and TypeScript
//! modules, written in Rust.
//!
//! For every export of a module, Sillage computes the set of external module
//! specifiers that export transitively depends on, without executing the
//! module. Build tooling uses the result to decide which dependencies have
//! to be available before an export can be used.
//!
//! This crate re-exports all Sillage sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared collections and sorted views
//! - [`trame`] - Lexical scopes, free identifiers and `require()` scanning
//! - [`esquisse`] - Symbol maps and the dependency closure
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//! use sillage::{analyze_source, ResolverOptions};
//!
//! let analysis = analyze_source(
//!     Path::new("index.ts"),
//!     "import { api } from './api';\nexport const load = () => api.fetch();",
//!     &ResolverOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(analysis.export_map.sorted()["load"], ["./api"]);
//! ```

/// Shared collections and sorted views.
pub use sillage_carton as carton;

/// Lexical scopes, free identifiers and `require()` scanning.
pub use sillage_trame as trame;

/// Symbol maps and the dependency closure.
pub use sillage_esquisse as esquisse;

mod analyze;
mod config;
mod error;

pub use analyze::{analyze_file, analyze_source, source_type_for, ModuleAnalysis};
pub use config::{load_config, SillageConfig, CONFIG_FILE_NAME};
pub use error::{SillageError, SillageResult};
pub use sillage_esquisse::{
    ExportMap, ResolveError, ResolverOptions, ShadowCheck, SideEffectImports, SymbolMap,
};
