//! Per-declaration binding extractors.
//!
//! Each extractor turns one top-level declaration into a partial
//! [`SymbolMap`]; the driver folds the partial maps together.

mod export;
mod function;
mod import;
mod variable;

pub use export::{
    bindings_from_export_assignment, bindings_from_export_clause, bindings_from_export_namespace,
};
pub use function::{bindings_from_class, bindings_from_function};
pub use import::bindings_from_import;
pub use variable::bindings_from_variable;

use oxc_span::Span;
use sillage_carton::{CompactString, NameSet};
use sillage_trame::{free_identifiers, required_modules, WalkRoot};

use crate::options::ResolverOptions;
use crate::symbol_map::{relate, SymbolMap};

/// Shared state for extracting bindings out of one program.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'s> {
    source_text: &'s str,
    options: &'s ResolverOptions,
}

impl<'s> ExtractContext<'s> {
    pub fn new(source_text: &'s str, options: &'s ResolverOptions) -> Self {
        Self {
            source_text,
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &ResolverOptions {
        self.options
    }

    /// Source text covered by `span`, for error reporting
    pub fn snippet(&self, span: Span) -> String {
        span.source_text(self.source_text).to_string()
    }
}

/// What a definition depends on: other symbols by name, and modules it requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub symbols: NameSet,
    pub imports: NameSet,
}

impl Dependencies {
    /// Free identifiers and `require()` targets of `node`
    pub fn of<'a, N: WalkRoot<'a>>(node: &N, ctx: &ExtractContext<'_>) -> Self {
        Self {
            symbols: free_identifiers(node, ctx.options().shadow_check),
            imports: required_modules(node),
        }
    }

    pub fn extend(&mut self, other: Dependencies) {
        self.symbols.extend(other.symbols);
        self.imports.extend(other.imports);
    }
}

impl SymbolMap {
    /// Record `dependencies` for a top-level symbol
    pub fn bind_module_symbol(&mut self, name: CompactString, dependencies: Dependencies) {
        relate(
            &mut self.module_symbols_to_other_module_symbols,
            name.clone(),
            dependencies.symbols,
        );
        relate(&mut self.module_symbols_to_imports, name, dependencies.imports);
    }

    /// Record `dependencies` for an export
    pub fn bind_export(&mut self, name: CompactString, dependencies: Dependencies) {
        relate(
            &mut self.module_exports_to_module_symbols,
            name.clone(),
            dependencies.symbols,
        );
        relate(
            &mut self.module_exports_to_direct_imports,
            name,
            dependencies.imports,
        );
    }
}
