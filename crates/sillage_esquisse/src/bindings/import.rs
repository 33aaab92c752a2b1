use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier};
use sillage_carton::CompactString;

use super::ExtractContext;
use crate::error::{ResolveError, ResolveResult};
use crate::options::SideEffectImports;
use crate::symbol_map::{relate, SymbolMap};

/// Bind every local name introduced by an import to its module specifier.
///
/// Default, named and namespace specifiers may be combined in one
/// declaration; all of them are bound.
pub fn bindings_from_import(
    decl: &ImportDeclaration<'_>,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<SymbolMap> {
    let mut symbols = SymbolMap::new();

    let Some(specifiers) = &decl.specifiers else {
        return match ctx.options().side_effect_imports {
            SideEffectImports::Ignore => {
                tracing::trace!("ignoring side-effect import of {}", decl.source.value);
                Ok(symbols)
            }
            SideEffectImports::Reject => Err(ResolveError::ImportWithoutBindings {
                snippet: ctx.snippet(decl.span),
                span: decl.span,
            }),
        };
    };

    let source = CompactString::new(decl.source.value.as_str());
    for specifier in specifiers.iter() {
        let local = match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(specifier) => &specifier.local,
            ImportDeclarationSpecifier::ImportDefaultSpecifier(specifier) => &specifier.local,
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(specifier) => &specifier.local,
        };
        relate(
            &mut symbols.module_symbols_to_imports,
            CompactString::new(local.name.as_str()),
            [source.clone()],
        );
    }

    Ok(symbols)
}
