use oxc_ast::ast::{BindingIdentifier, Class, Function};
use oxc_span::Span;
use sillage_carton::CompactString;

use super::{Dependencies, ExtractContext};
use crate::declaration::ExportModifier;
use crate::error::{ResolveError, ResolveResult};
use crate::symbol_map::{SymbolMap, DEFAULT_EXPORT};

/// Function declarations, exported or not.
///
/// Dependencies are collected over the whole declaration. A named function
/// is always recorded as a module symbol; an exported one is additionally
/// recorded under its export name.
pub fn bindings_from_function(
    function: &Function<'_>,
    export: ExportModifier,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<SymbolMap> {
    bind_named_declaration(
        function.id.as_ref(),
        Dependencies::of(function, ctx),
        export,
        function.span,
        ctx,
    )
}

/// Class declarations follow the same rules as functions.
pub fn bindings_from_class(
    class: &Class<'_>,
    export: ExportModifier,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<SymbolMap> {
    bind_named_declaration(
        class.id.as_ref(),
        Dependencies::of(class, ctx),
        export,
        class.span,
        ctx,
    )
}

fn bind_named_declaration(
    id: Option<&BindingIdentifier<'_>>,
    dependencies: Dependencies,
    export: ExportModifier,
    span: Span,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<SymbolMap> {
    let mut symbols = SymbolMap::new();
    let name = id.map(|id| CompactString::new(id.name.as_str()));

    match (export, &name) {
        (ExportModifier::Local, _) => {}
        (ExportModifier::Default, _) => symbols.bind_export(
            CompactString::const_new(DEFAULT_EXPORT),
            dependencies.clone(),
        ),
        (ExportModifier::Named, Some(name)) => {
            symbols.bind_export(name.clone(), dependencies.clone())
        }
        (ExportModifier::Named, None) => {
            return Err(ResolveError::AnonymousExport {
                snippet: ctx.snippet(span),
                span,
            });
        }
    }

    if let Some(name) = name {
        symbols.bind_module_symbol(name, dependencies);
    }

    Ok(symbols)
}
