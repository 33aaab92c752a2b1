use oxc_ast::ast::{
    ArrayExpression, ArrayExpressionElement, ArrayPattern, BindingPattern, BindingPatternKind,
    Expression, VariableDeclaration, VariableDeclarator,
};
use oxc_span::Span;
use sillage_carton::{CompactString, FxHashSet, NameSet};
use sillage_trame::{bound_names, free_identifiers, required_modules};

use super::{Dependencies, ExtractContext};
use crate::error::{ResolveError, ResolveResult};
use crate::symbol_map::SymbolMap;

type Binding = (CompactString, Dependencies);

/// `var`/`let`/`const` statements.
///
/// Every bound name gets the dependencies of the part of the initializer it
/// is taken from. Array patterns initialized by a plain array literal are
/// matched position by position for free identifiers, while `require()`
/// targets still come from the whole literal. Every other destructuring
/// depends on the whole initializer. Destructuring without an initializer is not tracked.
pub fn bindings_from_variable(
    declaration: &VariableDeclaration<'_>,
    exported: bool,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<SymbolMap> {
    let mut seen = FxHashSet::default();
    let mut symbols = SymbolMap::new();

    for declarator in declaration.declarations.iter() {
        for (name, dependencies) in declarator_bindings(declarator, ctx)? {
            if !seen.insert(name.clone()) {
                return Err(ResolveError::DuplicateSymbol {
                    name,
                    snippet: ctx.snippet(declaration.span),
                    span: declaration.span,
                });
            }
            if exported {
                symbols.bind_export(name, dependencies);
            } else {
                symbols.bind_module_symbol(name, dependencies);
            }
        }
    }

    Ok(symbols)
}

fn declarator_bindings(
    declarator: &VariableDeclarator<'_>,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<Vec<Binding>> {
    let bindings = match (&declarator.id.kind, &declarator.init) {
        (BindingPatternKind::BindingIdentifier(id), init) => {
            let dependencies = init
                .as_ref()
                .map(|init| Dependencies::of(init, ctx))
                .unwrap_or_default();
            vec![(CompactString::new(id.name.as_str()), dependencies)]
        }
        (BindingPatternKind::ArrayPattern(_) | BindingPatternKind::ObjectPattern(_), None) => {
            Vec::new()
        }
        (BindingPatternKind::ArrayPattern(pattern), Some(init @ Expression::ArrayExpression(array)))
            if !has_spread(array) =>
        {
            positional_bindings(pattern, init, array, ctx)
        }
        (BindingPatternKind::ArrayPattern(_) | BindingPatternKind::ObjectPattern(_), Some(init)) => {
            whole_initializer_bindings(&declarator.id, init, ctx)
        }
        // The parser never produces this; only hand-built trees reach it
        (BindingPatternKind::AssignmentPattern(_), _) => {
            return Err(unsupported_target(declarator.span, ctx));
        }
    };
    Ok(bindings)
}

fn unsupported_target(span: Span, ctx: &ExtractContext<'_>) -> ResolveError {
    ResolveError::UnsupportedBindingTarget {
        snippet: ctx.snippet(span),
        span,
    }
}

fn has_spread(array: &ArrayExpression<'_>) -> bool {
    array
        .elements
        .iter()
        .any(|element| matches!(element, ArrayExpressionElement::SpreadElement(_)))
}

/// Names of `pattern` paired with `dependencies` plus whatever the pattern's
/// own default values and computed keys reference.
fn bind_all(
    pattern: &BindingPattern<'_>,
    mut dependencies: Dependencies,
    ctx: &ExtractContext<'_>,
) -> Vec<Binding> {
    dependencies.extend(Dependencies::of(pattern, ctx));
    bound_names(pattern)
        .into_iter()
        .map(|name| (name, dependencies.clone()))
        .collect()
}

fn whole_initializer_bindings(
    pattern: &BindingPattern<'_>,
    init: &Expression<'_>,
    ctx: &ExtractContext<'_>,
) -> Vec<Binding> {
    bind_all(pattern, Dependencies::of(init, ctx), ctx)
}

fn positional_bindings(
    pattern: &ArrayPattern<'_>,
    init: &Expression<'_>,
    array: &ArrayExpression<'_>,
    ctx: &ExtractContext<'_>,
) -> Vec<Binding> {
    // Only free identifiers are narrowed; requires come from the whole literal
    let imports = required_modules(init);
    let shadow_check = ctx.options().shadow_check;
    let element_dependencies = |values: &[ArrayExpressionElement<'_>]| {
        let mut symbols = NameSet::default();
        for value in values {
            symbols.extend(free_identifiers(value, shadow_check));
        }
        Dependencies {
            symbols,
            imports: imports.clone(),
        }
    };

    let mut bindings = Vec::new();

    for (index, element) in pattern.elements.iter().enumerate() {
        let Some(element) = element else { continue };
        // Missing and elided values contribute no symbols
        let values = array.elements.get(index..=index).unwrap_or_default();
        bindings.extend(bind_all(element, element_dependencies(values), ctx));
    }

    if let Some(rest) = &pattern.rest {
        let values = array
            .elements
            .get(pattern.elements.len()..)
            .unwrap_or_default();
        bindings.extend(bind_all(&rest.argument, element_dependencies(values), ctx));
    }

    bindings
}
