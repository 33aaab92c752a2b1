//! Names introduced by declaration targets.
//!
//! A target is either a plain identifier or an arbitrarily nested
//! object/array destructuring pattern. Object properties contribute the name
//! of their local binding, never the source key (`{ key: local }` binds
//! `local`); array holes are skipped; rest elements and defaulted targets
//! contribute the names of the target itself.

use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, FormalParameters, TSTypeParameterDeclaration,
    VariableDeclaration,
};
use sillage_carton::{CompactString, SmallVec};

/// Bound names are usually few; keep them inline.
pub type BoundNames = SmallVec<[CompactString; 4]>;

/// Names bound by a single declaration target, in source order
pub fn bound_names(pattern: &BindingPattern<'_>) -> BoundNames {
    let mut names = BoundNames::new();
    collect_bound_names(pattern, &mut names);
    names
}

/// Append the names bound by `pattern` to `out`
pub fn collect_bound_names(pattern: &BindingPattern<'_>, out: &mut BoundNames) {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(id) => {
            out.push(CompactString::new(id.name.as_str()));
        }
        BindingPatternKind::ObjectPattern(obj) => {
            for prop in obj.properties.iter() {
                collect_bound_names(&prop.value, out);
            }
            if let Some(rest) = &obj.rest {
                collect_bound_names(&rest.argument, out);
            }
        }
        BindingPatternKind::ArrayPattern(arr) => {
            for element in arr.elements.iter().flatten() {
                collect_bound_names(element, out);
            }
            if let Some(rest) = &arr.rest {
                collect_bound_names(&rest.argument, out);
            }
        }
        BindingPatternKind::AssignmentPattern(assign) => {
            collect_bound_names(&assign.left, out);
        }
    }
}

/// Every name bound by a `var`/`let`/`const` list
pub fn bound_names_in_declaration(decl: &VariableDeclaration<'_>) -> BoundNames {
    let mut names = BoundNames::new();
    for declarator in decl.declarations.iter() {
        collect_bound_names(&declarator.id, &mut names);
    }
    names
}

/// Every name bound by a parameter list, rest parameter included
pub fn bound_names_in_parameters(params: &FormalParameters<'_>) -> BoundNames {
    let mut names = BoundNames::new();
    for param in params.items.iter() {
        collect_bound_names(&param.pattern, &mut names);
    }
    if let Some(rest) = &params.rest {
        collect_bound_names(&rest.argument, &mut names);
    }
    names
}

/// Names of generic type parameters (`<T, U>`)
pub fn type_parameter_names(params: Option<&TSTypeParameterDeclaration<'_>>) -> BoundNames {
    params
        .map(|decl| {
            decl.params
                .iter()
                .map(|param| CompactString::new(param.name.name.as_str()))
                .collect()
        })
        .unwrap_or_default()
}
