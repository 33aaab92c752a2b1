//! Free identifier analysis.
//!
//! A free identifier is a reference that is not resolved by a declaration
//! visible at the point of use. Which declarations count as visible is
//! controlled by [`ShadowCheck`].

use oxc_ast::ast::IdentifierReference;
use serde::{Deserialize, Serialize};
use sillage_carton::{CompactString, NameSet};

use crate::scope::ScopeStack;
use crate::walker::{ScopeVisitor, ScopeWalker, WalkRoot};

/// How far up the scope chain a reference looks for a shadowing declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowCheck {
    /// Only the innermost scope at the reference.
    ///
    /// A name declared in an enclosing function but referenced from a nested
    /// block is still reported as free.
    #[default]
    Immediate,
    /// The innermost scope and all of its ancestors.
    Chain,
}

impl ShadowCheck {
    /// Whether `name` is declared where `scopes` currently stands.
    #[inline]
    pub fn is_shadowed(self, name: &str, scopes: &ScopeStack) -> bool {
        match self {
            Self::Immediate => scopes.has_identifier(name),
            Self::Chain => scopes.has_identifier_in_chain(name),
        }
    }
}

/// Collects the names of unshadowed references.
#[derive(Debug, Default)]
pub struct FreeIdentifierCollector {
    shadow_check: ShadowCheck,
    names: NameSet,
}

impl FreeIdentifierCollector {
    pub fn new(shadow_check: ShadowCheck) -> Self {
        Self {
            shadow_check,
            names: NameSet::default(),
        }
    }

    pub fn into_names(self) -> NameSet {
        self.names
    }
}

impl<'a> ScopeVisitor<'a> for FreeIdentifierCollector {
    fn visit_reference(&mut self, ident: &IdentifierReference<'a>, scopes: &ScopeStack) {
        let name = ident.name.as_str();
        if !self.shadow_check.is_shadowed(name, scopes) {
            self.names.insert(CompactString::new(name));
        }
    }
}

/// Names referenced inside `node` that are not declared in the scope of the reference.
///
/// A bare identifier is its own single free name.
pub fn free_identifiers<'a, N: WalkRoot<'a>>(node: &N, shadow_check: ShadowCheck) -> NameSet {
    if let Some(ident) = node.as_identifier() {
        return std::iter::once(CompactString::new(ident.name.as_str())).collect();
    }

    let mut walker = ScopeWalker::new(FreeIdentifierCollector::new(shadow_check));
    walker.walk(node);
    walker.into_visitor().into_names()
}
