//! CommonJS `require` scanning.

use oxc_ast::ast::{Argument, CallExpression, Expression};
use oxc_ast_visit::{walk, Visit};
use sillage_carton::{CompactString, NameSet};

use crate::walker::WalkRoot;

/// Collects module specifiers passed to `require("...")`.
///
/// Only calls of the bare identifier `require` with exactly one argument are
/// considered, and only a string literal argument is recorded. Such a call is
/// never descended into, whatever its argument.
#[derive(Debug, Default)]
pub struct RequireCollector {
    modules: NameSet,
}

impl RequireCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_modules(self) -> NameSet {
        self.modules
    }
}

fn is_require_call(call: &CallExpression<'_>) -> bool {
    matches!(&call.callee, Expression::Identifier(callee) if callee.name.as_str() == "require")
        && call.arguments.len() == 1
}

impl<'a> Visit<'a> for RequireCollector {
    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        if !is_require_call(it) {
            walk::walk_call_expression(self, it);
            return;
        }
        if let Argument::StringLiteral(literal) = &it.arguments[0] {
            self.modules
                .insert(CompactString::new(literal.value.as_str()));
        }
    }
}

/// Module specifiers required anywhere inside `node`
pub fn required_modules<'a, N: WalkRoot<'a>>(node: &N) -> NameSet {
    let mut collector = RequireCollector::new();
    node.accept(&mut collector);
    collector.into_modules()
}
