//! Scope-aware AST walking.
//!
//! [`ScopeWalker`] drives an [`oxc_ast_visit::Visit`] traversal while keeping a
//! [`ScopeStack`] in sync with the syntax being visited, and reports every
//! identifier reference to a [`ScopeVisitor`] together with the scope stack
//! as it stands at that reference.
//!
//! Scopes are opened by:
//! - function declarations/expressions with a body and arrow functions
//!   (parameters and type parameters are bound in the new scope)
//! - bare blocks
//! - `for`, `for-in` and `for-of` statements (header declarations are bound
//!   in the new scope, which also holds the loop body's statements)
//! - `catch` clauses (the caught binding lives in the scope of the catch body)
//!
//! Variable declaration lists declare their names into whichever scope is
//! current. Member access only walks the object, never the property name.

use oxc_ast::ast::{
    ArrayExpressionElement, ArrowFunctionExpression, BindingPattern, BindingPatternKind,
    BlockStatement, CatchClause, Class, Expression, ForInStatement, ForOfStatement, ForStatement,
    ForStatementInit, ForStatementLeft, FormalParameters, Function, FunctionBody,
    IdentifierReference, PrivateFieldExpression, Statement, StaticMemberExpression,
    TSTypeParameterDeclaration, VariableDeclaration,
};
use oxc_ast_visit::{walk, Visit};
use oxc_syntax::scope::ScopeFlags;
use sillage_carton::CompactString;

use crate::binding::{
    bound_names, bound_names_in_declaration, bound_names_in_parameters, type_parameter_names,
    BoundNames,
};
use crate::scope::ScopeStack;

/// Receives identifier references found by a [`ScopeWalker`].
pub trait ScopeVisitor<'a> {
    /// Called once per identifier reference, with the scopes active at that point.
    fn visit_reference(&mut self, ident: &IdentifierReference<'a>, scopes: &ScopeStack);
}

/// A syntax subtree a walk can start from.
pub trait WalkRoot<'a> {
    /// Dispatch `visitor` to the matching `visit_*` method for this node.
    fn accept<V: Visit<'a>>(&self, visitor: &mut V);

    /// The node itself when it is a bare identifier reference.
    fn as_identifier(&self) -> Option<&IdentifierReference<'a>> {
        None
    }
}

impl<'a> WalkRoot<'a> for Expression<'a> {
    fn accept<V: Visit<'a>>(&self, visitor: &mut V) {
        visitor.visit_expression(self);
    }

    fn as_identifier(&self) -> Option<&IdentifierReference<'a>> {
        match self {
            Expression::Identifier(ident) => Some(&**ident),
            _ => None,
        }
    }
}

impl<'a> WalkRoot<'a> for ArrayExpressionElement<'a> {
    fn accept<V: Visit<'a>>(&self, visitor: &mut V) {
        visitor.visit_array_expression_element(self);
    }

    fn as_identifier(&self) -> Option<&IdentifierReference<'a>> {
        match self {
            ArrayExpressionElement::Identifier(ident) => Some(&**ident),
            _ => None,
        }
    }
}

impl<'a> WalkRoot<'a> for Statement<'a> {
    fn accept<V: Visit<'a>>(&self, visitor: &mut V) {
        visitor.visit_statement(self);
    }
}

impl<'a> WalkRoot<'a> for Function<'a> {
    fn accept<V: Visit<'a>>(&self, visitor: &mut V) {
        visitor.visit_function(self, ScopeFlags::Function);
    }
}

impl<'a> WalkRoot<'a> for Class<'a> {
    fn accept<V: Visit<'a>>(&self, visitor: &mut V) {
        visitor.visit_class(self);
    }
}

impl<'a> WalkRoot<'a> for BindingPattern<'a> {
    fn accept<V: Visit<'a>>(&self, visitor: &mut V) {
        visitor.visit_binding_pattern(self);
    }
}

/// Walks a subtree while maintaining the live scope stack.
#[derive(Debug)]
pub struct ScopeWalker<V> {
    scopes: ScopeStack,
    visitor: V,
}

impl<V> ScopeWalker<V> {
    /// Create a walker starting from a fresh root scope
    pub fn new(visitor: V) -> Self {
        Self {
            scopes: ScopeStack::new(),
            visitor,
        }
    }

    /// The scope stack in its current state
    #[inline]
    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// The wrapped visitor
    #[inline]
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// Consume the walker, returning the visitor
    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// Consume the walker, returning the scope tree it built and the visitor
    pub fn into_parts(self) -> (ScopeStack, V) {
        (self.scopes, self.visitor)
    }

    fn with_scope<I, F>(&mut self, names: I, f: F)
    where
        I: IntoIterator<Item = CompactString>,
        F: FnOnce(&mut Self),
    {
        self.scopes.push();
        for name in names {
            self.scopes.declare_identifier(name);
        }
        f(self);
        self.scopes.pop();
    }
}

impl<'a, V: ScopeVisitor<'a>> ScopeWalker<V> {
    /// Walk `node` and everything beneath it
    pub fn walk<N: WalkRoot<'a>>(&mut self, node: &N) {
        node.accept(self);
    }

    fn visit_function_scope(
        &mut self,
        type_parameters: Option<&TSTypeParameterDeclaration<'a>>,
        params: &FormalParameters<'a>,
        body: &FunctionBody<'a>,
    ) {
        let names = type_parameter_names(type_parameters)
            .into_iter()
            .chain(bound_names_in_parameters(params));

        self.with_scope(names, |walker| {
            // Default values are evaluated inside the function scope
            for param in params.items.iter() {
                walker.visit_binding_pattern(&param.pattern);
            }
            if let Some(rest) = &params.rest {
                walker.visit_binding_pattern(&rest.argument);
            }
            walker.visit_statements(&body.statements);
        });
    }

    /// The statements of a block body belong to the loop scope itself.
    fn visit_loop_body(&mut self, body: &Statement<'a>) {
        match body {
            Statement::BlockStatement(block) => self.visit_statements(&block.body),
            other => self.visit_statement(other),
        }
    }
}

fn loop_head_names(left: &ForStatementLeft<'_>) -> BoundNames {
    match left {
        ForStatementLeft::VariableDeclaration(decl) => bound_names_in_declaration(decl),
        _ => BoundNames::new(),
    }
}

impl<'a, V: ScopeVisitor<'a>> Visit<'a> for ScopeWalker<V> {
    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        self.visitor.visit_reference(it, &self.scopes);
    }

    fn visit_function(&mut self, it: &Function<'a>, flags: ScopeFlags) {
        match &it.body {
            Some(body) => {
                self.visit_function_scope(it.type_parameters.as_deref(), &it.params, body)
            }
            // Overload signatures and `declare function`
            None => walk::walk_function(self, it, flags),
        }
    }

    fn visit_arrow_function_expression(&mut self, it: &ArrowFunctionExpression<'a>) {
        self.visit_function_scope(it.type_parameters.as_deref(), &it.params, &it.body);
    }

    fn visit_block_statement(&mut self, it: &BlockStatement<'a>) {
        self.with_scope(BoundNames::new(), |walker| walker.visit_statements(&it.body));
    }

    fn visit_for_statement(&mut self, it: &ForStatement<'a>) {
        let names = match &it.init {
            Some(ForStatementInit::VariableDeclaration(decl)) => bound_names_in_declaration(decl),
            _ => BoundNames::new(),
        };

        self.with_scope(names, |walker| {
            if let Some(init) = &it.init {
                walker.visit_for_statement_init(init);
            }
            if let Some(test) = &it.test {
                walker.visit_expression(test);
            }
            if let Some(update) = &it.update {
                walker.visit_expression(update);
            }
            walker.visit_loop_body(&it.body);
        });
    }

    fn visit_for_in_statement(&mut self, it: &ForInStatement<'a>) {
        self.with_scope(loop_head_names(&it.left), |walker| {
            walker.visit_for_statement_left(&it.left);
            walker.visit_expression(&it.right);
            walker.visit_loop_body(&it.body);
        });
    }

    fn visit_for_of_statement(&mut self, it: &ForOfStatement<'a>) {
        self.with_scope(loop_head_names(&it.left), |walker| {
            walker.visit_for_statement_left(&it.left);
            walker.visit_expression(&it.right);
            walker.visit_loop_body(&it.body);
        });
    }

    fn visit_catch_clause(&mut self, it: &CatchClause<'a>) {
        let names = it
            .param
            .as_ref()
            .map(|param| bound_names(&param.pattern))
            .unwrap_or_default();

        self.with_scope(names, |walker| {
            if let Some(param) = &it.param {
                walker.visit_binding_pattern(&param.pattern);
            }
            walker.visit_statements(&it.body.body);
        });
    }

    fn visit_variable_declaration(&mut self, it: &VariableDeclaration<'a>) {
        for name in bound_names_in_declaration(it) {
            self.scopes.declare_identifier(name);
        }
        for declarator in it.declarations.iter() {
            self.visit_binding_pattern(&declarator.id);
            if let Some(init) = &declarator.init {
                self.visit_expression(init);
            }
        }
    }

    fn visit_binding_pattern(&mut self, it: &BindingPattern<'a>) {
        // Only default values and computed keys; type annotations are skipped.
        match &it.kind {
            BindingPatternKind::BindingIdentifier(_) => {}
            BindingPatternKind::ObjectPattern(obj) => self.visit_object_pattern(obj),
            BindingPatternKind::ArrayPattern(arr) => self.visit_array_pattern(arr),
            BindingPatternKind::AssignmentPattern(assign) => self.visit_assignment_pattern(assign),
        }
    }

    fn visit_static_member_expression(&mut self, it: &StaticMemberExpression<'a>) {
        self.visit_expression(&it.object);
    }

    fn visit_private_field_expression(&mut self, it: &PrivateFieldExpression<'a>) {
        self.visit_expression(&it.object);
    }
}
