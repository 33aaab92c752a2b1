//! Classification of top-level statements.

use oxc_ast::ast::{
    Class, Declaration, ExportDefaultDeclarationKind, ExportNamedDeclaration, Expression,
    Function, ImportDeclaration, ModuleExportName, Statement, StringLiteral, VariableDeclaration,
};

/// How a function or class declaration is exported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportModifier {
    /// Not exported
    Local,
    /// `export function f() {}`
    Named,
    /// `export default function () {}`
    Default,
}

/// A top-level statement, narrowed to the shapes that bind module symbols or exports.
#[derive(Debug, Clone, Copy)]
pub enum TopLevelDeclaration<'s, 'a> {
    /// `import ... from "m"` and `import "m"`
    Import(&'s ImportDeclaration<'a>),
    /// `export { a, b as c }`, with or without `from "m"`
    ExportClause(&'s ExportNamedDeclaration<'a>),
    /// `export * as ns from "m"`
    ExportNamespace {
        exported: &'s ModuleExportName<'a>,
        source: &'s StringLiteral<'a>,
    },
    /// `export default <expr>` and `export = <expr>`
    ExportAssignment { expression: &'s Expression<'a> },
    Function {
        function: &'s Function<'a>,
        export: ExportModifier,
    },
    Class {
        class: &'s Class<'a>,
        export: ExportModifier,
    },
    Variable {
        declaration: &'s VariableDeclaration<'a>,
        exported: bool,
    },
    /// Anything that binds nothing at runtime or that is not tracked
    Other,
}

impl<'s, 'a> TopLevelDeclaration<'s, 'a> {
    pub fn classify(statement: &'s Statement<'a>) -> Self {
        match statement {
            Statement::ImportDeclaration(decl) => Self::Import(decl),
            Statement::ExportNamedDeclaration(decl) => match &decl.declaration {
                Some(declaration) => Self::from_declaration(declaration, ExportModifier::Named),
                None => Self::ExportClause(decl),
            },
            Statement::ExportDefaultDeclaration(decl) => match &decl.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(function) => Self::Function {
                    function,
                    export: ExportModifier::Default,
                },
                ExportDefaultDeclarationKind::ClassDeclaration(class) => Self::Class {
                    class,
                    export: ExportModifier::Default,
                },
                kind => kind
                    .as_expression()
                    .map_or(Self::Other, |expression| Self::ExportAssignment { expression }),
            },
            Statement::ExportAllDeclaration(decl) => match &decl.exported {
                Some(exported) => Self::ExportNamespace {
                    exported,
                    source: &decl.source,
                },
                // `export * from "m"` has no static export names
                None => Self::Other,
            },
            Statement::TSExportAssignment(assignment) => Self::ExportAssignment {
                expression: &assignment.expression,
            },
            Statement::FunctionDeclaration(function) => Self::Function {
                function,
                export: ExportModifier::Local,
            },
            Statement::ClassDeclaration(class) => Self::Class {
                class,
                export: ExportModifier::Local,
            },
            Statement::VariableDeclaration(declaration) => Self::Variable {
                declaration,
                exported: false,
            },
            _ => Self::Other,
        }
    }

    fn from_declaration(declaration: &'s Declaration<'a>, export: ExportModifier) -> Self {
        match declaration {
            Declaration::VariableDeclaration(declaration) => Self::Variable {
                declaration,
                exported: true,
            },
            Declaration::FunctionDeclaration(function) => Self::Function { function, export },
            Declaration::ClassDeclaration(class) => Self::Class { class, export },
            // Type aliases, interfaces, enums, namespaces
            _ => Self::Other,
        }
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Import(_) => "import",
            Self::ExportClause(_) => "export clause",
            Self::ExportNamespace { .. } => "namespace re-export",
            Self::ExportAssignment { .. } => "export assignment",
            Self::Function { .. } => "function",
            Self::Class { .. } => "class",
            Self::Variable { .. } => "variable",
            Self::Other => "other",
        }
    }
}
