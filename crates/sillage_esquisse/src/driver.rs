//! Whole-program entry points.

use oxc_ast::ast::{Program, Statement};
use oxc_span::GetSpan;

use crate::bindings::{
    bindings_from_class, bindings_from_export_assignment, bindings_from_export_clause,
    bindings_from_export_namespace, bindings_from_function, bindings_from_import,
    bindings_from_variable, ExtractContext,
};
use crate::closure::{resolve_export_map, ExportMap};
use crate::declaration::TopLevelDeclaration;
use crate::error::ResolveResult;
use crate::options::ResolverOptions;
use crate::symbol_map::SymbolMap;

/// Partial symbol map of a single top-level statement.
pub fn bindings_from_statement(
    statement: &Statement<'_>,
    ctx: &ExtractContext<'_>,
) -> ResolveResult<SymbolMap> {
    let declaration = TopLevelDeclaration::classify(statement);
    match declaration {
        TopLevelDeclaration::Import(decl) => bindings_from_import(decl, ctx),
        TopLevelDeclaration::ExportClause(decl) => Ok(bindings_from_export_clause(decl)),
        TopLevelDeclaration::ExportNamespace { exported, source } => {
            Ok(bindings_from_export_namespace(exported, source))
        }
        TopLevelDeclaration::ExportAssignment { expression } => {
            Ok(bindings_from_export_assignment(expression, ctx))
        }
        TopLevelDeclaration::Function { function, export } => {
            bindings_from_function(function, export, ctx)
        }
        TopLevelDeclaration::Class { class, export } => bindings_from_class(class, export, ctx),
        TopLevelDeclaration::Variable {
            declaration,
            exported,
        } => bindings_from_variable(declaration, exported, ctx),
        TopLevelDeclaration::Other => {
            let span = statement.span();
            tracing::trace!(
                "ignoring top-level statement at {}..{}",
                span.start,
                span.end
            );
            Ok(SymbolMap::new())
        }
    }
}

/// Build the symbol map of `program` by folding the bindings of its top-level statements.
pub fn get_symbol_map(program: &Program<'_>, options: &ResolverOptions) -> ResolveResult<SymbolMap> {
    let ctx = ExtractContext::new(program.source_text, options);

    let symbols = program
        .body
        .iter()
        .try_fold(SymbolMap::new(), |symbols, statement| -> ResolveResult<SymbolMap> {
            Ok(symbols.merge(bindings_from_statement(statement, &ctx)?))
        })?;

    tracing::debug!(
        "symbol map: {} statements, {} module symbols, {} exports",
        program.body.len(),
        symbols.module_symbols_to_other_module_symbols.len(),
        symbols.module_exports_to_module_symbols.len()
    );

    Ok(symbols)
}

/// Map every export of `program` to the module specifiers it transitively reaches.
pub fn get_export_map(program: &Program<'_>, options: &ResolverOptions) -> ResolveResult<ExportMap> {
    let symbols = get_symbol_map(program, options)?;
    let exports = resolve_export_map(&symbols);
    tracing::debug!("export map: {} exports", exports.len());
    Ok(exports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::options::ShadowCheck;
    use insta::assert_snapshot;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn export_map_with(source: &str, options: &ResolverOptions) -> ResolveResult<ExportMap> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
        get_export_map(&ret.program, options)
    }

    fn export_map(source: &str) -> String {
        export_map_with(source, &ResolverOptions::default())
            .unwrap()
            .to_string()
    }

    // ============================================================
    // Direct exports
    // ============================================================

    #[test]
    fn test_direct_reexport() {
        assert_snapshot!(export_map(r#"export { importedFoo } from "./import-foo";"#), @"importedFoo: ./import-foo");
    }

    #[test]
    fn test_renamed_direct_reexport() {
        assert_snapshot!(
            export_map(r#"export { importedFoo as exportedBar } from "./import-foo";"#),
            @"exportedBar: ./import-foo"
        );
    }

    #[test]
    fn test_reexport_named_import_as_default() {
        assert_snapshot!(
            export_map(
                r#"
                import { foo } from "./import-foo";

                export default foo;
                "#
            ),
            @"default: ./import-foo"
        );
    }

    #[test]
    fn test_local_export_clause_of_import() {
        assert_snapshot!(
            export_map(
                r#"
                import { foo } from "./import-foo";
                export { foo, foo as alias };
                "#
            ),
            @r"
        alias: ./import-foo
        foo: ./import-foo
        "
        );
    }

    // ============================================================
    // Symbol dependencies
    // ============================================================

    #[test]
    fn test_exported_constants_of_named_imports() {
        assert_snapshot!(
            export_map(
                r#"
                import { foo1, foo2 } from "./import-foo";

                export const exportedFoo1 = foo1;
                export const exportedFoo2 = foo2;
                "#
            ),
            @r"
        exportedFoo1: ./import-foo
        exportedFoo2: ./import-foo
        "
        );
    }

    #[test]
    fn test_export_depends_on_multiple_imports() {
        assert_snapshot!(
            export_map(
                r#"
                import foo from "./import-foo";
                import bar from "./import-bar";

                export const singleExport = foo + bar;
                "#
            ),
            @"singleExport: ./import-bar, ./import-foo"
        );
    }

    #[test]
    fn test_exported_function_declarations() {
        assert_snapshot!(
            export_map(
                r#"
                import bar from './bar';

                export function someFunction() {
                  bar()
                }
                "#
            ),
            @"someFunction: ./bar"
        );
        assert_snapshot!(
            export_map(
                r#"
                import bar from './bar';

                export default function someFunction() {
                  bar()
                }
                "#
            ),
            @"default: ./bar"
        );
    }

    #[test]
    fn test_exported_class_declarations() {
        assert_snapshot!(
            export_map(
                r#"
                import { Component } from 'framework';
                import format from './format';

                export class Widget extends Component {
                  render() { return format(this.value); }
                }
                "#
            ),
            @"Widget: ./format, framework"
        );
    }

    #[test]
    fn test_shadowed_import_is_not_reached() {
        assert_snapshot!(
            export_map(
                r#"
                import bar from './bar';
                export default () => { const bar = 1; bar(); };
                "#
            ),
            @"default: (none)"
        );
    }

    #[test]
    fn test_array_destructuring_narrows_by_position() {
        let source = r#"
            import bar from './bar';
            import baz from './baz';
            const [a, b, c] = [bar, baz, 1];
            export default () => a;
        "#;
        assert_snapshot!(export_map(source), @"default: ./bar");

        let spread = r#"
            import bar from './bar';
            import baz from './baz';
            const [a, b, c] = [bar, ...baz];
            export const first = a;
            export const last = c;
        "#;
        assert_snapshot!(export_map(spread), @r"
        first: ./bar, ./baz
        last: ./bar, ./baz
        ");
    }

    #[test]
    fn test_array_destructuring_keeps_requires_of_whole_literal() {
        assert_snapshot!(
            export_map("const [a, b] = [require('./x'), 1]; export default () => b;"),
            @"default: ./x"
        );
    }

    #[test]
    fn test_arrow_function_body_is_its_own_scope() {
        let source = r#"
            import x from './x';
            export function f(x) { return () => x; }
            export const g = (x) => x;
        "#;
        assert_snapshot!(export_map(source), @r"
        f: ./x
        g: (none)
        ");
    }

    #[test]
    fn test_exports_without_imports() {
        assert_snapshot!(
            export_map("export const answer = 42; export function noop() {}"),
            @r"
        answer: (none)
        noop: (none)
        "
        );
    }

    // ============================================================
    // require() tracking
    // ============================================================

    #[test]
    fn test_const_export_requires_directly() {
        assert_snapshot!(export_map("export const foo = require('./bar')"), @"foo: ./bar");
    }

    #[test]
    fn test_default_export_requires_directly() {
        assert_snapshot!(export_map("export default foo = require('./bar')"), @"default: ./bar");
    }

    #[test]
    fn test_require_through_arrow_function() {
        assert_snapshot!(
            export_map(
                r#"
                const internalFunction = () => {
                  return require('./bar')
                }
                export default foo = internalFunction()
                "#
            ),
            @"default: ./bar"
        );
    }

    #[test]
    fn test_require_through_function_expression() {
        assert_snapshot!(
            export_map(
                r#"
                const internalFunction = function() {
                  return require('./bar')
                }
                export default foo = internalFunction()
                "#
            ),
            @"default: ./bar"
        );
    }

    #[test]
    fn test_require_through_function_declaration() {
        assert_snapshot!(
            export_map(
                r#"
                function internalFunction() {
                  return require('./bar')
                }
                export default foo = internalFunction()
                "#
            ),
            @"default: ./bar"
        );
    }

    #[test]
    fn test_require_through_hoisted_function_declaration() {
        assert_snapshot!(
            export_map(
                r#"
                export default foo = internalFunction()

                function internalFunction() {
                  return require('./bar')
                }
                "#
            ),
            @"default: ./bar"
        );
    }

    #[test]
    fn test_require_through_module_constants() {
        assert_snapshot!(
            export_map(
                r#"
                import { observer } from 'mobx-react';
                import { patchStylesForTheme } from 'styles-patcher';
                const styles = require('./styles.scss')

                const patchedStyles = patchStylesForTheme(styles)

                function MyComponentInner(props: any) {
                  return <div styles={patchedStyles.Container}>Thing</div>
                }

                export const MyComponent = observer(MyComponentInner)
                "#
            ),
            @"MyComponent: ./styles.scss, mobx-react, styles-patcher"
        );
    }

    // ============================================================
    // Options and invariants
    // ============================================================

    #[test]
    fn test_shadow_check_chain() {
        let source = r#"
            import x from './x';
            export function f(x) { { return x; } }
        "#;
        assert_snapshot!(
            export_map_with(source, &ResolverOptions::default()).unwrap().to_string(),
            @"f: ./x"
        );

        let chain = ResolverOptions {
            shadow_check: ShadowCheck::Chain,
            ..Default::default()
        };
        assert_snapshot!(
            export_map_with(source, &chain).unwrap().to_string(),
            @"f: (none)"
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let source = r#"
            import a from 'a';
            import * as b from 'b';
            export const x = a, y = b.y;
            export { x as z };
        "#;
        let first = export_map_with(source, &ResolverOptions::default()).unwrap();
        let second = export_map_with(source, &ResolverOptions::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_errors_abort_resolution() {
        let error = export_map_with(
            "import a from 'a'; const [x, x] = [a, a]; export default x;",
            &ResolverOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(error, ResolveError::DuplicateSymbol { .. }));
    }
}
