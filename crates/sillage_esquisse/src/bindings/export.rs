use oxc_ast::ast::{ExportNamedDeclaration, Expression, ModuleExportName, StringLiteral};
use sillage_carton::CompactString;

use super::{Dependencies, ExtractContext};
use crate::symbol_map::{relate, SymbolMap, DEFAULT_EXPORT};

fn export_name(name: &ModuleExportName<'_>) -> CompactString {
    CompactString::new(name.name().as_str())
}

/// `export { a, b as c }` and `export { a, b as c } from "m"`.
///
/// Re-exports depend directly on their source module. Local exports
/// depend on the module symbol they name.
pub fn bindings_from_export_clause(decl: &ExportNamedDeclaration<'_>) -> SymbolMap {
    let mut symbols = SymbolMap::new();

    match &decl.source {
        Some(source) => {
            let source = CompactString::new(source.value.as_str());
            for specifier in decl.specifiers.iter() {
                relate(
                    &mut symbols.module_exports_to_direct_imports,
                    export_name(&specifier.exported),
                    [source.clone()],
                );
            }
        }
        None => {
            for specifier in decl.specifiers.iter() {
                relate(
                    &mut symbols.module_exports_to_module_symbols,
                    export_name(&specifier.exported),
                    [export_name(&specifier.local)],
                );
            }
        }
    }

    symbols
}

/// `export * as ns from "m"`
pub fn bindings_from_export_namespace(
    exported: &ModuleExportName<'_>,
    source: &StringLiteral<'_>,
) -> SymbolMap {
    let mut symbols = SymbolMap::new();
    relate(
        &mut symbols.module_exports_to_direct_imports,
        export_name(exported),
        [CompactString::new(source.value.as_str())],
    );
    symbols
}

/// `export default <expr>` and `export = <expr>`
pub fn bindings_from_export_assignment(
    expression: &Expression<'_>,
    ctx: &ExtractContext<'_>,
) -> SymbolMap {
    let mut symbols = SymbolMap::new();
    symbols.bind_export(
        CompactString::const_new(DEFAULT_EXPORT),
        Dependencies::of(expression, ctx),
    );
    symbols
}

#[cfg(test)]
mod tests {
    use crate::bindings::test_utils::render;
    use insta::assert_snapshot;

    #[test]
    fn test_reexports() {
        assert_snapshot!(render(r#"export { a, b as c, default as d } from "./m";"#), @r"
        [module symbols -> imports]
        [module symbols -> module symbols]
        [exports -> direct imports]
        a: ./m
        c: ./m
        d: ./m
        [exports -> module symbols]
        ");
    }

    #[test]
    fn test_local_export_clause() {
        assert_snapshot!(render("export { a, b as c, a as default };"), @r"
        [module symbols -> imports]
        [module symbols -> module symbols]
        [exports -> direct imports]
        [exports -> module symbols]
        a: a
        c: b
        default: a
        ");
    }

    #[test]
    fn test_namespace_reexport() {
        assert_snapshot!(render(r#"export * as ns from "./ns";"#), @r"
        [module symbols -> imports]
        [module symbols -> module symbols]
        [exports -> direct imports]
        ns: ./ns
        [exports -> module symbols]
        ");
    }

    #[test]
    fn test_star_reexport_contributes_nothing() {
        assert_snapshot!(render(r#"export * from "./all";"#), @r"
        [module symbols -> imports]
        [module symbols -> module symbols]
        [exports -> direct imports]
        [exports -> module symbols]
        ");
    }

    #[test]
    fn test_export_default_expression() {
        assert_snapshot!(render("export default wrap(require('./impl'), options.value);"), @r"
        [module symbols -> imports]
        [module symbols -> module symbols]
        [exports -> direct imports]
        default: ./impl
        [exports -> module symbols]
        default: options, require, wrap
        ");
    }

    #[test]
    fn test_ts_export_assignment() {
        assert_snapshot!(render("export = factory;"), @r"
        [module symbols -> imports]
        [module symbols -> module symbols]
        [exports -> direct imports]
        default: (none)
        [exports -> module symbols]
        default: factory
        ");
    }
}
