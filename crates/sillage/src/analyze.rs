//! Per-file analysis: parse a module and resolve its export map.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::Serialize;
use sillage_esquisse::{get_symbol_map, resolve_export_map, ExportMap, ResolverOptions, SymbolMap};

use crate::error::{SillageError, SillageResult};

/// Everything resolved for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAnalysis {
    pub symbol_map: SymbolMap,
    pub export_map: ExportMap,
}

/// Source type inferred from the file extension, TSX when unknown.
pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::tsx())
}

/// Parse `source` as the module at `path` and resolve it.
///
/// Any parser diagnostic aborts the analysis; no partial result is returned.
pub fn analyze_source(
    path: &Path,
    source: &str,
    options: &ResolverOptions,
) -> SillageResult<ModuleAnalysis> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type_for(path)).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let mut messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        if messages.is_empty() {
            messages.push("parser aborted".to_string());
        }
        return Err(SillageError::Parse {
            path: path.to_path_buf(),
            messages,
        });
    }

    let symbol_map = get_symbol_map(&ret.program, options)?;
    let export_map = resolve_export_map(&symbol_map);
    tracing::debug!(
        "analyzed {}: {} statements, {} exports",
        path.display(),
        ret.program.body.len(),
        export_map.len()
    );

    Ok(ModuleAnalysis {
        symbol_map,
        export_map,
    })
}

/// Read the module at `path` and resolve it.
pub fn analyze_file(path: &Path, options: &ResolverOptions) -> SillageResult<ModuleAnalysis> {
    let source = std::fs::read_to_string(path).map_err(|source| SillageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    analyze_source(path, &source, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use sillage_esquisse::ResolveError;

    #[test]
    fn test_source_type_from_extension() {
        assert!(source_type_for(Path::new("a.ts")).is_typescript());
        assert!(!source_type_for(Path::new("a.ts")).is_jsx());
        assert!(source_type_for(Path::new("a.jsx")).is_jsx());
        assert!(source_type_for(Path::new("a.mjs")).is_javascript());

        let fallback = source_type_for(Path::new("index.lazy"));
        assert!(fallback.is_typescript());
        assert!(fallback.is_jsx());
    }

    #[test]
    fn test_analyze_source() {
        let analysis = analyze_source(
            Path::new("lazy.ts"),
            "import { api } from './api';\nexport const load = () => api.fetch();\n",
            &ResolverOptions::default(),
        )
        .unwrap();

        assert_snapshot!(analysis.export_map.to_string(), @"load: ./api");
        assert_snapshot!(analysis.symbol_map.to_string(), @r"
        [module symbols -> imports]
        api: ./api
        [module symbols -> module symbols]
        [exports -> direct imports]
        load: (none)
        [exports -> module symbols]
        load: api
        ");
    }

    #[test]
    fn test_parse_errors_abort() {
        let error = analyze_source(
            Path::new("broken.ts"),
            "export const = ;",
            &ResolverOptions::default(),
        )
        .unwrap_err();

        match error {
            SillageError::Parse { path, messages } => {
                assert_eq!(path, Path::new("broken.ts"));
                assert!(!messages.is_empty());
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_errors_are_wrapped() {
        let error = analyze_source(
            Path::new("side-effect.js"),
            "import './polyfill';",
            &ResolverOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            SillageError::Resolve(ResolveError::ImportWithoutBindings { .. })
        ));
    }

    #[test]
    fn test_analysis_serializes_sorted() {
        let analysis = analyze_source(
            Path::new("index.js"),
            "export { b, a } from './m';",
            &ResolverOptions::default(),
        )
        .unwrap();
        let json = serde_json::to_string(&analysis.export_map).unwrap();
        assert_eq!(json, r#"{"a":["./m"],"b":["./m"]}"#);
    }

    #[test]
    fn test_missing_file() {
        let error = analyze_file(
            Path::new("definitely/not/here.ts"),
            &ResolverOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(error, SillageError::Io { .. }));
        assert!(error.to_string().starts_with("failed to read definitely/not/here.ts"));
    }
}
