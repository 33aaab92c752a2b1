//! Error types for symbol resolution.

use oxc_span::Span;
use sillage_carton::CompactString;

/// A construct the resolver refuses to interpret.
///
/// Every variant carries the source text of the offending construct and its span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// `import "m"` while side-effect imports are rejected.
    #[error("import declaration binds no names: `{snippet}`")]
    ImportWithoutBindings { snippet: String, span: Span },

    /// Exported function or class with neither a name nor a `default` modifier.
    #[error("exported declaration has neither a name nor a `default` modifier: `{snippet}`")]
    AnonymousExport { snippet: String, span: Span },

    /// The same name is bound twice by one declaration statement.
    #[error("`{name}` is bound more than once in `{snippet}`")]
    DuplicateSymbol {
        name: CompactString,
        snippet: String,
        span: Span,
    },

    /// A declarator whose target is not an identifier or a destructuring pattern.
    #[error("unsupported binding target: `{snippet}`")]
    UnsupportedBindingTarget { snippet: String, span: Span },
}

impl ResolveError {
    /// Location of the offending construct.
    pub fn span(&self) -> Span {
        match self {
            Self::ImportWithoutBindings { span, .. }
            | Self::AnonymousExport { span, .. }
            | Self::DuplicateSymbol { span, .. }
            | Self::UnsupportedBindingTarget { span, .. } => *span,
        }
    }

    /// Source text of the offending construct.
    pub fn snippet(&self) -> &str {
        match self {
            Self::ImportWithoutBindings { snippet, .. }
            | Self::AnonymousExport { snippet, .. }
            | Self::DuplicateSymbol { snippet, .. }
            | Self::UnsupportedBindingTarget { snippet, .. } => snippet,
        }
    }
}

/// Result type for symbol resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
