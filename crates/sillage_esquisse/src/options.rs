//! Resolver options.

use serde::{Deserialize, Serialize};

pub use sillage_trame::ShadowCheck;

/// Handling of imports without any binding (`import "./polyfill"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SideEffectImports {
    /// Abort resolution with an error
    #[default]
    Reject,
    /// Contribute nothing to the symbol map
    Ignore,
}

/// Options controlling how a module's symbols are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverOptions {
    /// How far up the scope chain shadowing declarations are looked for
    pub shadow_check: ShadowCheck,
    /// Whether side-effect-only imports are accepted
    pub side_effect_imports: SideEffectImports,
}
