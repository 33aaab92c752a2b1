//! Configuration file loading for sillage.
//!
//! Reads `sillage.config.json` from a project directory.

use serde::{Deserialize, Serialize};
use sillage_esquisse::ResolverOptions;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "sillage.config.json";

/// Top-level sillage configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SillageConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Resolver configuration.
    #[serde(default)]
    pub resolver: ResolverOptions,
}

fn base_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Load `sillage.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults. An unreadable or malformed file is
/// reported as a warning and also yields the defaults.
pub fn load_config(dir: Option<&Path>) -> SillageConfig {
    let config_path = base_dir(dir).join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return SillageConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                SillageConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            SillageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sillage_esquisse::{ShadowCheck, SideEffectImports};

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(Some(dir.path())), SillageConfig::default());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{
              "$schema": "./sillage.schema.json",
              "resolver": { "shadowCheck": "chain" }
            }"#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()));
        assert_eq!(
            config.schema.as_deref(),
            Some("./sillage.schema.json")
        );
        assert_eq!(config.resolver.shadow_check, ShadowCheck::Chain);
        assert_eq!(
            config.resolver.side_effect_imports,
            SideEffectImports::Reject
        );
    }

    #[test]
    fn test_malformed_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "resolver": { "shadowCheck": "everywhere" } }"#,
        )
        .unwrap();
        assert_eq!(load_config(Some(dir.path())), SillageConfig::default());
    }
}
