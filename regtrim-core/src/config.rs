//! Configuration loading from regtrim.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default target names, matching the generated bundles the site ships.
pub const DEFAULT_TARGETS: &[&str] = &["GimkitIndex", "Gimkit2dCode"];

/// Default directory holding the bundle pairs, relative to the project root.
pub const DEFAULT_LIB_DIR: &str = "src/lib";

/// Default whitelist data file, relative to the project root.
pub const DEFAULT_WHITELIST: &str = "scripts/removeUnused/used.json";

/// Default artifact extension.
pub const DEFAULT_EXTENSION: &str = "js";

/// Main configuration structure for regtrim.toml.
#[derive(Debug, Deserialize, Default)]
pub struct RegtrimConfig {
    /// Target names to trim.
    pub targets: Option<Vec<String>>,
    /// Directory holding `{name}Full.{ext}` / `{name}.{ext}` pairs.
    pub lib_dir: Option<String>,
    /// Path to the whitelist JSON file.
    pub whitelist: Option<String>,
    /// Artifact file extension.
    pub extension: Option<String>,
}

impl RegtrimConfig {
    /// Targets with the built-in default applied.
    pub fn targets(&self) -> Vec<String> {
        self.targets.clone().unwrap_or_else(|| {
            DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
        })
    }

    /// Lib dir with the built-in default applied.
    pub fn lib_dir(&self) -> &str {
        self.lib_dir.as_deref().unwrap_or(DEFAULT_LIB_DIR)
    }

    /// Whitelist path with the built-in default applied.
    pub fn whitelist(&self) -> &str {
        self.whitelist.as_deref().unwrap_or(DEFAULT_WHITELIST)
    }

    /// Extension with the built-in default applied.
    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }
}

/// Loads configuration from regtrim.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<RegtrimConfig>> {
    let path = root.join("regtrim.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid regtrim.toml")?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RegtrimConfig::default();
        assert_eq!(cfg.targets(), vec!["GimkitIndex", "Gimkit2dCode"]);
        assert_eq!(cfg.lib_dir(), "src/lib");
        assert_eq!(cfg.whitelist(), "scripts/removeUnused/used.json");
        assert_eq!(cfg.extension(), "js");
    }

    #[test]
    fn test_parse_overrides() {
        let cfg: RegtrimConfig = toml::from_str(
            r#"
            targets = ["MyBundle"]
            lib_dir = "generated"
            extension = "mjs"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.targets(), vec!["MyBundle"]);
        assert_eq!(cfg.lib_dir(), "generated");
        assert_eq!(cfg.whitelist(), "scripts/removeUnused/used.json");
        assert_eq!(cfg.extension(), "mjs");
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = std::env::temp_dir().join("regtrim_config_test_missing");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(load_config(&dir).unwrap().is_none());
    }
}
