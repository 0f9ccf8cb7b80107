//! Persisted build configuration
//!
//! The configuration is a small JSON object stored in `build_config.json`
//! at the project root. Two keys are recognized; unknown keys are carried
//! across a load/save round-trip so hand-added entries survive a rewrite.

pub mod resolve;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// File name of the persisted configuration, relative to the project root
pub const CONFIG_FILE: &str = "build_config.json";

/// Build variant selected at configure time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BuildType {
    Debug,
    Release,
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

/// Contents of build_config.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Root installation directory of the OpenCV build
    #[serde(rename = "OPENCV_PREFIX_PATH", skip_serializing_if = "Option::is_none")]
    pub prefix_path: Option<String>,

    /// Selected build variant
    #[serde(rename = "BUILD_TYPE", skip_serializing_if = "Option::is_none")]
    pub build_type: Option<BuildType>,

    /// Unrecognized keys, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Load/save/reset access to the configuration document
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by `build_config.json` under the project root
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(CONFIG_FILE),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document.
    ///
    /// An absent or unparsable file yields an empty document, never an
    /// error.
    pub fn load(&self) -> BuildConfig {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BuildConfig::default();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Serialize the full document, overwriting any prior content
    pub fn save(&self, config: &BuildConfig) -> Result<()> {
        let contents = serde_json::to_string_pretty(config)
            .context("Failed to serialize build configuration")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Delete the backing file.
    ///
    /// Returns whether a file was removed; a nonexistent file is a no-op
    /// success.
    pub fn reset(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_loads_as_empty_document() {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp.path());
        assert_eq!(store.load(), BuildConfig::default());
    }

    #[test]
    fn malformed_file_loads_as_empty_document() {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), BuildConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp.path());

        let config = BuildConfig {
            prefix_path: Some("/opt/opencv".to_string()),
            build_type: Some(BuildType::Release),
            extra: serde_json::Map::new(),
        };
        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn unknown_keys_survive_a_rewrite() {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp.path());
        fs::write(
            store.path(),
            r#"{"OPENCV_PREFIX_PATH": "/opt/opencv", "CUSTOM_FLAG": 42}"#,
        )
        .unwrap();

        let mut config = store.load();
        assert_eq!(config.prefix_path.as_deref(), Some("/opt/opencv"));
        assert_eq!(config.extra.get("CUSTOM_FLAG"), Some(&serde_json::json!(42)));

        config.build_type = Some(BuildType::Debug);
        store.save(&config).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.extra.get("CUSTOM_FLAG"), Some(&serde_json::json!(42)));
        assert_eq!(reloaded.build_type, Some(BuildType::Debug));
    }

    #[test]
    fn variant_serializes_with_exact_names() {
        assert_eq!(
            serde_json::to_string(&BuildType::Release).unwrap(),
            "\"Release\""
        );
        assert_eq!(serde_json::to_string(&BuildType::Debug).unwrap(), "\"Debug\"");
    }

    #[test]
    fn reset_on_missing_file_is_a_noop_success() {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp.path());
        assert!(!store.reset().unwrap());
    }

    #[test]
    fn reset_removes_an_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp.path());
        store.save(&BuildConfig::default()).unwrap();

        assert!(store.reset().unwrap());
        assert!(!store.path().exists());
    }
}
