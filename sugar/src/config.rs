//! Configuration for the sugar runtime

use crate::error::{Result, SugarError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Limits applied to the Rhai engine that runs sugar scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScriptLimits {
    pub max_operations: u64,
    pub max_call_levels: usize,
    pub max_expr_depth: usize,
    pub max_string_size: usize,
    pub max_array_size: usize,
    pub max_map_size: usize,
}

impl Default for ScriptLimits {
    fn default() -> Self {
        Self {
            max_operations: 100_000,
            max_call_levels: 50,
            max_expr_depth: 100,
            max_string_size: 10_000,
            max_array_size: 10_000,
            max_map_size: 1_000,
        }
    }
}

/// Runtime configuration: where scripts live, how randomness is seeded and
/// how far scripts may run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SugarConfig {
    /// Root directory for all assets
    pub asset_root: PathBuf,
    /// Directory name for scripts (relative to asset_root)
    pub scripts_dir: String,
    /// Fixed seed for the shared random source; `None` seeds from entropy
    pub rng_seed: Option<u64>,
    /// Script engine limits
    pub limits: ScriptLimits,
}

impl SugarConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SugarError::io(path, e))?;
        let config: SugarConfig = serde_json::from_str(&content)?;
        debug!(
            path = ?path,
            asset_root = ?config.asset_root,
            rng_seed = ?config.rng_seed,
            "Loaded sugar config"
        );
        Ok(config)
    }

    /// Get the full path to a script file
    pub fn script_path(&self, name: &str) -> Result<PathBuf> {
        // Names must stay inside the scripts directory
        if name.is_empty() || name.contains("..") || name.contains('/') || name.contains('\\') {
            return Err(SugarError::InvalidName(name.to_string()));
        }
        let path = self
            .asset_root
            .join(&self.scripts_dir)
            .join(format!("{name}.rhai"));
        debug!(name = name, path = ?path, "Generated script path");
        Ok(path)
    }

    /// Check that the scripts directory exists
    pub fn validate(&self) -> Result<()> {
        let scripts_path = self.asset_root.join(&self.scripts_dir);
        if !scripts_path.is_dir() {
            return Err(SugarError::io(
                &scripts_path,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "scripts directory not found",
                ),
            ));
        }
        Ok(())
    }
}

impl Default for SugarConfig {
    /// Default configuration that matches the playground layout
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            scripts_dir: "scripts".to_string(),
            rng_seed: None,
            limits: ScriptLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_path() {
        let config = SugarConfig {
            asset_root: PathBuf::from("playground/assets"),
            ..Default::default()
        };

        let path = config.script_path("loot_table").unwrap();
        assert_eq!(path, PathBuf::from("playground/assets/scripts/loot_table.rhai"));
    }

    #[test]
    fn test_script_path_rejects_traversal() {
        let config = SugarConfig::default();
        assert!(matches!(
            config.script_path("../evil"),
            Err(SugarError::InvalidName(_))
        ));
        assert!(config.script_path("some/path/evil").is_err());
        assert!(config.script_path("some\\path\\evil").is_err());
        assert!(config.script_path("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = SugarConfig::default();
        assert_eq!(config.asset_root, PathBuf::from("assets"));
        assert_eq!(config.scripts_dir, "scripts");
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.limits.max_operations, 100_000);
    }

    #[test]
    fn test_load_partial_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sugar.json");
        std::fs::write(
            &path,
            r#"{ "rng_seed": 42, "limits": { "max_operations": 500 } }"#,
        )
        .unwrap();

        let config = SugarConfig::load_from_file(&path).unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.limits.max_operations, 500);
        assert_eq!(config.limits.max_call_levels, 50);
        assert_eq!(config.scripts_dir, "scripts");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = SugarConfig::load_from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SugarError::Io { .. }));
        assert!(err.to_string().contains("exist.json"));
    }

    #[test]
    fn test_validate_requires_scripts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SugarConfig {
            asset_root: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        std::fs::create_dir_all(dir.path().join("scripts")).unwrap();
        assert!(config.validate().is_ok());
    }
}
