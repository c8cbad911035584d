//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, every entry optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LexConfig {
    /// Directory receiving submitted forms
    pub output_dir: Option<PathBuf>,
    /// Command line of the external extractor
    pub extractor_command: Option<String>,
    /// Seconds before a running extraction is abandoned
    pub extractor_timeout_secs: Option<u64>,
    /// `manual` or `ocr`
    pub default_input_method: Option<String>,
    /// Form opened at startup (`legal-text`, `procedure`, `procedure-wizard`)
    pub default_form: Option<String>,
}

impl LexConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dz", "lexdz", "lexdz-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Output directory, falling back to the user data directory
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().join("submissions"))
                .unwrap_or_else(|| PathBuf::from("submissions"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = LexConfig::default();
        assert!(config.output_dir.is_none());
        assert!(config.extractor_command.is_none());
        assert!(config.default_input_method.is_none());
        assert!(config.default_form.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: LexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, LexConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"extractor_command": "lexdz-extract", "theme": "dark"}"#;
        let parsed: LexConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.extractor_command.as_deref(), Some("lexdz-extract"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = LexConfig {
            output_dir: Some(PathBuf::from("/srv/lexdz")),
            default_form: Some("procedure-wizard".into()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(LexConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = LexConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, LexConfig::default());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ pas du json").unwrap();
        assert!(LexConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let config = LexConfig {
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert_eq!(config.resolved_output_dir(), PathBuf::from("out"));
    }
}
