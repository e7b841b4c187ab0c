use std::path::{Path, PathBuf};

use anyhow::Context;
use easyclip_media::extract::ExtractSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "EASYCLIP_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "easyclip.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub extract: ExtractSettings,
    /// Folder for extracted clips; next to the source video when unset.
    pub output_dir: Option<PathBuf>,
    pub close_after_export: bool,
    pub close_countdown_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extract: ExtractSettings::default(),
            output_dir: None,
            close_after_export: false,
            close_countdown_secs: 5.0,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `EASYCLIP_CONFIG`, or `easyclip.json` in the
    /// working directory. Never fails: problems are logged and defaults used.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let mut config: Self = serde_json::from_str(text)?;
        if !config.close_countdown_secs.is_finite() || config.close_countdown_secs < 0.0 {
            config.close_countdown_secs = Self::default().close_countdown_secs;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn nested_extract_settings_merge_with_defaults() {
        let config = AppConfig::from_json(
            r#"{
                "close_after_export": true,
                "output_dir": "/tmp/clips",
                "extract": { "preset": "slow" }
            }"#,
        )
        .unwrap();
        assert!(config.close_after_export);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/clips")));
        assert_eq!(config.extract.preset, "slow");
        assert_eq!(config.extract.video_bitrate, "5000k");
        assert_eq!(config.close_countdown_secs, 5.0);
    }

    #[test]
    fn negative_countdown_is_replaced() {
        let config = AppConfig::from_json(r#"{ "close_countdown_secs": -2 }"#).unwrap();
        assert_eq!(config.close_countdown_secs, 5.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error_with_path() {
        let err = AppConfig::from_file(Path::new("/nonexistent/easyclip.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/easyclip.json"));
    }
}
