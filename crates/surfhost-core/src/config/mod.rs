//! View configuration.
//!
//! Loaded from JSON; every field has a default so partial files are valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::assets::BootstrapPolicy;
use crate::input::ScaleDetectorConfig;
use crate::logging::LoggingConfig;

/// Configuration of a [`RenderView`](crate::view::RenderView).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Application subdirectory under `storage_root`, e.g. `"/gltfviewer/"`.
    /// Leading and trailing slashes are ignored.
    pub app_path: String,

    /// Writable storage root.
    pub storage_root: PathBuf,

    /// Read-only bundled resource tree.
    pub bundled_dir: PathBuf,

    pub bootstrap: BootstrapPolicy,

    /// `env_logger` filter; falls back to `RUST_LOG`, then `info`.
    pub log_filter: Option<String>,

    /// Minimum two-finger span in pixels before a pinch begins.
    pub min_pinch_span: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            app_path: "surfhost".to_string(),
            storage_root: PathBuf::from("files"),
            bundled_dir: PathBuf::from("bundled"),
            bootstrap: BootstrapPolicy::Once,
            log_filter: None,
            min_pinch_span: ScaleDetectorConfig::default().min_span,
        }
    }
}

impl ViewConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid view config")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Directory registered as the engine search path.
    pub fn resource_dir(&self) -> PathBuf {
        self.storage_root.join(self.app_path.trim_matches('/'))
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.storage_root.join("preferences.json")
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig { env_filter: self.log_filter.clone(), ..LoggingConfig::default() }
    }

    pub fn scale_detector(&self) -> ScaleDetectorConfig {
        ScaleDetectorConfig { min_span: self.min_pinch_span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ViewConfig::from_json_str(r#"{ "app_path": "/gltfviewer/" }"#).unwrap();
        assert_eq!(cfg.app_path, "/gltfviewer/");
        assert_eq!(cfg.bootstrap, BootstrapPolicy::Once);
        assert_eq!(cfg.min_pinch_span, ViewConfig::default().min_pinch_span);
    }

    #[test]
    fn resource_dir_ignores_slashes() {
        let cfg = ViewConfig {
            app_path: "/mineola_example/".to_string(),
            storage_root: PathBuf::from("/data/files"),
            ..ViewConfig::default()
        };
        assert_eq!(cfg.resource_dir(), PathBuf::from("/data/files/mineola_example"));
    }

    #[test]
    fn full_json() {
        let cfg = ViewConfig::from_json_str(
            r#"{
                "app_path": "viewer",
                "storage_root": "/tmp/store",
                "bundled_dir": "/opt/bundle",
                "bootstrap": "every_launch",
                "log_filter": "surfhost_core=debug",
                "min_pinch_span": 40.0
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.bootstrap, BootstrapPolicy::EveryLaunch);
        assert_eq!(cfg.logging().env_filter.as_deref(), Some("surfhost_core=debug"));
        assert_eq!(cfg.scale_detector().min_span, 40.0);
        assert_eq!(cfg.preferences_path(), PathBuf::from("/tmp/store/preferences.json"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(ViewConfig::from_json_str(r#"{ "bootstrap": "sometimes" }"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ViewConfig::from_json_file(Path::new("/definitely/missing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
