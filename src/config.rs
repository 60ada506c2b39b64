//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Default contact form endpoint
const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/portfolio";

/// Document opened by the resume form
pub const RESUME_PATH: &str = "assets/resume.pdf";

/// Session log, kept off the terminal while the TUI owns it
const LOG_FILE_NAME: &str = "portfolio-tui.log";

const FLAG_ENABLED: &str = "enabled";
const FLAG_DISABLED: &str = "disabled";

/// Static settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub contact_endpoint: String,
    pub resume_path: String,
}

impl AppConfig {
    /// Inline defaults, with `PORTFOLIO_CONTACT_ENDPOINT` overriding the endpoint
    pub fn from_env() -> Self {
        let contact_endpoint = std::env::var("PORTFOLIO_CONTACT_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string());
        Self {
            contact_endpoint,
            resume_path: RESUME_PATH.to_string(),
        }
    }
}

/// Persisted user preferences.
/// The dark mode flag is stored as `"enabled"` or `"disabled"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Dark mode flag
    pub dark_mode: Option<String>,
    /// Backing file, `None` when no config directory is available
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Preferences {
    /// Get the preferences file path
    fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("preferences.json"))
    }

    /// Load preferences from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load preferences from `path`, falling back to defaults when absent
    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let mut prefs = match path.as_deref() {
            Some(p) if p.exists() => read_preferences(p)?,
            _ => Self::default(),
        };
        prefs.path = path;
        Ok(prefs)
    }

    /// Save preferences to their backing file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Ok(())
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode.as_deref() == Some(FLAG_ENABLED)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        let flag = if enabled { FLAG_ENABLED } else { FLAG_DISABLED };
        self.dark_mode = Some(flag.to_string());
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "portfolio", "portfolio-tui")
}

/// Directory holding the session log
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Append-only log file in `dir`, created along with `dir` when missing
pub fn log_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

fn read_preferences(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let prefs = serde_json::from_str(&content)
        .with_context(|| format!("Invalid preferences in {}", path.display()))?;
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.dark_mode.is_none());
        assert!(!prefs.is_dark_mode());
    }

    #[test]
    fn test_flag_strings() {
        let mut prefs = Preferences::default();
        prefs.set_dark_mode(true);
        assert_eq!(prefs.dark_mode.as_deref(), Some("enabled"));
        assert!(prefs.is_dark_mode());
        prefs.set_dark_mode(false);
        assert_eq!(prefs.dark_mode.as_deref(), Some("disabled"));
        assert!(!prefs.is_dark_mode());
    }

    #[test]
    fn test_unknown_flag_value_is_light() {
        let prefs: Preferences = serde_json::from_str(r#"{"dark_mode": "yes"}"#).unwrap();
        assert!(!prefs.is_dark_mode());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"dark_mode": "enabled", "unknown_field": "value"}"#;
        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert!(prefs.is_dark_mode());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load_from(Some(dir.path().join("prefs.json"))).unwrap();
        assert!(prefs.dark_mode.is_none());
    }

    #[test]
    fn test_save_then_load_keeps_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = Preferences::load_from(Some(path.clone())).unwrap();
        prefs.set_dark_mode(true);
        tokio_test::assert_ok!(prefs.save());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"enabled\""));
        let reloaded = Preferences::load_from(Some(path)).unwrap();
        assert!(reloaded.is_dark_mode());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        assert!(Preferences::load_from(Some(path)).is_err());
    }

    #[test]
    fn test_save_without_path_is_noop() {
        let prefs = Preferences::load_from(None).unwrap();
        assert!(prefs.save().is_ok());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = Preferences::default_path();
    }

    #[test]
    fn test_log_appender_writes_to_file() {
        use std::io::Write;

        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let mut appender = log_appender(&log_dir).unwrap();
        appender.write_all(b"Form submission error\n").unwrap();
        appender.flush().unwrap();

        let written = fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
        assert!(written.contains("Form submission error"));
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            resume_path: RESUME_PATH.to_string(),
        };
        assert_eq!(config.resume_path, "assets/resume.pdf");
        assert!(config.contact_endpoint.starts_with("https://"));
    }
}
