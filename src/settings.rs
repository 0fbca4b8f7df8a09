//! User settings and the last-input cache.
//!
//! Settings are layered:
//! - built-in defaults
//! - `settings.toml` in the user's config directory (or `--config`)
//! - `ERRCODE_*` environment variables (`ERRCODE_FORMAT=json`,
//!   `ERRCODE_COLOR=never`, `ERRCODE_REMEMBER=false`)
//!
//! The most recent successfully parsed input is written back to the same
//! file so that running without an argument repeats the last lookup.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::input::MAX_INPUT_LEN;

const APP_DIR: &str = "errcode";
const FILE_NAME: &str = "settings.toml";
const ENV_PREFIX: &str = "ERRCODE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Raw text of the last code that parsed successfully
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_input: Option<String>,

    /// Output format when `--json` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Colour policy for text output
    #[serde(default)]
    pub color: ColorChoice,

    /// Whether successful lookups update `last_input`
    #[serde(default = "default_true")]
    pub remember: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            last_input: None,
            format: OutputFormat::default(),
            color: ColorChoice::default(),
            remember: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no configuration directory available on this system")]
    NoConfigDir,
}

impl Settings {
    /// `<config dir>/errcode/settings.toml`
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Defaults, then the file at `path` (if it exists), then environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
            .extract()
            .map_err(|e| SettingsError::Load(Box::new(e)))
    }

    /// Defaults and the file only. Used when rewriting the file, so
    /// environment overrides are never persisted.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .extract()
            .map_err(|e| SettingsError::Load(Box::new(e)))
    }

    /// Save current settings to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let io_err = |source| SettingsError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string).map_err(io_err)?;

        Ok(())
    }

    /// The cached input, if one is stored and fits the input limit.
    pub fn cached_input(&self) -> Option<&str> {
        self.last_input
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.chars().count() <= MAX_INPUT_LEN)
    }
}

/// The single "last input" slot in the settings file.
#[derive(Debug, Clone)]
pub struct LastInputStore {
    path: PathBuf,
}

impl LastInputStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LastInputStore { path: path.into() }
    }

    /// Read the cached input. Unreadable files count as an empty cache.
    pub fn load(&self) -> Option<String> {
        match Settings::load_file(&self.path) {
            Ok(settings) => settings.cached_input().map(str::to_string),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable settings file");
                None
            }
        }
    }

    /// Replace the cached input, keeping every other setting in the file.
    pub fn store(&self, raw: &str) -> Result<(), SettingsError> {
        let mut settings = Settings::load_file(&self.path)?;
        if settings.last_input.as_deref() == Some(raw) {
            return Ok(());
        }
        settings.last_input = Some(raw.to_string());
        settings.save(&self.path)?;
        tracing::debug!(path = %self.path.display(), "stored last input");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.last_input, None);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.color, ColorChoice::Auto);
        assert!(settings.remember);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_file(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
last_input = "0xC0000056"
format = "json"
color = "never"
remember = false
"#;
        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_file(&config_path).unwrap();
        assert_eq!(settings.last_input.as_deref(), Some("0xC0000056"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.color, ColorChoice::Never);
        assert!(!settings.remember);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "color = \"always\"\n").unwrap();

        let settings = Settings::load_file(&config_path).unwrap();
        assert_eq!(settings.color, ColorChoice::Always);
        // Untouched keys keep their defaults
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.remember);
        assert!(settings.last_input.is_none());
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "format = \"yaml\"\n").unwrap();

        let err = Settings::load_file(&config_path).unwrap_err();
        assert!(matches!(err, SettingsError::Load(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }

    #[test]
    fn test_save_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            last_input: Some("-1073741510".to_string()),
            format: OutputFormat::Json,
            ..Settings::default()
        };
        settings.save(&config_path).unwrap();

        let loaded = Settings::load_file(&config_path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_cached_input_limits() {
        let mut settings = Settings { last_input: Some("  0x09 ".to_string()), ..Settings::default() };
        assert_eq!(settings.cached_input(), Some("0x09"));

        settings.last_input = Some("1".repeat(MAX_INPUT_LEN + 1));
        assert_eq!(settings.cached_input(), None);

        settings.last_input = Some(String::new());
        assert_eq!(settings.cached_input(), None);
    }

    #[test]
    fn test_last_input_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = LastInputStore::new(temp_dir.path().join("settings.toml"));
        assert_eq!(store.load(), None);

        store.store("0xDEADDEAD").unwrap();
        assert_eq!(store.load().as_deref(), Some("0xDEADDEAD"));

        store.store("9").unwrap();
        assert_eq!(store.load().as_deref(), Some("9"));
    }

    #[test]
    fn test_last_input_store_keeps_other_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "format = \"json\"\ncolor = \"never\"\n").unwrap();

        LastInputStore::new(&config_path).store("42").unwrap();

        let settings = Settings::load_file(&config_path).unwrap();
        assert_eq!(settings.last_input.as_deref(), Some("42"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.color, ColorChoice::Never);
    }

    #[test]
    fn test_unreadable_store_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is = = not toml").unwrap();

        let store = LastInputStore::new(&config_path);
        assert_eq!(store.load(), None);
        assert!(store.store("1").is_err());
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
