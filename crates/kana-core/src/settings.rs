//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::mode::SessionMode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

const MAX_COUNTDOWN_SECS: u32 = 10;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub session: SessionSettings,
    #[serde(default)]
    pub corpus: CorpusSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub countdown_secs: u32,
    pub go_hold_ms: u64,
    pub default_mode: SessionMode,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusSettings {
    #[serde(default)]
    path: String,
}

impl CorpusSettings {
    /// Configured corpus file, or `None` for the built-in list.
    pub fn path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.session.countdown_secs == 0 || s.session.countdown_secs > MAX_COUNTDOWN_SECS {
        return Err(SettingsError::InvalidValue {
            field: "session.countdown_secs".to_string(),
            reason: format!("must be between 1 and {MAX_COUNTDOWN_SECS}"),
        });
    }
    if s.session.go_hold_ms == 0 {
        return Err(SettingsError::InvalidValue {
            field: "session.go_hold_ms".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
