//! Panel settings, read from TOML.
//!
//! The defaults in `default_settings.toml` are compiled in. A host that wants
//! other values installs its own TOML once with [`init_custom`] before the
//! first [`settings`] lookup; after that the active settings are frozen.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings. Fails if the TOML is rejected or if settings
/// are already active (installed earlier or read through [`settings`]).
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    ACTIVE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// The active settings; the compiled-in defaults unless [`init_custom`] ran.
pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        // build.rs has already checked the embedded file
        parse_settings_toml(DEFAULT_SETTINGS_TOML)
            .unwrap_or_else(|e| panic!("default_settings.toml rejected: {e}"))
    })
}

/// The compiled-in TOML, for `settings-export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("malformed settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("custom settings must be installed before first use")]
    AlreadyInitialized,
}

/// Which alphabet the letter keys feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Letters go straight to the text field.
    #[default]
    Latin,
    /// Letters build a pinyin syllable buffer.
    Pinyin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub candidates: CandidateSettings,
    pub dictionary: DictionarySettings,
    pub panel: PanelSettings,
    #[serde(default)]
    punctuation: HashMap<String, String>,
    /// Parsed punctuation: ASCII symbol → full-width text.
    #[serde(skip)]
    punctuation_parsed: HashMap<char, String>,
}

impl Settings {
    /// Full-width replacement for `symbol` in pinyin mode, if any.
    pub fn punctuation_get(&self, symbol: char) -> Option<&str> {
        self.punctuation_parsed.get(&symbol).map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelSettings {
    pub initial_mode: InputMode,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings = toml::from_str(toml_str)?;
    validate(&s)?;
    s.punctuation_parsed = parse_punctuation(&s.punctuation)?;
    Ok(s)
}

fn parse_punctuation(
    raw: &HashMap<String, String>,
) -> Result<HashMap<char, String>, SettingsError> {
    let mut result = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let mut chars = key.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_punctuation() => c,
            _ => {
                return Err(SettingsError::InvalidValue {
                    field: format!("punctuation.{key}"),
                    reason: "key must be a single ASCII symbol".to_string(),
                });
            }
        };
        if value.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("punctuation.{key}"),
                reason: "replacement must not be empty".to_string(),
            });
        }
        result.insert(symbol, value.clone());
    }
    Ok(result)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.candidates.page_size == 0 {
        return Err(SettingsError::InvalidValue {
            field: "candidates.page_size".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.dictionary.path.as_os_str().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.path".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
