use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_DIR_NAME: &str = ".cashflow";
const HOME_ENV: &str = "CASHFLOW_HOME";

/// Stores user-configurable display preferences and forecast defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_horizon_value")]
    pub default_horizon_months: usize,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_horizon_months: Self::default_horizon_value(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = ["currency", "locale", "horizon", "color", "plain"];

    pub fn default_horizon_value() -> usize {
        12
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Application data directory, `$CASHFLOW_HOME` or `~/.cashflow`.
    pub fn resolve_base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Applies a `config set <key> <value>` style update.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let trimmed = value.trim();
        match key {
            "currency" => {
                if trimmed.len() != 3 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                self.currency = trimmed.to_ascii_uppercase();
            }
            "locale" => {
                if trimmed.is_empty() {
                    return Err(invalid());
                }
                self.locale = trimmed.to_string();
            }
            "horizon" => {
                let months: usize = trimmed.parse().map_err(|_| invalid())?;
                if !(1..=24).contains(&months) {
                    return Err(invalid());
                }
                self.default_horizon_months = months;
            }
            "color" => self.ui_color_enabled = parse_flag(trimmed).ok_or_else(invalid)?,
            "plain" => {
                self.accessibility.plain_output = parse_flag(trimmed).ok_or_else(invalid)?
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
