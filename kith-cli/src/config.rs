//! `config.toml`: display settings and engine policies.

use anyhow::{Context, Result};
use kith_core::{BirthdayPolicy, GaugeBands, ReminderPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::state::KithHome;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub reminders: ReminderPolicy,
    #[serde(default)]
    pub birthdays: BirthdayPolicy,
    #[serde(default)]
    pub gauge: GaugeBands,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Locale for personality names, traits and reminder text.
    pub locale: String,
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

impl Config {
    /// Read `path`, or defaults when the file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize config")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?).with_context(|| format!("write {}", path.display()))
    }
}

/// Write a default config unless one exists. Returns whether it wrote.
pub fn init_config(home: &KithHome) -> Result<bool> {
    let path = home.config_path();
    if path.exists() {
        return Ok(false);
    }
    home.ensure()?;
    Config::default().write_to(&path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [display]
            locale = "es"
            timezone = "America/Chicago"

            [reminders]
            max_reminders = 5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.display.locale, "es");
        assert_eq!(cfg.reminders.max_reminders, 5);
        assert_eq!(cfg.birthdays.window_days, 30);
        assert_eq!(cfg.gauge.excellent, 90);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.display.locale, "en");
        assert_eq!(cfg.reminders, ReminderPolicy::default());
    }

    #[test]
    fn init_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let home = KithHome::new(dir.path().join("kith"));
        assert!(init_config(&home).unwrap());
        assert!(!init_config(&home).unwrap());

        let cfg = Config::load_or_default(&home.config_path()).unwrap();
        assert_eq!(cfg.gauge, GaugeBands::default());
        assert_eq!(cfg.birthdays, BirthdayPolicy::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[reminders]\nmax_reminders = \"three\"\n").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }
}
