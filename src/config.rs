use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{debug, info};

use dtcalc::{CalendarDate, DayKind};

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dtcalc.toml";

/// User settings, passed explicitly to whatever needs them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Language used for weekday names.
    #[serde(default)]
    pub language: Language,

    /// IANA timezone used to decide what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Counting rule used by `calc` when `--kind` is not given.
    #[serde(default)]
    pub default_kind: DayKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            timezone: default_timezone(),
            default_kind: DayKind::default(),
        }
    }
}

fn default_timezone() -> String {
    "America/Recife".to_string()
}

/// Supported output languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt_BR")]
    Portuguese,
    #[serde(rename = "en_US")]
    English,
}

impl Language {
    pub const fn weekday_name(self, weekday: Weekday) -> &'static str {
        match self {
            Self::Portuguese => match weekday {
                Weekday::Mon => "segunda-feira",
                Weekday::Tue => "terça-feira",
                Weekday::Wed => "quarta-feira",
                Weekday::Thu => "quinta-feira",
                Weekday::Fri => "sexta-feira",
                Weekday::Sat => "sábado",
                Weekday::Sun => "domingo",
            },
            Self::English => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using default settings");
                    return Ok(Self::default());
                }
                default
            }
        };

        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let settings = Self::from_toml(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings: Self = toml::from_str(toml_str).context("failed to parse settings TOML")?;
        settings.tz()?;
        Ok(settings)
    }

    /// The configured timezone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("invalid timezone '{}': {e}", self.timezone))
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> Result<CalendarDate> {
        self.today_at(Utc::now())
    }

    /// The date `now` falls on in the configured timezone.
    pub fn today_at(&self, now: DateTime<Utc>) -> Result<CalendarDate> {
        let tz = self.tz()?;
        Ok(CalendarDate::from(now.with_timezone(&tz).date_naive()))
    }
}
