//! Page Configuration
//!
//! Read from the page URL query string, e.g. `?theme=dark&log=debug&seed=0`.

use log::LevelFilter;
use percent_encoding::percent_decode_str;

/// Color theme (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ConfigError::UnknownTheme(other.to_string())),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Root element class
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Follow `prefers-color-scheme`, light when unavailable
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) if query.matches() => Theme::Dark,
            Ok(_) => Theme::Light,
            Err(e) => {
                log::warn!("[Config] matchMedia failed: {:?}", e);
                Theme::Light
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownTheme(String),
    UnknownLogLevel(String),
    InvalidFlag(String, String),
    MalformedQuery(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownTheme(v) => write!(f, "Unknown theme: {}", v),
            ConfigError::UnknownLogLevel(v) => write!(f, "Unknown log level: {}", v),
            ConfigError::InvalidFlag(key, v) => write!(f, "Invalid value for {}: {}", key, v),
            ConfigError::MalformedQuery(msg) => write!(f, "Malformed query: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit theme; `None` follows the browser preference
    pub theme: Option<Theme>,
    pub log_level: LevelFilter,
    /// Start with the sample todos
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: None,
            log_level: LevelFilter::Info,
            seed: true,
        }
    }
}

impl AppConfig {
    /// Parse a query string (with or without the leading `?`)
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(&value.replace('+', " "))
                .decode_utf8()
                .map_err(|e| ConfigError::MalformedQuery(e.to_string()))?
                .to_lowercase();

            match key {
                "theme" => config.theme = Some(Theme::from_str(&value)?),
                "log" => config.log_level = parse_level(&value)?,
                "seed" => config.seed = parse_flag(key, &value)?,
                _ => {}
            }
        }

        Ok(config)
    }

    /// Read the current page location, falling back to defaults on any error
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .ok_or_else(|| "no window".to_string())
            .and_then(|w| w.location().search().map_err(|e| format!("{:?}", e)));

        match search {
            Ok(search) => Self::from_query(&search).unwrap_or_else(|e| {
                log::warn!("[Config] {}, using defaults", e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("[Config] cannot read location: {}", e);
                Self::default()
            }
        }
    }

    /// Configured theme, or the browser preference
    pub fn resolve_theme(&self) -> Theme {
        self.theme.unwrap_or_else(Theme::detect)
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::UnknownLogLevel(value.to_string()))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "true" | "on" | "" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        other => Err(ConfigError::InvalidFlag(key.to_string(), other.to_string())),
    }
}
