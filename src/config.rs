//! Runtime configuration parsed from the page URL query string.
//!
//! Recognised keys:
//! - `log`: `error`, `warn`, `info` (default), `debug` or `trace`
//! - `lang`: BCP 47 locale tag for the clock; platform locale when absent
//!
//! Unknown keys are ignored so the page can sit behind links that carry
//! their own tracking parameters.

use log::Level;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    LogLevel(String),
    #[error("empty value for '{0}'")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: Level,
    pub locale: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_level: DEFAULT_LOG_LEVEL, locale: None }
    }
}

impl AppConfig {
    /// Build config from a `location.search` string such as `?log=debug&lang=de-DE`.
    pub fn from_query(search: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for pair in search.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => config.log_level = parse_level(value)?,
                "lang" => config.locale = Some(non_empty("lang", value)?.to_owned()),
                _ => {}
            }
        }
        Ok(config)
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.parse::<Level>().map_err(|_| ConfigError::LogLevel(raw.to_owned()))
}

fn non_empty<'a>(key: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    let value = value.trim();
    if value.is_empty() { Err(ConfigError::Empty(key)) } else { Ok(value) }
}
