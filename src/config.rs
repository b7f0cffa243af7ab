use std::collections::HashMap;
use std::env;
use std::fs;

use chrono_tz::Tz;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigError::InvalidLine {
                    line: idx + 1,
                    content: line.to_string(),
                });
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// File value first, then the process environment.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).or_else(|| env::var(key).ok())
    }
}

/// Resolved settings for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timezone: Option<Tz>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timezone: None,
        }
    }
}

impl Settings {
    pub fn resolve(config: &AppConfig) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| config.lookup(key).filter(|v| !v.trim().is_empty());

        let timezone = match non_empty("TIMEZONE") {
            Some(name) => Some(
                name.parse::<Tz>()
                    .map_err(|_| ConfigError::UnknownTimezone(name))?,
            ),
            None => None,
        };

        Ok(Self {
            // An absent key is sent as an empty `key=` parameter.
            api_key: config.lookup("GEMINI_API_KEY").unwrap_or_default(),
            model: non_empty("GEMINI_MODEL").unwrap_or(DEFAULT_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(DEFAULT_BASE_URL.to_string()),
            timezone,
        })
    }
}
