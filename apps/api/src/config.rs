use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_TEXT_BYTES: usize = 200_000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Without a key the chat and generation routes answer 503.
    pub anthropic_api_key: Option<String>,
    /// Overrides the Anthropic API host, e.g. for a gateway or proxy.
    pub anthropic_base_url: Option<String>,
    /// Largest resume text the analyzer accepts.
    pub max_text_bytes: usize,
    /// Largest multipart upload body.
    pub max_upload_bytes: usize,
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            anthropic_base_url: None,
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            vocabulary_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_base_url: optional_env("ANTHROPIC_BASE_URL"),
            max_text_bytes: parse_env("MAX_TEXT_BYTES", DEFAULT_MAX_TEXT_BYTES)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            vocabulary_path: optional_env("ATS_VOCABULARY_PATH").map(PathBuf::from),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_text_bytes, 200_000);
        assert!(config.anthropic_api_key.is_none());
        assert!(config.anthropic_base_url.is_none());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: usize = parse_env("ATS_API_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }
}
