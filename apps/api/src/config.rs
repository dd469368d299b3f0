use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "5000";

/// Application configuration loaded from environment variables.
/// Every variable is optional; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the narration endpoint when set.
    pub openai_api_key: Option<String>,
    /// JSON file that replaces the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            catalog_path: optional_env("EVREC_CATALOG_PATH").map(PathBuf::from),
            port: parse_port(&std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()))?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("5000").unwrap(), 5000);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let err = parse_port("five thousand").unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_optional_env_treats_blank_as_absent() {
        std::env::set_var("EVREC_TEST_BLANK_VAR", "   ");
        assert_eq!(optional_env("EVREC_TEST_BLANK_VAR"), None);
        std::env::set_var("EVREC_TEST_SET_VAR", "sk-test");
        assert_eq!(optional_env("EVREC_TEST_SET_VAR").as_deref(), Some("sk-test"));
        assert_eq!(optional_env("EVREC_TEST_UNSET_VAR"), None);
    }
}
