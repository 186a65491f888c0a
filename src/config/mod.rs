// src/config/mod.rs
// Environment-based configuration - single source of truth for all env vars

use thiserror::Error;

/// Default Zephyr Scale Cloud v2 API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.zephyrscale.smartbear.com/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process configuration read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Zephyr Scale API bearer token (ZEPHYR_API_TOKEN)
    pub api_token: String,
    /// Jira project key this server is scoped to (ZEPHYR_PROJECT_KEY)
    pub project_key: String,
    /// API base URL override (ZEPHYR_BASE_URL)
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or empty required variables fail here, before any tool is
    /// served, so a misconfigured process exits non-zero immediately.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Empty values count as unset, same as an unexported shell var.
        let read = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_token =
            read("ZEPHYR_API_TOKEN").ok_or(ConfigError::MissingVar("ZEPHYR_API_TOKEN"))?;
        let project_key =
            read("ZEPHYR_PROJECT_KEY").ok_or(ConfigError::MissingVar("ZEPHYR_PROJECT_KEY"))?;
        let base_url = read("ZEPHYR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_token,
            project_key,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn loads_required_vars_and_default_base_url() {
        let config = Config::from_lookup(lookup(&[
            ("ZEPHYR_API_TOKEN", "secret"),
            ("ZEPHYR_PROJECT_KEY", "KAN"),
        ]))
        .unwrap();

        assert_eq!(config.api_token, "secret");
        assert_eq!(config.project_key, "KAN");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_override() {
        let config = Config::from_lookup(lookup(&[
            ("ZEPHYR_API_TOKEN", "secret"),
            ("ZEPHYR_PROJECT_KEY", "KAN"),
            ("ZEPHYR_BASE_URL", "http://localhost:9999/v2"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9999/v2");
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = Config::from_lookup(lookup(&[("ZEPHYR_PROJECT_KEY", "KAN")])).unwrap_err();
        assert!(err.to_string().contains("ZEPHYR_API_TOKEN"));
    }

    #[test]
    fn empty_project_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            ("ZEPHYR_API_TOKEN", "secret"),
            ("ZEPHYR_PROJECT_KEY", "  "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("ZEPHYR_PROJECT_KEY"));
    }
}
