//! Resolved runtime configuration.

use std::time::Duration;

use super::types::Settings;

/// Service root used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://novoo5-cardioqa-ai-system.hf.space";

/// Environment variable that overrides the settings file.
pub const API_URL_ENV: &str = "CARDIOQA_API_URL";

/// Configuration handed explicitly to the dispatcher and runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Service root; requests go to `{api_url}/query`.
    pub api_url: String,
    /// Optional whole-request timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, &Settings::default())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// What: Combine the configuration layers.
    ///
    /// Inputs:
    /// - `cli_url`: `--api-url` value.
    /// - `env_url`: Value of [`API_URL_ENV`].
    /// - `settings`: Parsed `settings.conf`.
    ///
    /// Output:
    /// - Config whose URL comes from the first non-empty of CLI, environment, settings,
    ///   then [`DEFAULT_API_URL`].
    #[must_use]
    pub fn resolve(cli_url: Option<&str>, env_url: Option<&str>, settings: &Settings) -> Self {
        let api_url = non_empty(cli_url)
            .or_else(|| non_empty(env_url))
            .or_else(|| non_empty(settings.api_url.as_deref()))
            .unwrap_or(DEFAULT_API_URL)
            .to_string();
        let request_timeout = (settings.request_timeout_secs > 0)
            .then(|| Duration::from_secs(settings.request_timeout_secs));
        Self {
            api_url,
            request_timeout,
        }
    }

    /// What: Load configuration from the environment and the user's settings file.
    ///
    /// Inputs:
    /// - `cli_url`: `--api-url` value, if given.
    ///
    /// Details:
    /// - Called once at startup; the result is passed down explicitly.
    #[must_use]
    pub fn load(cli_url: Option<&str>) -> Self {
        let env_url = std::env::var(API_URL_ENV).ok();
        let cfg = Self::resolve(cli_url, env_url.as_deref(), &super::settings::settings());
        tracing::info!(api_url = %cfg.api_url, timeout = ?cfg.request_timeout, "configuration resolved");
        cfg
    }
}
