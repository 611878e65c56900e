//! Configuration loading and resolution.

use std::time::Duration;

use docgrid::{FetchOptions, GridError, GridResult};

/// Environment variable consulted when no URL argument is given.
pub const URL_ENV_VAR: &str = "DOCGRID_URL";

/// How the grid is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The character canvas, highest row first.
    Text,
    /// Bounds plus the flat cell list as one JSON object.
    Json,
}

/// Everything one run needs, after defaults and the environment are applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub fetch: FetchOptions,
    pub format: OutputFormat,
}

impl Settings {
    /// Build settings from parsed command-line values.
    pub fn from_args(
        url: Option<&str>,
        timeout_ms: u64,
        user_agent: Option<&str>,
        json: bool,
    ) -> GridResult<Self> {
        let url = resolve_url(url)?;

        let mut fetch = FetchOptions {
            timeout: Duration::from_millis(timeout_ms),
            ..FetchOptions::default()
        };
        if let Some(ua) = user_agent {
            fetch.user_agent = ua.to_string();
        }

        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self { url, fetch, format })
    }
}

/// Resolve the document URL: explicit argument first, then `DOCGRID_URL`.
pub fn resolve_url(explicit: Option<&str>) -> GridResult<String> {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return Ok(url.to_string());
    }

    if let Ok(env_url) = std::env::var(URL_ENV_VAR) {
        let env_url = env_url.trim();
        if !env_url.is_empty() {
            return Ok(env_url.to_string());
        }
    }

    Err(GridError::Config(format!(
        "no document URL given (pass it as an argument or set {URL_ENV_VAR})"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let url = resolve_url(Some(" https://example.com/pub ")).unwrap();
        assert_eq!(url, "https://example.com/pub");
    }

    #[test]
    fn test_settings_apply_overrides() {
        let s = Settings::from_args(Some("https://example.com"), 1500, Some("probe/1"), true)
            .unwrap();
        assert_eq!(s.fetch.timeout, Duration::from_millis(1500));
        assert_eq!(s.fetch.user_agent, "probe/1");
        assert_eq!(s.format, OutputFormat::Json);
    }

    #[test]
    fn test_settings_keep_default_user_agent() {
        let s = Settings::from_args(Some("https://example.com"), 30_000, None, false).unwrap();
        assert!(s.fetch.user_agent.starts_with("docgrid/"));
        assert_eq!(s.format, OutputFormat::Text);
    }
}
