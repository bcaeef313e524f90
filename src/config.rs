//! Runtime settings for a single run.
//!
//! Nothing here is persisted. The optional `GITHUB_TOKEN` credential and
//! `GITHUB_API_URL` root are the only values read from outside the binary;
//! everything else is a fixed default that tests override through the
//! `with_*` setters.

use std::time::Duration;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Optional API root override, e.g. for GitHub Enterprise.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_AVATAR_BASE: &str = "https://avatars.githubusercontent.com";
pub const DEFAULT_CONVERTER: &str = "chafa";

/// Cell size handed to the image converter (columns x rows).
pub const AVATAR_COLS: u16 = 24;
pub const AVATAR_ROWS: u16 = 12;

#[derive(Clone, Debug)]
pub struct Config {
    pub token: Option<String>,
    pub api_base: String,
    pub avatar_base: String,
    pub converter: String,
    pub api_timeout: Duration,
    pub rate_limit_timeout: Duration,
    pub avatar_timeout: Duration,
    pub converter_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            avatar_base: DEFAULT_AVATAR_BASE.to_string(),
            converter: DEFAULT_CONVERTER.to_string(),
            api_timeout: Duration::from_secs(10),
            rate_limit_timeout: Duration::from_secs(5),
            avatar_timeout: Duration::from_secs(5),
            converter_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Defaults plus the credential from `GITHUB_TOKEN` and an API root
    /// from `GITHUB_API_URL`, when set.
    pub fn from_env() -> Self {
        let config = Self::default().with_token(std::env::var(TOKEN_VAR).ok());
        match std::env::var(API_URL_VAR) {
            Ok(base) if !base.trim().is_empty() => config.with_api_base(base.trim()),
            _ => config,
        }
    }

    /// Empty or whitespace-only tokens count as no token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_avatar_base(mut self, base: impl Into<String>) -> Self {
        self.avatar_base = base.into().trim_end_matches('/').to_string();
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_converter(mut self, command: impl Into<String>) -> Self {
        self.converter = command.into();
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_timeouts(mut self, timeout: Duration) -> Self {
        self.api_timeout = timeout;
        self.rate_limit_timeout = timeout;
        self.avatar_timeout = timeout;
        self.converter_timeout = timeout;
        self
    }
}
