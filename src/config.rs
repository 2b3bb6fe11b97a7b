//! Backend location parsed from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";
pub const BASE_URL_ENV: &str = "SUPPLY_API_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },
    #[error("base URL `{0}` cannot carry a path")]
    NotABase(String),
}

/// Where the backend API lives. Every endpoint path is resolved against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a base URL. A trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL does not parse or cannot have path
    /// segments appended (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|source| ConfigError::InvalidBaseUrl { url: base_url.to_owned(), source })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url.to_owned()));
        }
        Ok(Self { base_url: url })
    }

    /// Build config from `SUPPLY_API_BASE_URL`, falling back to
    /// [`DEFAULT_BASE_URL`] when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable holds an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(&raw)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve endpoint path segments against the base URL.
    ///
    /// Each segment is percent-encoded, so a `/` inside an identifier stays in
    /// its segment. `.` and `..` segments are still resolved by URL parsing;
    /// the endpoint helpers reject them before they get here.
    #[must_use]
    pub fn url_for(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }
}
