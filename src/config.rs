//! Startup configuration: the OMDb API key and the endpoint it is sent to.

use std::fmt;

use crate::error::LookupError;

/// Environment variable holding the OMDb API key.
pub const API_KEY_VAR: &str = "OMDB_API_KEY";

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Configuration for one invocation. Built once in `main` and passed down
/// explicitly.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    /// Create a config with an explicit key. An empty key is rejected the
    /// same way a missing one is.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LookupError::MissingApiKey);
        }
        Ok(Config {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Read `OMDB_API_KEY` from the process environment. Call after `.env`
    /// has been loaded.
    pub fn from_env() -> Result<Self, LookupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` but with a caller-supplied variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LookupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(LookupError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// Point the client somewhere other than the public OMDb endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// The key must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
