//! API connection settings.

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable holding the API root URL.
pub const API_URL_VAR: &str = "SPOTDASH_API_URL";
/// Environment variable holding the bearer token.
pub const API_TOKEN_VAR: &str = "SPOTDASH_API_TOKEN";

/// Where the spot data API lives and how to authenticate against it.
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Root URL, e.g. `https://dashboard.example.com`
    pub base_url: String,

    /// Bearer token sent in the `Authorization` header
    pub api_token: String,
}

impl ApiConfig {
    /// Build a config, rejecting empty values.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_token = api_token.into();

        if base_url.trim().is_empty() {
            return Err(Error::Config("base URL is empty".to_string()));
        }
        if api_token.trim().is_empty() {
            return Err(Error::Config("API token is empty".to_string()));
        }

        Ok(Self { base_url, api_token })
    }

    /// Create from environment variables:
    /// - SPOTDASH_API_URL
    /// - SPOTDASH_API_TOKEN
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_VAR)
            .map_err(|_| Error::Config(format!("{} not set", API_URL_VAR)))?;
        let api_token = std::env::var(API_TOKEN_VAR)
            .map_err(|_| Error::Config(format!("{} not set", API_TOKEN_VAR)))?;

        Self::new(base_url, api_token)
    }

    /// Full URL of the spot positions endpoint.
    pub fn spot_url(&self) -> String {
        format!("{}/api/binance/spot", self.base_url.trim_end_matches('/'))
    }
}

// The token must never reach a log sink through `{:?}`.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
