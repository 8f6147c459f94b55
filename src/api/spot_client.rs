//! Spot data API client for fetching balance and positions.

use std::future::Future;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

use super::types::SpotResponse;

/// Anything that can produce a fresh `SpotResponse`.
pub trait SpotSource {
    fn load_spot_data(&self) -> impl Future<Output = Result<SpotResponse>> + Send;
}

/// Client for the dashboard's spot data endpoint (read-only).
///
/// Each call makes exactly one request. There is no caching or retry here, and
/// no timeout beyond what the underlying `reqwest::Client` applies.
pub struct SpotClient {
    client: Client,
    config: ApiConfig,
}

impl SpotClient {
    /// Create a new client with a default HTTP transport.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Create with a preconfigured HTTP transport (timeouts, proxies, ...).
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch current spot positions and USDT balance.
    pub async fn load_spot_data(&self) -> Result<SpotResponse> {
        let url = self.config.spot_url();

        debug!(url = %url, "Fetching spot data");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiStatus { status });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        let spot = SpotResponse::normalize(value);

        debug!(
            positions = spot.positions.len(),
            usdt = spot.usdt,
            "Loaded spot data"
        );

        Ok(spot)
    }
}

impl SpotSource for SpotClient {
    fn load_spot_data(&self) -> impl Future<Output = Result<SpotResponse>> + Send {
        SpotClient::load_spot_data(self)
    }
}
