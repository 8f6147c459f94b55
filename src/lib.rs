//! Spot position data for a trading dashboard.
//!
//! - [`api::sign`] produces HMAC-SHA256 signatures for authenticated queries
//! - [`api::SpotClient`] loads spot positions and the USDT balance
//! - [`store::PositionStore`] holds the latest result for UI consumers

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod testing;

pub use api::{sign, signed_query, SpotClient, SpotResponse, SpotSource};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use models::Position;
pub use store::{PositionStore, PositionsSnapshot, RefreshOutcome};
