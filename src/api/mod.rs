//! Spot data API client and request signing.

mod signer;
mod spot_client;
mod types;

pub use signer::{sign, signed_query};
pub use spot_client::{SpotClient, SpotSource};
pub use types::SpotResponse;
