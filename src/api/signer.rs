//! HMAC-SHA256 request signing.
//!
//! Signed endpoints expect the hex digest of the query string keyed with the
//! account's API secret, appended as a `signature` parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Sign `message` with `secret`, returning the lowercase hex digest.
pub fn sign(message: &str, secret: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Crypto(e.to_string()))?;
    mac.update(message.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Append a `signature` parameter computed over `query`.
pub fn signed_query(query: &str, secret: &str) -> Result<String> {
    let signature = sign(query, secret)?;

    if query.is_empty() {
        Ok(format!("signature={}", signature))
    } else {
        Ok(format!("{}&signature={}", query, signature))
    }
}
