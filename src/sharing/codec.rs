//! Text encodings for shared and persisted state.
//!
//! - Shared player links: JSON, then URL-safe base64 without padding
//! - Persisted games: plain JSON text
//!
//! Decoding stops at a generic JSON `Value`; shape checks belong to
//! `schema`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Raw input could not be turned into structured data.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no value stored under key {0:?}")]
    Missing(String),
}

/// Encode a value as a URL-safe share string.
pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a share string produced by `encode`.
pub fn decode(encoded: &str) -> Result<Value, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Parse persisted JSON text.
pub fn parse_json(raw: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}
