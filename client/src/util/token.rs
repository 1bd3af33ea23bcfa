//! Unverified decoding of compact signed tokens.
//!
//! SECURITY
//! ========
//! The signature is never checked. Claims read here only tell the backend
//! which user is confirming a role; the backend must re-validate them.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Id;

/// Why a token payload could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token must have 3 segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token payload is not a claims object: {0}")]
    Claims(String),
}

/// Payload claims. `user_id` is required; everything else is kept as-is.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenClaims {
    pub user_id: Id,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Decode the payload segment of `header.payload.signature`.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is not three segments, the
/// payload is not base64url, or the JSON lacks a `user_id`.
pub fn decode(token: &str) -> Result<TokenClaims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| DecodeError::Claims(e.to_string()))
}
