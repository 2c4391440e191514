// SPDX-License-Identifier: MIT

//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs bound to an email, valid for 7 days from issuance.
//! There is no revocation: a leaked token stays valid until it expires, and
//! rotating the signing secret invalidates everything outstanding at once.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token validity window.
pub const TOKEN_VALIDITY_SECS: u64 = 7 * 24 * 60 * 60;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// The email this token was issued for
    pub email: String,
    /// Issuance time in milliseconds, embedded for uniqueness and audit
    #[serde(rename = "issuedAtMillis")]
    pub issued_at_millis: u64,
    /// Expiration time (Unix timestamp), enforced on verification
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Mint a signed access token for an email.
pub fn issue(email: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;

    let claims = TokenClaims {
        email: email.to_string(),
        issued_at_millis: now.as_millis() as u64,
        iat: now.as_secs() as usize,
        exp: (now.as_secs() + TOKEN_VALIDITY_SECS) as usize,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Verify a token's signature and expiry.
///
/// Bad signature, malformed token and expired token all collapse into
/// `None`; the download gate only needs an admit/deny decision.
pub fn verify(token: &str, signing_key: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}
