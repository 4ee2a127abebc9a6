//! Signed session tokens.
//!
//! ## Token Format
//!
//! ```text
//! token = hex(payload) "." hex(HMAC-SHA256(secret, payload))
//! payload = {"exp":<unix seconds>}
//! ```
//!
//! The payload is the canonical JSON of [`SessionClaims`]. The MAC covers the
//! exact payload bytes, so any edit to the payload or the signature makes the
//! token invalid. Verification compares MACs in constant time.
//!
//! A session is valid iff its MAC verifies **and** `now < exp`.

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR: char = '.';

/// Why a session token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No token was presented.
    #[error("session token missing")]
    Missing,

    /// Token is not `<hex>.<hex>`.
    #[error("session token has invalid format: {0}")]
    InvalidFormat(String),

    /// MAC does not match the payload.
    #[error("session token signature mismatch")]
    SignatureMismatch,

    /// Payload verified but is not a valid claims object.
    #[error("session payload unreadable: {0}")]
    InvalidPayload(String),

    /// Session has reached its expiry.
    #[error("session expired at {expired_at} (now {now})")]
    Expired {
        /// Expiry carried in the token.
        expired_at: i64,
        /// Time of the check.
        now: i64,
    },
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Expiry as Unix epoch seconds. The session is valid while `now < exp`.
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for a session issued at `now` lasting `ttl_minutes`.
    pub fn new(now: i64, ttl_minutes: u32) -> Self {
        Self {
            exp: now.saturating_add(i64::from(ttl_minutes) * 60),
        }
    }

    /// Whether the session is still live at `now`.
    pub fn is_live_at(&self, now: i64) -> bool {
        now < self.exp
    }
}

/// HMAC-signed, tamper-evident session token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Sign `claims` with `secret`.
    pub fn issue(secret: &[u8], claims: &SessionClaims) -> Self {
        let payload = format!("{{\"exp\":{}}}", claims.exp);
        let signature = sign(secret, payload.as_bytes());
        Self(format!("{}{}{}", hex::encode(payload), SEPARATOR, hex::encode(signature)))
    }

    /// Wrap a token string received from a client.
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get the token as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify the signature and return the carried claims.
    ///
    /// Does not check expiry; see [`SessionToken::verify_at`].
    pub fn verify_signature(&self, secret: &[u8]) -> Result<SessionClaims, SessionError> {
        let (payload_hex, signature_hex) = self
            .0
            .split_once(SEPARATOR)
            .ok_or_else(|| SessionError::InvalidFormat("missing separator".to_string()))?;

        let payload = hex::decode(payload_hex)
            .map_err(|e| SessionError::InvalidFormat(format!("payload: {}", e)))?;
        let signature = hex::decode(signature_hex)
            .map_err(|e| SessionError::InvalidFormat(format!("signature: {}", e)))?;

        let mut mac = new_mac(secret);
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| SessionError::SignatureMismatch)?;

        serde_json::from_slice::<SessionClaims>(&payload)
            .map_err(|e| SessionError::InvalidPayload(e.to_string()))
    }

    /// Verify the signature and that the session is live at `now`.
    pub fn verify_at(&self, secret: &[u8], now: i64) -> Result<SessionClaims, SessionError> {
        let claims = self.verify_signature(secret)?;
        if !claims.is_live_at(now) {
            return Err(SessionError::Expired {
                expired_at: claims.exp,
                now,
            });
        }
        Ok(claims)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn new_mac(secret: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(secret).expect("HMAC accepts any key size")
}

fn sign(secret: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut mac = new_mac(secret);
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}
