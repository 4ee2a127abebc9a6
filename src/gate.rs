//! Access-code gate and session issuance.
//!
//! ```text
//! Locked --validate_code ok--> issue_session --> Unlocked
//! Unlocked --now >= exp--> Locked
//! ```
//!
//! There is no revocation: a session ends only when its expiry passes.
//! Every check fails closed. An absent, malformed, forged, or expired
//! token is simply "not a session".

use chrono::Utc;
use tracing::debug;

use crate::config::AutomarkerConfig;
use crate::text::{clamp_utf16, MAX_CODE_CHARS};
use crate::types::{SessionClaims, SessionError, SessionToken};

/// Compare a submitted access code against the expected one.
///
/// The submission is capped at [`MAX_CODE_CHARS`] UTF-16 units and trimmed.
/// An empty submission never matches. Comparison is case-sensitive and
/// runs in time independent of where the first mismatch occurs.
pub fn validate_code(submitted: &str, expected: &str) -> bool {
    let code = clamp_utf16(submitted, MAX_CODE_CHARS).trim();
    if code.is_empty() || code.len() != expected.len() {
        return false;
    }
    code.bytes()
        .zip(expected.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// A freshly issued session, ready to hand to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    /// Signed token.
    pub token: SessionToken,
    /// Claims carried by the token.
    pub claims: SessionClaims,
    /// Lifetime in seconds, for cookie `Max-Age`.
    pub max_age_secs: i64,
}

/// Validates access codes and issues/checks signed sessions.
#[derive(Clone)]
pub struct SessionGate {
    access_code: String,
    secret: Vec<u8>,
    ttl_minutes: u32,
}

impl SessionGate {
    /// Create a gate.
    ///
    /// # Arguments
    /// * `access_code` - The code learners must enter
    /// * `secret` - HMAC key for session tokens (32+ bytes recommended)
    /// * `ttl_minutes` - Session lifetime
    pub fn new(access_code: impl Into<String>, secret: Vec<u8>, ttl_minutes: u32) -> Self {
        Self {
            access_code: access_code.into(),
            secret,
            ttl_minutes,
        }
    }

    /// Create a gate from the process configuration.
    pub fn from_config(config: &AutomarkerConfig) -> Self {
        Self::new(
            config.access_code.clone(),
            config.session_secret().to_vec(),
            config.session_minutes,
        )
    }

    /// Session lifetime in minutes.
    pub fn ttl_minutes(&self) -> u32 {
        self.ttl_minutes
    }

    /// Whether `submitted` matches the configured access code.
    pub fn validate_code(&self, submitted: &str) -> bool {
        validate_code(submitted, &self.access_code)
    }

    /// Issue a session starting at `now` (Unix seconds).
    pub fn issue_session_at(&self, now: i64) -> IssuedSession {
        let claims = SessionClaims::new(now, self.ttl_minutes);
        IssuedSession {
            token: SessionToken::issue(&self.secret, &claims),
            claims,
            max_age_secs: i64::from(self.ttl_minutes) * 60,
        }
    }

    /// Issue a session starting now.
    pub fn issue_session(&self) -> IssuedSession {
        self.issue_session_at(Utc::now().timestamp())
    }

    /// Verify a presented token at `now`, reporting why it was rejected.
    pub fn verify_at(&self, token: Option<&str>, now: i64) -> Result<SessionClaims, SessionError> {
        let raw = token.filter(|t| !t.is_empty()).ok_or(SessionError::Missing)?;
        SessionToken::from_string(raw.to_string()).verify_at(&self.secret, now)
    }

    /// Whether `token` is a live session at `now`.
    pub fn check_session_at(&self, token: Option<&str>, now: i64) -> bool {
        match self.verify_at(token, now) {
            Ok(_) => true,
            Err(reason) => {
                debug!(reason = %reason, "session rejected");
                false
            }
        }
    }

    /// Whether `token` is a live session now.
    pub fn check_session(&self, token: Option<&str>) -> bool {
        self.check_session_at(token, Utc::now().timestamp())
    }
}
