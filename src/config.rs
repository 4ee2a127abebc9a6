//! Process-wide automarker configuration.
//!
//! Loaded once at startup from the environment and never mutated afterwards.
//! The service shares it behind an `Arc`.
//!
//! ## Environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ACCESS_CODE` | `ROME-PROMPT-01` |
//! | `COOKIE_SECRET` | random per process |
//! | `SESSION_MINUTES` | `60` |
//! | `COURSE_BACK_URL` / `BACK_URL` | empty |
//! | `NEXT_LESSON_URL` | empty |
//!
//! Without `COOKIE_SECRET` every process signs with its own random key:
//! sessions die on restart and are not honoured by sibling instances.

use std::fmt;

use tracing::{info, warn};

/// Access code used when `ACCESS_CODE` is unset.
pub const DEFAULT_ACCESS_CODE: &str = "ROME-PROMPT-01";

/// Session lifetime used when `SESSION_MINUTES` is unset.
pub const DEFAULT_SESSION_MINUTES: u32 = 60;

/// Length of a generated signing secret in bytes.
pub const GENERATED_SECRET_LEN: usize = 32;

/// Configuration errors, all raised at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `SESSION_MINUTES` is not a positive integer.
    #[error("SESSION_MINUTES must be a positive integer, got {0:?}")]
    InvalidSessionMinutes(String),

    /// `ACCESS_CODE` is set but blank.
    #[error("ACCESS_CODE must not be blank")]
    EmptyAccessCode,
}

/// Where the signing secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Supplied via `COOKIE_SECRET`.
    Environment,
    /// Generated at startup; sessions are not portable.
    Generated,
}

/// Immutable automarker configuration.
#[derive(Clone)]
pub struct AutomarkerConfig {
    /// Expected access code, compared case-sensitively.
    pub access_code: String,
    /// Session lifetime in minutes.
    pub session_minutes: u32,
    /// Link back to the course page.
    pub course_back_url: String,
    /// Link to the next lesson.
    pub next_lesson_url: String,
    session_secret: Vec<u8>,
    secret_source: SecretSource,
}

impl AutomarkerConfig {
    /// Build a configuration with an explicit secret.
    pub fn new(access_code: impl Into<String>, session_secret: Vec<u8>, session_minutes: u32) -> Self {
        Self {
            access_code: access_code.into(),
            session_minutes,
            course_back_url: String::new(),
            next_lesson_url: String::new(),
            session_secret,
            secret_source: SecretSource::Environment,
        }
    }

    /// Set the navigation links shown by the front end.
    pub fn with_links(mut self, course_back_url: impl Into<String>, next_lesson_url: impl Into<String>) -> Self {
        self.course_back_url = course_back_url.into();
        self.next_lesson_url = next_lesson_url.into();
        self
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_code = match lookup("ACCESS_CODE") {
            Some(code) if code.trim().is_empty() => return Err(ConfigError::EmptyAccessCode),
            Some(code) => code,
            None => DEFAULT_ACCESS_CODE.to_string(),
        };

        let session_minutes = match lookup("SESSION_MINUTES") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => return Err(ConfigError::InvalidSessionMinutes(raw)),
            },
            None => DEFAULT_SESSION_MINUTES,
        };

        let (session_secret, secret_source) = match lookup("COOKIE_SECRET") {
            Some(secret) if !secret.is_empty() => {
                info!("session secret loaded from environment");
                (secret.into_bytes(), SecretSource::Environment)
            }
            _ => {
                warn!(
                    "COOKIE_SECRET not set. Using a random per-process secret; \
                     sessions will not survive restarts or span instances"
                );
                (generate_secret(), SecretSource::Generated)
            }
        };

        let course_back_url = lookup("COURSE_BACK_URL")
            .or_else(|| lookup("BACK_URL"))
            .unwrap_or_default();
        let next_lesson_url = lookup("NEXT_LESSON_URL").unwrap_or_default();

        Ok(Self {
            access_code,
            session_minutes,
            course_back_url,
            next_lesson_url,
            session_secret,
            secret_source,
        })
    }

    /// The HMAC secret for session tokens.
    pub(crate) fn session_secret(&self) -> &[u8] {
        &self.session_secret
    }

    /// Where the signing secret came from.
    pub fn secret_source(&self) -> SecretSource {
        self.secret_source
    }
}

impl fmt::Debug for AutomarkerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutomarkerConfig")
            .field("access_code", &"<redacted>")
            .field("session_minutes", &self.session_minutes)
            .field("course_back_url", &self.course_back_url)
            .field("next_lesson_url", &self.next_lesson_url)
            .field("session_secret", &"<redacted>")
            .field("secret_source", &self.secret_source)
            .finish()
    }
}

fn generate_secret() -> Vec<u8> {
    rand::random::<[u8; GENERATED_SECRET_LEN]>().to_vec()
}
