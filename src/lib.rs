//! # prompt-automarker
//!
//! Deterministic, rule-based marking of short prompt-writing answers.
//!
//! The automarker answers one question:
//!
//! > Does this answer set a **role**, state a **task**, give **context**, and
//! > ask for a **format**?
//!
//! ## Core Contract
//!
//! 1. Answers under 20 words are gated: only a word count and a
//!    "please add to your answer" message come back
//! 2. Longer answers are checked against a fixed keyword table per criterion
//! 3. The number of criteria found maps to a score in {4, 6, 8, 10}
//!
//! Marking is reachable only with a live session, granted by entering the
//! shared access code and carried as an HMAC-signed expiring token.
//!
//! ## Architecture
//!
//! ```text
//! answer → SessionGate (token check) → MarkingEngine
//!                                         ├─ word_count
//!                                         └─ CriterionDetector (RuleTable)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same text → identical `MarkResult`
//! - Strengths, tags and grid rows always follow Role → Task → Context → Format
//! - No state is shared between requests except read-only configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod text;
pub mod rubric;
pub mod marker;
pub mod gate;
pub mod config;
pub mod content;
pub mod canonical;

#[cfg(feature = "service")]
pub mod service;

// Re-exports
pub use types::{
    Criterion, TagStatus, Tag, GridRow, MarkResult, ScoredFeedback,
    SessionClaims, SessionToken, SessionError,
};
pub use text::{word_count, normalize_for_detection, clamp_utf16, MAX_ANSWER_CHARS, MAX_CODE_CHARS};
pub use rubric::{CriterionDetector, CriterionRule, Detection, RuleTable, Tier, score_for_count};
pub use marker::{MarkingEngine, MIN_WORDS_GATE, GATE_MESSAGE};
pub use gate::{SessionGate, IssuedSession, validate_code};
pub use config::{AutomarkerConfig, ConfigError, SecretSource};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

#[cfg(feature = "service")]
pub use service::{create_router, ServiceState};
