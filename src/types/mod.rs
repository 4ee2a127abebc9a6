//! Core types for the automarker.

pub mod criterion;
pub mod result;
pub mod session;

pub use criterion::{Criterion, TagStatus, Tag, GridRow};
pub use result::{MarkResult, ScoredFeedback};
pub use session::{SessionClaims, SessionToken, SessionError};
