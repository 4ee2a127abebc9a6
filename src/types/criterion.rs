//! Rubric criteria and the per-criterion presentation rows.

use std::fmt;
use serde::{Deserialize, Serialize};

/// One of the four rubric dimensions of a well-formed prompt.
///
/// Declaration order is the fixed presentation order: every list derived
/// from criteria (strengths, tags, grid rows) follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    /// Who the AI should be, or who the writer is.
    Role,
    /// What the AI is asked to produce.
    Task,
    /// Audience, setting, and constraints of the request.
    Context,
    /// How the answer should be structured or presented.
    Format,
}

impl Criterion {
    /// All criteria in presentation order.
    pub const ALL: [Criterion; 4] = [
        Criterion::Role,
        Criterion::Task,
        Criterion::Context,
        Criterion::Format,
    ];

    /// Human-readable label used in tags and grid rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::Task => "Task",
            Self::Context => "Context",
            Self::Format => "Format",
        }
    }

    /// Position in [`Criterion::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Role => 0,
            Self::Task => 1,
            Self::Context => 2,
            Self::Format => 3,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of a criterion tag as understood by the presentation layer.
///
/// `Mid` is part of the front end's vocabulary but the marking engine only
/// ever emits `Ok` or `Bad`. There is no partial-credit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    /// Criterion detected.
    Ok,
    /// Reserved. Never produced by the engine.
    Mid,
    /// Criterion not detected.
    Bad,
}

impl TagStatus {
    /// Map a detection outcome onto a tag status.
    pub fn from_present(present: bool) -> Self {
        if present {
            Self::Ok
        } else {
            Self::Bad
        }
    }
}

/// Compact per-criterion badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Criterion label.
    pub label: String,
    /// Whether the criterion was detected.
    pub status: TagStatus,
}

/// One row of the feedback grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Criterion label.
    pub label: String,
    /// `"✓ Secure"` or `"✗ Missing"`.
    pub status: String,
    /// Guidance specific to the criterion and its outcome.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_presentation_order() {
        let labels: Vec<_> = Criterion::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Role", "Task", "Context", "Format"]);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, criterion) in Criterion::ALL.iter().enumerate() {
            assert_eq!(criterion.index(), i);
        }
    }

    #[test]
    fn test_tag_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TagStatus::Ok).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&TagStatus::Mid).unwrap(), "\"mid\"");
        assert_eq!(serde_json::to_string(&TagStatus::Bad).unwrap(), "\"bad\"");
    }

    #[test]
    fn test_tag_status_from_present() {
        assert_eq!(TagStatus::from_present(true), TagStatus::Ok);
        assert_eq!(TagStatus::from_present(false), TagStatus::Bad);
    }
}
