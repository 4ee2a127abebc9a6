//! Score and message tiers.
//!
//! ```text
//! present_count : 0  1  2  3  4
//! score         : 4  4  6  8  10
//! tier          : N  N  G  G  E
//! ```
//!
//! The score depends only on how many criteria were detected, never on
//! which ones.

/// Lowest score awarded to any answer that clears the word gate.
pub const MIN_SCORE: u8 = 4;

/// Score for an answer with every criterion present.
pub const MAX_SCORE: u8 = 10;

/// Tier message for four detected criteria.
pub const EXCELLENT_MESSAGE: &str = "Excellent – you've followed the prompt formula.";

/// Tier message for two or three detected criteria.
pub const GOOD_MESSAGE: &str = "Good – try adding audience or tone to strengthen further.";

/// Tier message for zero or one detected criteria.
pub const NEEDS_IMPROVEMENT_MESSAGE: &str =
    "Needs improvement – use the formula: role, task, context, format.";

/// Feedback tier for a detection count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Zero or one criterion.
    NeedsImprovement,
    /// Two or three criteria.
    Good,
    /// All four criteria.
    Excellent,
}

impl Tier {
    /// Tier for `present_count` detected criteria.
    pub fn for_count(present_count: usize) -> Self {
        match present_count {
            4 => Self::Excellent,
            2 | 3 => Self::Good,
            _ => Self::NeedsImprovement,
        }
    }

    /// Message shown for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => EXCELLENT_MESSAGE,
            Self::Good => GOOD_MESSAGE,
            Self::NeedsImprovement => NEEDS_IMPROVEMENT_MESSAGE,
        }
    }
}

/// Rubric score for `present_count` detected criteria.
pub fn score_for_count(present_count: usize) -> u8 {
    match present_count {
        4 => 10,
        3 => 8,
        2 => 6,
        _ => MIN_SCORE,
    }
}
