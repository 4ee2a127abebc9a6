//! The Role / Task / Context / Format rubric.

pub mod feedback;
pub mod rules;
pub mod scoring;

pub use feedback::{build_grid, build_strengths, build_tags};
pub use rules::{CriterionDetector, CriterionRule, Detection, RuleTable};
pub use scoring::{score_for_count, Tier};
