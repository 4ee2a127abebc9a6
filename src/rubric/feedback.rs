//! Feedback assembly: strengths, tags, and grid rows.

use crate::types::{Criterion, GridRow, Tag, TagStatus};

use super::rules::Detection;

/// Maximum number of strength sentences returned.
pub const MAX_STRENGTHS: usize = 3;

/// Strength lists shorter than this get the encouragement sentence appended.
pub const MIN_STRENGTHS_BEFORE_ENCOURAGEMENT: usize = 2;

/// Appended when fewer than two criteria contributed a strength.
pub const ENCOURAGEMENT: &str =
    "You’ve started shaping the prompt — add the missing stages for more control.";

/// Grid status for a detected criterion.
pub const SECURE_STATUS: &str = "✓ Secure";

/// Grid status for a missing criterion.
pub const MISSING_STATUS: &str = "✗ Missing";

/// Strength sentence credited when `criterion` is present.
pub fn strength_sentence(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Role => "You clearly set a role for the AI.",
        Criterion::Task => "You specify what you want the AI to do.",
        Criterion::Context => "You include context about who/what the plan is for.",
        Criterion::Format => "You set useful formatting constraints for the output.",
    }
}

/// Grid detail for `criterion` given whether it was detected.
pub fn grid_detail(criterion: Criterion, present: bool) -> &'static str {
    match (criterion, present) {
        (Criterion::Role, true) => "Role is present.",
        (Criterion::Role, false) => "Add a role (e.g., tour guide / travel planner).",
        (Criterion::Task, true) => "Task is present.",
        (Criterion::Task, false) => "State what you want AI to produce.",
        (Criterion::Context, true) => "Context is present.",
        (Criterion::Context, false) => "Add who it’s for / when / where / constraints.",
        (Criterion::Format, true) => "Format constraints are present.",
        (Criterion::Format, false) => "Add format details (bullets, costs, distances, timing, tone).",
    }
}

/// Strength sentences in criterion order, padded with encouragement and
/// capped at [`MAX_STRENGTHS`].
///
/// Truncation runs after padding, so with three or more criteria present the
/// encouragement is never reached, and with four present the Format sentence
/// is dropped.
pub fn build_strengths(detection: &Detection) -> Vec<String> {
    let mut strengths: Vec<String> = detection
        .iter()
        .filter(|&(_, present)| present)
        .map(|(criterion, _)| strength_sentence(criterion).to_string())
        .collect();

    if strengths.len() < MIN_STRENGTHS_BEFORE_ENCOURAGEMENT {
        strengths.push(ENCOURAGEMENT.to_string());
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

/// One tag per criterion, in criterion order.
pub fn build_tags(detection: &Detection) -> Vec<Tag> {
    detection
        .iter()
        .map(|(criterion, present)| Tag {
            label: criterion.label().to_string(),
            status: TagStatus::from_present(present),
        })
        .collect()
}

/// One grid row per criterion, in criterion order.
pub fn build_grid(detection: &Detection) -> Vec<GridRow> {
    detection
        .iter()
        .map(|(criterion, present)| GridRow {
            label: criterion.label().to_string(),
            status: if present { SECURE_STATUS } else { MISSING_STATUS }.to_string(),
            detail: grid_detail(criterion, present).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strengths_none_present() {
        let strengths = build_strengths(&Detection::default());
        assert_eq!(strengths, vec![ENCOURAGEMENT.to_string()]);
    }

    #[test]
    fn test_strengths_one_present_gets_encouragement() {
        let d = Detection::from_flags(false, true, false, false);
        let strengths = build_strengths(&d);
        assert_eq!(strengths.len(), 2);
        assert_eq!(strengths[0], strength_sentence(Criterion::Task));
        assert_eq!(strengths[1], ENCOURAGEMENT);
    }

    #[test]
    fn test_strengths_two_present_no_encouragement() {
        let d = Detection::from_flags(true, false, false, true);
        let strengths = build_strengths(&d);
        assert_eq!(
            strengths,
            vec![
                strength_sentence(Criterion::Role).to_string(),
                strength_sentence(Criterion::Format).to_string(),
            ]
        );
    }

    #[test]
    fn test_strengths_all_present_truncated_to_three() {
        let d = Detection::from_flags(true, true, true, true);
        let strengths = build_strengths(&d);
        assert_eq!(strengths.len(), MAX_STRENGTHS);
        assert_eq!(strengths[2], strength_sentence(Criterion::Context));
        assert!(!strengths.contains(&strength_sentence(Criterion::Format).to_string()));
    }

    #[test]
    fn test_tags_fixed_order_and_status() {
        let d = Detection::from_flags(true, false, true, false);
        let tags = build_tags(&d);
        let pairs: Vec<_> = tags.iter().map(|t| (t.label.as_str(), t.status)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Role", TagStatus::Ok),
                ("Task", TagStatus::Bad),
                ("Context", TagStatus::Ok),
                ("Format", TagStatus::Bad),
            ]
        );
    }

    #[test]
    fn test_tags_never_mid() {
        for bits in 0u8..16 {
            let d = Detection::from_flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            assert!(build_tags(&d).iter().all(|t| t.status != TagStatus::Mid));
        }
    }

    #[test]
    fn test_grid_rows() {
        let d = Detection::from_flags(false, true, false, true);
        let grid = build_grid(&d);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].status, MISSING_STATUS);
        assert_eq!(grid[0].detail, "Add a role (e.g., tour guide / travel planner).");
        assert_eq!(grid[1].status, SECURE_STATUS);
        assert_eq!(grid[1].detail, "Task is present.");
        assert_eq!(grid[3].detail, "Format constraints are present.");
    }
}
