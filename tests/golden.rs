//! Golden tests for the marking engine.
//!
//! These pin the exact output for representative answers so that any change
//! to wording, ordering, or scoring shows up as a failure.

use prompt_automarker::content::{LEARN_MORE_TEXT, MODEL_ANSWER};
use prompt_automarker::rubric::feedback::ENCOURAGEMENT;
use prompt_automarker::rubric::scoring::{EXCELLENT_MESSAGE, GOOD_MESSAGE, NEEDS_IMPROVEMENT_MESSAGE};
use prompt_automarker::{
    Criterion, CriterionDetector, MarkResult, MarkingEngine, TagStatus, GATE_MESSAGE,
};

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// 25 words, every criterion present.
const TRAVEL_PLANNER: &str = "Please act as a travel planner and write a 3-day itinerary \
    for my team in London. Use bullet points and keep each day short please.";

/// 19 words, role and task present.
const SHORT_ROLE_AND_TASK: &str = "Act as a tutor and write a plan for me about spreadsheets \
    so I can learn the basics quickly";

/// 22 words, task only.
const TASK_ONLY: &str = "Please write a short summary of the attached spreadsheet data \
    so that the main problems with overdue work are easy to spot.";

/// 21 words, role, task and format present.
const THREE_CRITERIA: &str = "Act as a careful reviewer. Write feedback on my essay draft \
    and use bullet points. Keep it short and clear please.";

fn mark(text: &str) -> MarkResult {
    MarkingEngine::new().mark(text)
}

fn tag_statuses(result: &MarkResult) -> Vec<TagStatus> {
    result.tags().unwrap().iter().map(|t| t.status).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_travel_planner_scores_ten() {
    let result = mark(TRAVEL_PLANNER);

    assert!(!result.is_gated());
    assert_eq!(result.word_count(), 25);
    assert_eq!(result.score(), Some(10));
    assert_eq!(result.message(), EXCELLENT_MESSAGE);
    assert_eq!(tag_statuses(&result), vec![TagStatus::Ok; 4]);
    assert_eq!(result.model_answer(), Some(MODEL_ANSWER));
    assert_eq!(result.learn_more_text(), Some(LEARN_MORE_TEXT));
}

#[test]
fn test_travel_planner_strengths_truncated() {
    let result = mark(TRAVEL_PLANNER);
    assert_eq!(
        result.strengths().unwrap(),
        &[
            "You clearly set a role for the AI.".to_string(),
            "You specify what you want the AI to do.".to_string(),
            "You include context about who/what the plan is for.".to_string(),
        ]
    );
}

#[test]
fn test_nineteen_words_gated() {
    let result = mark(SHORT_ROLE_AND_TASK);

    assert_eq!(result.word_count(), 19);
    assert!(result.is_gated());
    assert!(result.message().starts_with("Please add to your answer."));
    assert_eq!(result.message(), GATE_MESSAGE);
    assert!(result.score().is_none());
    assert!(result.model_answer().is_none());
}

#[test]
fn test_gated_json_has_only_nulls_for_rubric() {
    let json = serde_json::to_value(mark(SHORT_ROLE_AND_TASK)).unwrap();
    assert_eq!(json["gated"], true);
    assert_eq!(json["wordCount"], 19);
    for field in ["score", "strengths", "tags", "grid", "learnMoreText", "modelAnswer"] {
        assert!(json[field].is_null(), "{} leaked below the gate", field);
    }
}

#[test]
fn test_task_only_needs_improvement() {
    let detection = CriterionDetector::default().detect(TASK_ONLY);
    assert_eq!(detection.present_count(), 1);
    assert!(detection.is_present(Criterion::Task));

    let result = mark(TASK_ONLY);
    assert_eq!(result.word_count(), 22);
    assert_eq!(result.score(), Some(4));
    assert_eq!(result.message(), NEEDS_IMPROVEMENT_MESSAGE);
    assert_eq!(
        result.strengths().unwrap(),
        &[
            "You specify what you want the AI to do.".to_string(),
            ENCOURAGEMENT.to_string(),
        ]
    );
    assert_eq!(
        tag_statuses(&result),
        vec![TagStatus::Bad, TagStatus::Ok, TagStatus::Bad, TagStatus::Bad]
    );
}

#[test]
fn test_three_criteria_scores_eight() {
    let result = mark(THREE_CRITERIA);

    assert_eq!(result.score(), Some(8));
    assert_eq!(result.message(), GOOD_MESSAGE);
    assert_eq!(
        tag_statuses(&result),
        vec![TagStatus::Ok, TagStatus::Ok, TagStatus::Bad, TagStatus::Ok]
    );

    let grid = result.grid().unwrap();
    assert_eq!(grid[2].label, "Context");
    assert_eq!(grid[2].status, "✗ Missing");
    assert_eq!(grid[2].detail, "Add who it’s for / when / where / constraints.");
}

#[test]
fn test_model_answer_is_attached_even_at_minimum_score() {
    let result = mark(TASK_ONLY);
    assert_eq!(result.model_answer(), Some(MODEL_ANSWER));
}

#[test]
fn test_grid_labels_in_fixed_order() {
    let result = mark(TRAVEL_PLANNER);
    let labels: Vec<_> = result.grid().unwrap().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Role", "Task", "Context", "Format"]);
    assert!(result.grid().unwrap().iter().all(|r| r.status == "✓ Secure"));
}

#[test]
fn test_marking_is_idempotent() {
    let engine = MarkingEngine::new();
    for text in [TRAVEL_PLANNER, SHORT_ROLE_AND_TASK, TASK_ONLY, THREE_CRITERIA, ""] {
        assert_eq!(engine.mark(text), engine.mark(text));
    }
}

#[test]
fn test_word_count_examples() {
    use prompt_automarker::word_count;
    assert_eq!(word_count("   "), 0);
    assert_eq!(word_count("a  b   c"), 3);
    assert_eq!(word_count(""), 0);
}
