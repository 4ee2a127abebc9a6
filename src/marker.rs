//! Deterministic marking engine.
//!
//! Turns one answer into one [`MarkResult`] in a single pass. There is no
//! state between calls: the same text always yields the same result.

use tracing::debug;

use crate::content::{LEARN_MORE_TEXT, MODEL_ANSWER};
use crate::rubric::{
    build_grid, build_strengths, build_tags, score_for_count, CriterionDetector, Detection, Tier,
};
use crate::text::word_count;
use crate::types::{MarkResult, ScoredFeedback};

/// Answers with fewer words than this are gated.
pub const MIN_WORDS_GATE: usize = 20;

/// Message returned for gated answers.
pub const GATE_MESSAGE: &str = concat!(
    "Please add to your answer.\n",
    "This response is too short to demonstrate the full prompt structure.\n",
    "Aim for at least 20 words and include: role, task, context, and format."
);

/// Marks answers against the rubric.
///
/// ## Algorithm
///
/// 1. Count words; below [`MIN_WORDS_GATE`] return a gated result
/// 2. Detect the four criteria
/// 3. Map the detected count to a score and a tier message
/// 4. Assemble strengths, tags, grid and the static payloads
#[derive(Debug, Clone)]
pub struct MarkingEngine {
    detector: CriterionDetector,
}

impl MarkingEngine {
    /// Create an engine with the default rubric and word gate.
    pub fn new() -> Self {
        Self::with_detector(CriterionDetector::default())
    }

    /// Create an engine over a custom detector.
    pub fn with_detector(detector: CriterionDetector) -> Self {
        Self { detector }
    }

    /// The detector in use.
    pub fn detector(&self) -> &CriterionDetector {
        &self.detector
    }

    /// Mark an answer.
    pub fn mark(&self, answer: &str) -> MarkResult {
        let words = word_count(answer);

        // Nothing rubric-related may be computed into the result below the gate.
        if words < MIN_WORDS_GATE {
            debug!(word_count = words, "answer gated");
            return MarkResult::gated(words, GATE_MESSAGE);
        }

        let detection = self.detector.detect(answer);
        MarkResult::scored(words, Self::feedback(&detection))
    }

    fn feedback(detection: &Detection) -> ScoredFeedback {
        let present_count = detection.present_count();
        ScoredFeedback {
            score: score_for_count(present_count),
            message: Tier::for_count(present_count).message().to_string(),
            strengths: build_strengths(detection),
            tags: build_tags(detection),
            grid: build_grid(detection),
            learn_more_text: LEARN_MORE_TEXT.to_string(),
            model_answer: MODEL_ANSWER.to_string(),
        }
    }
}

impl Default for MarkingEngine {
    fn default() -> Self {
        Self::new()
    }
}
