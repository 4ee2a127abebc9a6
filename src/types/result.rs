//! The single output value of the marking engine.
//!
//! A `MarkResult` is either **gated** or **scored**:
//!
//! - Gated: only `gated`, `wordCount` and `message` carry values. Every
//!   rubric field serializes as `null`. Nothing that hints at correctness,
//!   partial credit, or the model answer may leak below the word gate.
//! - Scored: every field is populated.
//!
//! Fields are private and the only constructors are [`MarkResult::gated`]
//! and [`MarkResult::scored`], so a half-populated result cannot be built.

use serde::Serialize;

use super::criterion::{GridRow, Tag};

/// Populated rubric feedback for an answer that cleared the word gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredFeedback {
    /// Rubric score in {4, 6, 8, 10}.
    pub score: u8,
    /// Tiered summary message.
    pub message: String,
    /// At most three strength sentences, in criterion order.
    pub strengths: Vec<String>,
    /// Exactly four tags, one per criterion.
    pub tags: Vec<Tag>,
    /// Exactly four grid rows, one per criterion.
    pub grid: Vec<GridRow>,
    /// Static guidance on writing good prompts.
    pub learn_more_text: String,
    /// Static exemplar answer.
    pub model_answer: String,
}

/// Result of marking one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkResult {
    gated: bool,
    word_count: usize,
    message: String,
    score: Option<u8>,
    strengths: Option<Vec<String>>,
    tags: Option<Vec<Tag>>,
    grid: Option<Vec<GridRow>>,
    learn_more_text: Option<String>,
    model_answer: Option<String>,
}

impl MarkResult {
    /// Build a gated result carrying only the word count and message.
    pub fn gated(word_count: usize, message: impl Into<String>) -> Self {
        Self {
            gated: true,
            word_count,
            message: message.into(),
            score: None,
            strengths: None,
            tags: None,
            grid: None,
            learn_more_text: None,
            model_answer: None,
        }
    }

    /// Build a fully populated result.
    pub fn scored(word_count: usize, feedback: ScoredFeedback) -> Self {
        Self {
            gated: false,
            word_count,
            message: feedback.message,
            score: Some(feedback.score),
            strengths: Some(feedback.strengths),
            tags: Some(feedback.tags),
            grid: Some(feedback.grid),
            learn_more_text: Some(feedback.learn_more_text),
            model_answer: Some(feedback.model_answer),
        }
    }

    /// Whether the answer was below the word gate.
    pub fn is_gated(&self) -> bool {
        self.gated
    }

    /// Number of words in the marked answer.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Summary message (gate prompt or rubric tier).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Rubric score, absent when gated.
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// Strength sentences, absent when gated.
    pub fn strengths(&self) -> Option<&[String]> {
        self.strengths.as_deref()
    }

    /// Criterion tags, absent when gated.
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Feedback grid, absent when gated.
    pub fn grid(&self) -> Option<&[GridRow]> {
        self.grid.as_deref()
    }

    /// Learn-more passage, absent when gated.
    pub fn learn_more_text(&self) -> Option<&str> {
        self.learn_more_text.as_deref()
    }

    /// Model answer, absent when gated.
    pub fn model_answer(&self) -> Option<&str> {
        self.model_answer.as_deref()
    }
}
