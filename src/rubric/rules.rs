//! Declarative keyword rules and the criterion detector.
//!
//! Each criterion maps to an ordered list of lower-case phrases. A criterion
//! is present when the normalized answer contains at least one of its
//! phrases as a substring. Criteria are evaluated independently: any subset,
//! including all four, may be present at once.
//!
//! Phrases are matched literally, so `"plan"` also matches `"planner"` and
//! `"as a "` requires the trailing space.

use serde::Serialize;
use tracing::debug;

use crate::canonical::canonical_hash_hex;
use crate::text::normalize_for_detection;
use crate::types::Criterion;

/// Phrases that signal a role was set.
pub const ROLE_PATTERNS: &[&str] = &["role:", "you are a", "act as", "as a "];

/// Phrases that signal a task was stated.
pub const TASK_PATTERNS: &[&str] = &[
    "task:", "give me", "create", "produce", "generate", "write", "build", "plan",
];

/// Phrases that signal audience or setting.
pub const CONTEXT_PATTERNS: &[&str] = &[
    "context:", "i am", "we are", "for me", "for a", "audience", "staff", "team",
    "colleagues", "workplace", "social", "event", "budget", "london",
    "accessibility", "dietary", "remote",
];

/// Phrases that signal output structure or constraints.
pub const FORMAT_PATTERNS: &[&str] = &[
    "format:", "bullet", "table", "include", "ensure", "constraints", "tone",
    "structure", "distance", "fees", "costs", "how long",
];

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionRule {
    /// Criterion this rule detects.
    pub criterion: Criterion,
    /// Lower-case phrases, any of which marks the criterion present.
    pub patterns: Vec<String>,
}

impl CriterionRule {
    /// Build a rule from a phrase list. Phrases are lower-cased.
    pub fn new<I, S>(criterion: Criterion, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            criterion,
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The first phrase found in `normalized`, if any.
    ///
    /// The criterion is present exactly when this returns `Some`.
    pub fn first_match(&self, normalized: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| normalized.contains(p.as_str()))
            .map(String::as_str)
    }
}

/// Criterion → phrase list table, one rule per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    rules: [CriterionRule; 4],
}

impl RuleTable {
    /// Build a table from one rule per criterion.
    ///
    /// Rules are stored in criterion order regardless of argument order.
    pub fn new(role: CriterionRule, task: CriterionRule, context: CriterionRule, format: CriterionRule) -> Self {
        let mut rules = [role, task, context, format];
        rules.sort_by_key(|r| r.criterion);
        Self { rules }
    }

    /// The rule for `criterion`.
    pub fn rule(&self, criterion: Criterion) -> &CriterionRule {
        &self.rules[criterion.index()]
    }

    /// All rules in criterion order.
    pub fn rules(&self) -> &[CriterionRule] {
        &self.rules
    }

    /// Stable fingerprint of the table contents.
    ///
    /// Changes whenever a phrase is added, removed, or reordered.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(&self.rules)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(
            CriterionRule::new(Criterion::Role, ROLE_PATTERNS),
            CriterionRule::new(Criterion::Task, TASK_PATTERNS),
            CriterionRule::new(Criterion::Context, CONTEXT_PATTERNS),
            CriterionRule::new(Criterion::Format, FORMAT_PATTERNS),
        )
    }
}

/// Outcome of running every rule against one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Detection {
    present: [bool; 4],
}

impl Detection {
    /// Build a detection from explicit per-criterion flags.
    pub fn from_flags(role: bool, task: bool, context: bool, format: bool) -> Self {
        Self {
            present: [role, task, context, format],
        }
    }

    /// Whether `criterion` was detected.
    pub fn is_present(&self, criterion: Criterion) -> bool {
        self.present[criterion.index()]
    }

    /// Number of detected criteria, 0 to 4.
    pub fn present_count(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// `(criterion, present)` pairs in criterion order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.is_present(c)))
    }
}

/// Evaluates the rule table against answer text.
#[derive(Debug, Clone, Default)]
pub struct CriterionDetector {
    table: RuleTable,
}

impl CriterionDetector {
    /// Create a detector over a custom rule table.
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// The rule table in use.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Detect criteria in raw answer text.
    pub fn detect(&self, text: &str) -> Detection {
        self.detect_normalized(&normalize_for_detection(text))
    }

    /// Detect criteria in text that is already trimmed and lower-cased.
    pub fn detect_normalized(&self, normalized: &str) -> Detection {
        let mut present = [false; 4];
        for rule in self.table.rules() {
            let phrase = rule.first_match(normalized);
            debug!(criterion = %rule.criterion, phrase = ?phrase, "criterion checked");
            present[rule.criterion.index()] = phrase.is_some();
        }
        Detection { present }
    }
}
