// rotewall/src/types.rs
//
// All domain types flowing through the detection pipeline: the submission
// context supplied by the session orchestrator, the signals emitted by the
// detectors, and the verdict handed back to the caller.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Detection signals ─────────────────────────────────────────────────────────

/// Which detector heuristic produced a signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    // Template / structure
    StepListFormat,     // numbered "Step 1: ..." editorial scaffolding
    SequentialTemplate, // "First... Then... Finally..." write-up cadence
    // Phrase-level
    EditorialPhrase, // known editorial catchphrase matched
    AntiCheatMarker, // problem-specific marker string matched
    // Reasoning-shape
    NoPersonalReasoning,  // long answer, zero first-person reasoning
    InstantOptimal,       // jumps to the optimal on the first attempt
    MissingTradeoffs,     // complexity stated, no alternatives weighed
    PatternNameDrop,      // names the pattern without connecting it to the problem
    ComplexityRecitation, // Big-O recited without derivation
    VocabularyMismatch,   // register jump versus the learner's own history
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepListFormat => write!(f, "step_list_format"),
            Self::SequentialTemplate => write!(f, "sequential_template"),
            Self::EditorialPhrase => write!(f, "editorial_phrase"),
            Self::AntiCheatMarker => write!(f, "anti_cheat_marker"),
            Self::NoPersonalReasoning => write!(f, "no_personal_reasoning"),
            Self::InstantOptimal => write!(f, "instant_optimal"),
            Self::MissingTradeoffs => write!(f, "missing_tradeoffs"),
            Self::PatternNameDrop => write!(f, "pattern_name_drop"),
            Self::ComplexityRecitation => write!(f, "complexity_recitation"),
            Self::VocabularyMismatch => write!(f, "vocabulary_mismatch"),
        }
    }
}

/// One fired heuristic. Created by a detector, consumed by the classifier,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSignal {
    pub kind: SignalKind,
    /// Detector-assigned confidence, 0.0–1.0.
    pub confidence: f32,
    /// Human-readable description of what fired.
    pub evidence: String,
    /// Matched substring, when the heuristic has one to show.
    pub excerpt: Option<String>,
}

impl DetectionSignal {
    pub fn new(kind: SignalKind, confidence: f32, evidence: impl Into<String>) -> Self {
        Self {
            kind,
            confidence,
            evidence: evidence.into(),
            excerpt: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

// ── Submission context ────────────────────────────────────────────────────────

/// Everything the session orchestrator knows about one submission.
/// Constructed per submission; immutable for the duration of one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorizationContext {
    pub response_text: String,
    /// Coaching stage the learner is in (e.g. "pattern_recognition").
    pub stage: String,
    pub problem_id: String,
    /// Algorithmic pattern id the problem teaches (e.g. "sliding_window").
    pub pattern: String,
    /// Prior responses in this session, chronological, oldest first.
    #[serde(default)]
    pub previous_responses: Vec<String>,
    /// Current hint-ladder level, 1–5.
    #[serde(default = "default_help_level")]
    pub help_level: u8,
    /// Milliseconds between prompt display and submission.
    /// i64 to match `chrono::Duration::num_milliseconds`; validated >= 0.
    pub response_time_ms: i64,
    /// How many attempts the learner has made at the current stage.
    pub attempt_count: u32,
    /// Problem-specific marker strings from problem metadata.
    #[serde(default)]
    pub anti_cheat_markers: Option<Vec<String>>,
}

fn default_help_level() -> u8 {
    1
}

/// Context rejected before any detector ran. A caller bug, not a user error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("context field `{0}` must be a non-empty string")]
    EmptyField(&'static str),
    #[error("response_time_ms must be non-negative, got {0}")]
    NegativeResponseTime(i64),
}

impl MemorizationContext {
    /// Fail-fast structural validation. Runs before any detector.
    pub fn validate(&self) -> Result<(), ContextError> {
        if self.stage.trim().is_empty() {
            return Err(ContextError::EmptyField("stage"));
        }
        if self.problem_id.trim().is_empty() {
            return Err(ContextError::EmptyField("problem_id"));
        }
        if self.pattern.trim().is_empty() {
            return Err(ContextError::EmptyField("pattern"));
        }
        if self.response_time_ms < 0 {
            return Err(ContextError::NegativeResponseTime(self.response_time_ms));
        }
        Ok(())
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Category an editorial phrase belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    Solution,
    Pattern,
    Complexity,
    Approach,
}

/// One entry in the editorial phrase catalog: a literal string or a regex
/// source, with the confidence it contributes when matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorialPhrase {
    pub pattern: Cow<'static, str>,
    pub is_regex: bool,
    /// Confidence contribution when matched, 0.0–1.0.
    pub weight: f32,
    pub category: PhraseCategory,
}

impl EditorialPhrase {
    /// Literal (substring, case-insensitive) catalog entry.
    pub const fn literal(
        pattern: &'static str,
        weight: f32,
        category: PhraseCategory,
    ) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            is_regex: false,
            weight,
            category,
        }
    }

    /// Regex catalog entry — evaluated only through the safe_regex guards.
    pub const fn regex(pattern: &'static str, weight: f32, category: PhraseCategory) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            is_regex: true,
            weight,
            category,
        }
    }
}

/// Tunable thresholds. One process-wide default; callers may override per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Adjusted confidence at which a response is partially memorized.
    pub partial_threshold: f32,
    /// Adjusted confidence at which a response is likely memorized.
    pub likely_threshold: f32,
    /// Upper bound on generated Socratic reprompts.
    pub max_reprompts: usize,
    /// Reserved for an LLM-backed second pass; the deterministic path
    /// ignores it.
    pub use_llm_detection: bool,
    /// Extra editorial phrases from problem metadata.
    pub custom_phrases: Vec<EditorialPhrase>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            partial_threshold: 0.4,
            likely_threshold: 0.7,
            max_reprompts: 3,
            use_llm_detection: false,
            custom_phrases: Vec::new(),
        }
    }
}

// ── Verdict ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Authentic,
    PartiallyMemorized,
    LikelyMemorized,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentic => write!(f, "authentic"),
            Self::PartiallyMemorized => write!(f, "partially_memorized"),
            Self::LikelyMemorized => write!(f, "likely_memorized"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Accept the submission and move on.
    Continue,
    /// Push the learner back to the explain-it-simply checkpoint.
    ResetToFeynman,
    /// Push the learner back to strategy design.
    ResetToStrategy,
    /// Hold the submission and ask Socratic follow-ups.
    BlockAndReprompt,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "CONTINUE"),
            Self::ResetToFeynman => write!(f, "RESET_TO_FEYNMAN"),
            Self::ResetToStrategy => write!(f, "RESET_TO_STRATEGY"),
            Self::BlockAndReprompt => write!(f, "BLOCK_AND_REPROMPT"),
        }
    }
}

/// One Socratic follow-up question tied to a fired signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocraticReprompt {
    pub id: String,
    pub question: String,
    /// Why this question is being asked.
    pub purpose: String,
    /// Which piece of understanding it probes.
    pub target_concept: String,
}

/// Full verdict for one submission. Produced fresh per call; persistence is
/// the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub classification: Classification,
    /// Adjusted aggregate confidence, 0.0–1.0.
    pub confidence: f32,
    /// Every signal that fired, in detector evaluation order.
    pub signals: Vec<DetectionSignal>,
    pub action: Action,
    /// At most `max_reprompts` questions; non-empty only for BLOCK_AND_REPROMPT.
    pub reprompts: Vec<SocraticReprompt>,
    /// Hint-ladder level the caller should move to, 1–5.
    pub recommended_help_level: u8,
    /// One-paragraph human-readable summary.
    pub explanation: String,
}
