// rotewall/src/lib.rs
//
// Rotewall — memorization and editorial-copy detection for coding-practice
// submissions.
//
// A session orchestrator hands each learner submission to
// `detect_memorization` as a `MemorizationContext`. Eight independent
// heuristics (plus a per-problem marker matcher) each inspect the response
// and emit at most one signal apiece; the classifier sums, halves and
// discounts the fired confidences into a three-way verdict; the policy layer
// turns the verdict into a coaching action, Socratic follow-up questions and
// a hint-ladder recommendation.
//
// The whole pipeline is synchronous, deterministic and free of shared state:
// concurrent grading requests need no coordination.

pub mod detectors;
pub mod engine;
pub mod eval;
pub mod phrasebook;
pub mod safe_regex;
pub mod types;

pub use engine::classifier::detect_memorization;
pub use types::{
    Action, Classification, ContextError, DetectionConfig, DetectionResult, DetectionSignal,
    EditorialPhrase, MemorizationContext, PhraseCategory, SignalKind, SocraticReprompt,
};
