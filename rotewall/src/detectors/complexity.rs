// rotewall/src/detectors/complexity.rs
//
// Complexity-recitation detector. "O(n log n) time, O(1) space" with no
// derivation language anywhere in the answer is a recited bound. Someone
// who derived it says what the n counts and where the log comes from.

use crate::detectors::big_o_regex;
use crate::types::{DetectionSignal, SignalKind};

const DERIVATION_WORDS: &[&str] = &[
    "because",
    "since",
    "iterate",
    "iteration",
    "each element",
    "per element",
    "every element",
    "amortized",
    "dominates",
    "loop",
    "visit",
    "pass over",
    "halv",
];

pub fn analyze(text: &str) -> Option<DetectionSignal> {
    let bound = big_o_regex().find(text)?;

    let lower = text.to_lowercase();
    if DERIVATION_WORDS.iter().any(|w| lower.contains(w)) {
        return None;
    }
    Some(
        DetectionSignal::new(
            SignalKind::ComplexityRecitation,
            0.35,
            "complexity bound stated without derivation",
        )
        .with_excerpt(bound.as_str().to_string()),
    )
}
