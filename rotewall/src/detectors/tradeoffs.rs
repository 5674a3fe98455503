// rotewall/src/detectors/tradeoffs.rs
//
// Missing-tradeoff detector. A substantial answer that states a Big-O bound
// without weighing anything against anything — no however, no versus, no
// downside — has skipped the part of the analysis that can't be copied.

use crate::detectors::big_o_regex;
use crate::types::{DetectionSignal, SignalKind};

const TRADEOFF_WORDS: &[&str] = &[
    "however",
    "although",
    "tradeoff",
    "trade-off",
    "versus",
    "downside",
    "drawback",
    "on the other hand",
    "alternatively",
    "instead",
];

const MIN_RESPONSE_CHARS: usize = 200;

pub fn analyze(text: &str) -> Option<DetectionSignal> {
    if !big_o_regex().is_match(text) {
        return None;
    }
    if text.chars().count() <= MIN_RESPONSE_CHARS {
        return None;
    }
    let lower = text.to_lowercase();
    if TRADEOFF_WORDS.iter().any(|w| lower.contains(w)) {
        return None;
    }
    Some(DetectionSignal::new(
        SignalKind::MissingTradeoffs,
        0.35,
        "complexity stated with no tradeoff discussion",
    ))
}
