// rotewall/src/detectors/mod.rs
//
// The eight memorization heuristics plus the anti-cheat marker matcher.
// Each detector is a pure function over the submission context: it returns
// no signal when its trigger condition is not met and never fails on
// well-formed input. `run_all` evaluates them in a fixed order; that order
// is stable for display but carries no semantic weight.

pub mod catchphrase;
pub mod complexity;
pub mod instant_optimal;
pub mod markers;
pub mod name_drop;
pub mod personal_reasoning;
pub mod template_wording;
pub mod tradeoffs;
pub mod vocabulary;

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{DetectionConfig, DetectionSignal, MemorizationContext};

/// Run every detector and collect the signals that fired.
pub fn run_all(ctx: &MemorizationContext, cfg: &DetectionConfig) -> Vec<DetectionSignal> {
    let mut signals = Vec::new();
    signals.extend(template_wording::analyze(&ctx.response_text));
    signals.extend(catchphrase::analyze(ctx, cfg));
    signals.extend(personal_reasoning::analyze(&ctx.response_text));
    signals.extend(instant_optimal::analyze(ctx));
    signals.extend(tradeoffs::analyze(&ctx.response_text));
    signals.extend(name_drop::analyze(ctx));
    signals.extend(complexity::analyze(&ctx.response_text));
    signals.extend(vocabulary::analyze(ctx));
    signals.extend(markers::analyze(ctx));
    signals
}

static BIG_O: OnceLock<Regex> = OnceLock::new();

/// Matches Big-O complexity expressions: O(n), O(n log n), O(n^2), O(1).
pub(crate) fn big_o_regex() -> &'static Regex {
    BIG_O.get_or_init(|| {
        Regex::new(r"(?i)\bo\([^()]{1,40}\)").expect("big-o regex is static")
    })
}

/// Non-overlapping occurrences of any keyword (case-insensitive).
pub(crate) fn keyword_count(text: &str, keywords: &[&str]) -> usize {
    let lower = text.to_lowercase();
    keywords.iter().map(|kw| lower.matches(kw).count()).sum()
}
