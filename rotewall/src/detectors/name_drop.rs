// rotewall/src/detectors/name_drop.rs
//
// Pattern name-drop detector. Naming the technique is fine; naming it with
// no connective tissue — no "because", no "fits", nothing linking it to the
// problem's characteristics — suggests the label was recalled, not chosen.
//
// The justification window is asymmetric: 50 chars before the alias, 100
// after, since justification usually follows the claim.

use crate::phrasebook::aliases_for;
use crate::types::{DetectionSignal, MemorizationContext, SignalKind};

const CONNECTIVE_WORDS: &[&str] = &[
    "because",
    "since",
    "fits",
    "applies",
    "works here",
    "suited",
    "matches",
    "the reason",
    "so that",
    "which lets",
];

const WINDOW_BEFORE: usize = 50;
const WINDOW_AFTER: usize = 100;

fn floor_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

pub fn analyze(ctx: &MemorizationContext) -> Option<DetectionSignal> {
    let lower = ctx.response_text.to_lowercase();

    // First alias that appears unjustified wins.
    for alias in aliases_for(&ctx.pattern) {
        let Some(pos) = lower.find(&alias) else {
            continue;
        };
        let start = floor_boundary(&lower, pos.saturating_sub(WINDOW_BEFORE));
        let end = ceil_boundary(&lower, (pos + alias.len() + WINDOW_AFTER).min(lower.len()));
        let window = &lower[start..end];

        if CONNECTIVE_WORDS.iter().any(|w| window.contains(w)) {
            continue;
        }
        return Some(
            DetectionSignal::new(
                SignalKind::PatternNameDrop,
                0.4,
                format!("\"{alias}\" named without justification nearby"),
            )
            .with_excerpt(alias),
        );
    }
    None
}
