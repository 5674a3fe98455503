// rotewall/src/detectors/instant_optimal.rs
//
// Jump-to-optimal detector. Organic problem solving explores: brute force
// first, then refinement. A first attempt that talks only about the optimal
// approach, with no mention of alternatives — especially a fast one — is a
// recall tell, not a reasoning tell.

use crate::detectors::keyword_count;
use crate::types::{DetectionSignal, MemorizationContext, SignalKind};

const OPTIMAL_WORDS: &[&str] = &["optimal", "best", "efficient"];
const EXPLORATION_WORDS: &[&str] = &[
    "alternative",
    "brute force",
    "brute-force",
    "naive",
    "simpler",
    "could also",
    "another way",
    "first try",
];

const FAST_RESPONSE_MS: i64 = 30_000;
const MIN_OPTIMAL_MENTIONS: usize = 2;

pub fn analyze(ctx: &MemorizationContext) -> Option<DetectionSignal> {
    if ctx.attempt_count != 1 {
        return None;
    }

    let optimal = keyword_count(&ctx.response_text, OPTIMAL_WORDS);
    let exploration = keyword_count(&ctx.response_text, EXPLORATION_WORDS);

    if optimal < MIN_OPTIMAL_MENTIONS || exploration > 0 {
        return None;
    }

    let confidence = if ctx.response_time_ms < FAST_RESPONSE_MS {
        0.6
    } else {
        0.4
    };
    Some(DetectionSignal::new(
        SignalKind::InstantOptimal,
        confidence,
        format!(
            "first attempt, {optimal} optimality mentions, no alternatives explored, {}ms",
            ctx.response_time_ms
        ),
    ))
}
