// rotewall/src/detectors/vocabulary.rs
//
// Register-jump detector. Compares the density of formal/academic
// connectives in the current response against the learner's own average
// over the session. A sudden jump of more than three markers over that
// baseline reads as pasted prose, not a vocabulary growth spurt.

use crate::phrasebook::count_formal_vocabulary;
use crate::types::{DetectionSignal, MemorizationContext, SignalKind};

const JUMP_THRESHOLD: f32 = 3.0;

pub fn analyze(ctx: &MemorizationContext) -> Option<DetectionSignal> {
    if ctx.previous_responses.is_empty() {
        return None;
    }

    let current = count_formal_vocabulary(&ctx.response_text) as f32;
    let total: usize = ctx
        .previous_responses
        .iter()
        .map(|r| count_formal_vocabulary(r))
        .sum();
    let baseline = total as f32 / ctx.previous_responses.len() as f32;

    if current > baseline + JUMP_THRESHOLD {
        return Some(DetectionSignal::new(
            SignalKind::VocabularyMismatch,
            0.4,
            format!(
                "{current:.0} formal-register markers vs session average {baseline:.1}"
            ),
        ));
    }
    None
}
