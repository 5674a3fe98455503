// rotewall/src/detectors/personal_reasoning.rs
//
// Absence-of-voice detector. A learner working a problem out loud leaves
// first-person markers everywhere ("I think", "my first instinct", "maybe").
// A long answer with none of them reads like a transcript, not reasoning.

use crate::phrasebook::count_authentic_indicators;
use crate::types::{DetectionSignal, SignalKind};

const LONG_RESPONSE_WORDS: usize = 50;
const VERY_LONG_RESPONSE_WORDS: usize = 100;

pub fn analyze(text: &str) -> Option<DetectionSignal> {
    let word_count = text.split_whitespace().count();
    let indicators = count_authentic_indicators(text);

    if word_count >= LONG_RESPONSE_WORDS && indicators == 0 {
        return Some(DetectionSignal::new(
            SignalKind::NoPersonalReasoning,
            0.5,
            format!("{word_count} words with zero first-person reasoning markers"),
        ));
    }
    if word_count >= VERY_LONG_RESPONSE_WORDS && indicators <= 1 {
        return Some(DetectionSignal::new(
            SignalKind::NoPersonalReasoning,
            0.3,
            format!("{word_count} words with only {indicators} first-person reasoning marker"),
        ));
    }
    None
}
