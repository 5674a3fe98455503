// rotewall/src/detectors/catchphrase.rs
//
// Editorial catchphrase detector. Scans the active phrase catalog — the
// generic table, the table for the problem's pattern, and any custom
// phrases carried in problem metadata — against the response. Every
// matching phrase contributes its own signal at its configured weight.
//
// Regex-flagged phrases only ever run through the safe_regex guards;
// catalog content is author-supplied and treated as untrusted.

use crate::phrasebook;
use crate::safe_regex;
use crate::types::{
    DetectionConfig, DetectionSignal, EditorialPhrase, MemorizationContext, SignalKind,
};

fn match_phrase(phrase: &EditorialPhrase, text: &str) -> Option<String> {
    if phrase.is_regex {
        return safe_regex::safe_find(&phrase.pattern, text);
    }
    // Literal phrases go through the same guarded, case-insensitive matcher
    // with their metacharacters escaped. Matching happens on the original
    // text, so the excerpt is always the learner's own casing.
    safe_regex::safe_find(&regex::escape(&phrase.pattern), text)
}

pub fn analyze(ctx: &MemorizationContext, cfg: &DetectionConfig) -> Vec<DetectionSignal> {
    let mut signals = Vec::new();

    let catalog = phrasebook::phrases_for(&ctx.pattern).chain(cfg.custom_phrases.iter());
    for phrase in catalog {
        if let Some(excerpt) = match_phrase(phrase, &ctx.response_text) {
            signals.push(
                DetectionSignal::new(
                    SignalKind::EditorialPhrase,
                    phrase.weight,
                    format!(
                        "editorial {:?} phrase \"{}\"",
                        phrase.category, phrase.pattern
                    ),
                )
                .with_excerpt(excerpt),
            );
        }
    }

    signals
}
