// rotewall/src/engine/policy.rs
//
// State-free coaching policy: which action a classification triggers, which
// Socratic follow-ups to ask, and where the hint ladder should sit.
//
// The action table is an ordered rule list evaluated top to bottom, first
// match wins:
//   1. authentic                                     → CONTINUE
//   2. likely + early stage (pattern/strategy)       → RESET_TO_FEYNMAN
//   3. likely                                        → BLOCK_AND_REPROMPT
//   4. partial + repeat offense (attempt >= 2)       → BLOCK_AND_REPROMPT
//   5. partial                                       → CONTINUE  (benefit of the doubt)

use crate::types::{
    Action, Classification, DetectionSignal, SignalKind, SocraticReprompt,
};

/// Stages where a likely-memorized verdict pushes the learner back to the
/// explain-it-simply checkpoint instead of just blocking.
fn is_feynman_stage(stage: &str) -> bool {
    stage.eq_ignore_ascii_case("pattern_recognition")
        || stage.eq_ignore_ascii_case("strategy_design")
}

pub fn decide_action(
    classification: Classification,
    stage: &str,
    attempt_count: u32,
) -> Action {
    match classification {
        Classification::Authentic => Action::Continue,
        Classification::LikelyMemorized if is_feynman_stage(stage) => Action::ResetToFeynman,
        Classification::LikelyMemorized => Action::BlockAndReprompt,
        Classification::PartiallyMemorized if attempt_count >= 2 => Action::BlockAndReprompt,
        Classification::PartiallyMemorized => Action::Continue,
    }
}

// ── Socratic reprompts ────────────────────────────────────────────────────────

fn signal_question(kind: SignalKind) -> Option<SocraticReprompt> {
    let (id, question, purpose, target_concept) = match kind {
        SignalKind::InstantOptimal => (
            "rejected_alternatives",
            "What simpler approaches did you consider before this one, and why did you reject them?",
            "a recalled answer skips the exploration a derived one went through",
            "solution space exploration",
        ),
        SignalKind::PatternNameDrop => (
            "pattern_fit",
            "What characteristics of this specific problem made you reach for that pattern?",
            "naming the technique is recall; connecting it to the problem is understanding",
            "pattern-problem fit",
        ),
        SignalKind::ComplexityRecitation => (
            "complexity_derivation",
            "Walk through where that complexity bound comes from — what does the n count, and what work happens per element?",
            "a derived bound can be reconstructed; a recited one cannot",
            "complexity derivation",
        ),
        SignalKind::MissingTradeoffs => (
            "tradeoff_probe",
            "What does this approach give up? In what situation would a different approach win?",
            "tradeoff awareness separates understanding from transcription",
            "tradeoff analysis",
        ),
        SignalKind::NoPersonalReasoning => (
            "initial_intuition",
            "What was your very first intuition when you read the problem, before you settled on this?",
            "surfacing the learner's own starting point",
            "initial intuition",
        ),
        // No mapped question for the remaining kinds.
        _ => return None,
    };
    Some(SocraticReprompt {
        id: id.to_string(),
        question: question.to_string(),
        purpose: purpose.to_string(),
        target_concept: target_concept.to_string(),
    })
}

/// One generic explain-in-your-own-words question, then up to
/// `max_reprompts - 1` questions tied to specific fired signal kinds.
/// Kinds without a mapped question are silently skipped.
pub fn generate_reprompts(
    signals: &[DetectionSignal],
    max_reprompts: usize,
) -> Vec<SocraticReprompt> {
    let mut reprompts = Vec::new();
    if max_reprompts == 0 {
        return reprompts;
    }

    reprompts.push(SocraticReprompt {
        id: "own_words".to_string(),
        question: "Without naming any algorithm or pattern, explain in your own words how you would approach this problem from scratch.".to_string(),
        purpose: "strip the labels and see what understanding remains".to_string(),
        target_concept: "conceptual understanding".to_string(),
    });

    let mut seen: Vec<SignalKind> = Vec::new();
    for signal in signals {
        if reprompts.len() >= max_reprompts {
            break;
        }
        if seen.contains(&signal.kind) {
            continue;
        }
        seen.push(signal.kind);
        if let Some(q) = signal_question(signal.kind) {
            reprompts.push(q);
        }
    }

    reprompts.truncate(max_reprompts);
    reprompts
}

// ── Help ladder ───────────────────────────────────────────────────────────────

/// Likely memorized strips all hints (level 1, independent work); a partial
/// verdict caps the ladder at 2; authentic work keeps its current level.
pub fn adjust_help_level(classification: Classification, current: u8) -> u8 {
    match classification {
        Classification::LikelyMemorized => 1,
        Classification::PartiallyMemorized => current.min(2),
        Classification::Authentic => current,
    }
}

// ── Explanation ───────────────────────────────────────────────────────────────

pub fn explain(
    classification: Classification,
    confidence: f32,
    signals: &[DetectionSignal],
) -> String {
    if classification == Classification::Authentic {
        return "Response shows authentic engagement with the problem.".to_string();
    }

    let mut kinds: Vec<String> = Vec::new();
    for s in signals {
        let name = s.kind.to_string();
        if !kinds.contains(&name) {
            kinds.push(name);
        }
        if kinds.len() == 3 {
            break;
        }
    }

    format!(
        "Response is {} ({:.0}% confidence). Triggered by: {}.",
        classification,
        confidence * 100.0,
        kinds.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetectionSignal;

    fn sig(kind: SignalKind) -> DetectionSignal {
        DetectionSignal::new(kind, 0.4, "test")
    }

    #[test]
    fn authentic_always_continues() {
        assert_eq!(
            decide_action(Classification::Authentic, "implementation", 5),
            Action::Continue
        );
    }

    #[test]
    fn likely_in_early_stages_resets_to_feynman() {
        for stage in ["pattern_recognition", "PATTERN_RECOGNITION", "strategy_design"] {
            assert_eq!(
                decide_action(Classification::LikelyMemorized, stage, 1),
                Action::ResetToFeynman
            );
        }
    }

    #[test]
    fn likely_elsewhere_blocks() {
        assert_eq!(
            decide_action(Classification::LikelyMemorized, "implementation", 1),
            Action::BlockAndReprompt
        );
    }

    #[test]
    fn partial_gets_benefit_of_the_doubt_once() {
        assert_eq!(
            decide_action(Classification::PartiallyMemorized, "implementation", 1),
            Action::Continue
        );
        assert_eq!(
            decide_action(Classification::PartiallyMemorized, "implementation", 2),
            Action::BlockAndReprompt
        );
    }

    #[test]
    fn reprompts_start_generic_then_target_signals() {
        let signals = vec![sig(SignalKind::InstantOptimal), sig(SignalKind::PatternNameDrop)];
        let rs = generate_reprompts(&signals, 3);
        assert_eq!(rs.len(), 3);
        assert_eq!(rs[0].id, "own_words");
        assert_eq!(rs[1].id, "rejected_alternatives");
        assert_eq!(rs[2].id, "pattern_fit");
    }

    #[test]
    fn unmapped_kinds_are_skipped() {
        let signals = vec![sig(SignalKind::EditorialPhrase), sig(SignalKind::MissingTradeoffs)];
        let rs = generate_reprompts(&signals, 3);
        assert_eq!(rs.len(), 2);
        assert_eq!(rs[1].id, "tradeoff_probe");
    }

    #[test]
    fn duplicate_kinds_yield_one_question() {
        let signals = vec![sig(SignalKind::InstantOptimal), sig(SignalKind::InstantOptimal)];
        let rs = generate_reprompts(&signals, 5);
        assert_eq!(rs.len(), 2);
    }

    #[test]
    fn reprompt_count_is_bounded() {
        let signals = vec![
            sig(SignalKind::InstantOptimal),
            sig(SignalKind::PatternNameDrop),
            sig(SignalKind::ComplexityRecitation),
            sig(SignalKind::MissingTradeoffs),
        ];
        assert_eq!(generate_reprompts(&signals, 2).len(), 2);
        assert!(generate_reprompts(&signals, 0).is_empty());
    }

    #[test]
    fn help_ladder_adjustment() {
        assert_eq!(adjust_help_level(Classification::LikelyMemorized, 5), 1);
        assert_eq!(adjust_help_level(Classification::PartiallyMemorized, 4), 2);
        assert_eq!(adjust_help_level(Classification::PartiallyMemorized, 1), 1);
        assert_eq!(adjust_help_level(Classification::Authentic, 4), 4);
    }

    #[test]
    fn explanation_names_up_to_three_kinds() {
        let signals = vec![
            sig(SignalKind::EditorialPhrase),
            sig(SignalKind::InstantOptimal),
            sig(SignalKind::PatternNameDrop),
            sig(SignalKind::MissingTradeoffs),
        ];
        let text = explain(Classification::LikelyMemorized, 0.82, &signals);
        assert!(text.contains("82%"));
        assert!(text.contains("editorial_phrase"));
        assert!(!text.contains("missing_tradeoffs"));
    }

    #[test]
    fn authentic_explanation_is_fixed() {
        let text = explain(Classification::Authentic, 0.1, &[]);
        assert!(text.contains("authentic"));
    }
}
