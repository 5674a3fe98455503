// rotewall/src/engine/classifier.rs
//
// Signal aggregation and three-way classification.
//
// Aggregate confidence = min(Σ signal confidence / 2, 1). The halving keeps
// two or three weak signals from saturating the scale on their own; it is a
// fixed policy constant, replicated exactly, not a calibrated quantity.
// Authentic first-person markers then discount the aggregate at 0.1 apiece,
// counted once over the full response text.

use crate::detectors;
use crate::phrasebook::count_authentic_indicators;
use crate::types::{
    Classification, ContextError, DetectionConfig, DetectionResult, DetectionSignal,
    MemorizationContext,
};

use super::policy;

const SUM_DIVISOR: f32 = 2.0;
const INDICATOR_DISCOUNT: f32 = 0.1;

/// Combine fired signals into an adjusted confidence in [0, 1].
pub fn adjusted_confidence(signals: &[DetectionSignal], response_text: &str) -> f32 {
    let raw: f32 = signals.iter().map(|s| s.confidence).sum();
    let aggregate = (raw / SUM_DIVISOR).min(1.0);
    let indicators = count_authentic_indicators(response_text) as f32;
    (aggregate - INDICATOR_DISCOUNT * indicators).max(0.0)
}

pub fn classify(confidence: f32, cfg: &DetectionConfig) -> Classification {
    if confidence >= cfg.likely_threshold {
        Classification::LikelyMemorized
    } else if confidence >= cfg.partial_threshold {
        Classification::PartiallyMemorized
    } else {
        Classification::Authentic
    }
}

/// The full pipeline: validate, run every detector, aggregate, classify,
/// then derive action, reprompts, help level and explanation.
///
/// Referentially transparent: identical context and config always produce
/// an identical result, and nothing is shared across calls.
pub fn detect_memorization(
    ctx: &MemorizationContext,
    cfg: &DetectionConfig,
) -> Result<DetectionResult, ContextError> {
    ctx.validate()?;

    let signals = detectors::run_all(ctx, cfg);
    let confidence = adjusted_confidence(&signals, &ctx.response_text);
    let classification = classify(confidence, cfg);

    let action = policy::decide_action(classification, &ctx.stage, ctx.attempt_count);
    let reprompts = if action == crate::types::Action::BlockAndReprompt {
        policy::generate_reprompts(&signals, cfg.max_reprompts)
    } else {
        Vec::new()
    };
    let recommended_help_level = policy::adjust_help_level(classification, ctx.help_level);
    let explanation = policy::explain(classification, confidence, &signals);

    Ok(DetectionResult {
        classification,
        confidence,
        signals,
        action,
        reprompts,
        recommended_help_level,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DetectionSignal, SignalKind};

    fn sig(confidence: f32) -> DetectionSignal {
        DetectionSignal::new(SignalKind::EditorialPhrase, confidence, "test")
    }

    #[test]
    fn no_signals_means_zero_confidence() {
        assert_eq!(adjusted_confidence(&[], "whatever"), 0.0);
    }

    #[test]
    fn sum_is_halved() {
        let c = adjusted_confidence(&[sig(0.4), sig(0.4)], "no markers here");
        assert!((c - 0.4).abs() < 1e-6);
    }

    #[test]
    fn aggregate_caps_at_one() {
        let signals: Vec<_> = (0..5).map(|_| sig(0.9)).collect();
        let c = adjusted_confidence(&signals, "no markers here");
        assert!((c - 1.0).abs() < 1e-6);
    }

    #[test]
    fn authentic_indicators_discount_the_aggregate() {
        // 0.8 sum → 0.4 aggregate, minus 2 × 0.1 for "i think" + "maybe".
        let c = adjusted_confidence(&[sig(0.4), sig(0.4)], "i think maybe");
        assert!((c - 0.2).abs() < 1e-6);
    }

    #[test]
    fn discount_floors_at_zero() {
        let text = "i think maybe, i'm not sure, let me try, i wonder";
        let c = adjusted_confidence(&[sig(0.2)], text);
        assert_eq!(c, 0.0);
    }

    #[test]
    fn more_signal_types_never_decrease_the_aggregate() {
        let base = adjusted_confidence(&[sig(0.4)], "");
        let more = adjusted_confidence(&[sig(0.4), sig(0.3)], "");
        assert!(more >= base);
    }

    #[test]
    fn classification_thresholds() {
        let cfg = DetectionConfig::default();
        assert_eq!(classify(0.75, &cfg), Classification::LikelyMemorized);
        assert_eq!(classify(0.7, &cfg), Classification::LikelyMemorized);
        assert_eq!(classify(0.5, &cfg), Classification::PartiallyMemorized);
        assert_eq!(classify(0.4, &cfg), Classification::PartiallyMemorized);
        assert_eq!(classify(0.39, &cfg), Classification::Authentic);
    }
}
