// End-to-end pipeline behavior: context in, verdict out.

use rotewall::types::{
    Action, Classification, ContextError, DetectionConfig, MemorizationContext, SignalKind,
};
use rotewall::detect_memorization;

fn ctx(text: &str) -> MemorizationContext {
    MemorizationContext {
        response_text: text.into(),
        stage: "implementation".into(),
        problem_id: "max-subarray".into(),
        pattern: "sliding_window".into(),
        previous_responses: vec![],
        help_level: 3,
        response_time_ms: 15_000,
        attempt_count: 1,
        anti_cheat_markers: None,
    }
}

// Dense editorial prose: phrase hits, instant-optimal, complexity recitation.
const EDITORIAL: &str = "The key insight is to expand the window. This is a classic \
    problem; the optimal solution is the most efficient and runs in O(n) time and O(1) space.";

const ORGANIC: &str = "i think we could maybe keep a running range and grow it, \
    not sure if that covers the negative numbers though, let me try an example";

#[test]
fn empty_response_is_authentic_with_no_signals() {
    let result = detect_memorization(&ctx(""), &DetectionConfig::default()).unwrap();
    assert_eq!(result.classification, Classification::Authentic);
    assert!(result.signals.is_empty());
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.action, Action::Continue);
    assert!(result.reprompts.is_empty());
}

#[test]
fn organic_reasoning_is_authentic() {
    let result = detect_memorization(&ctx(ORGANIC), &DetectionConfig::default()).unwrap();
    assert_eq!(result.classification, Classification::Authentic);
    assert_eq!(result.recommended_help_level, 3);
}

#[test]
fn editorial_prose_is_likely_memorized() {
    let result = detect_memorization(&ctx(EDITORIAL), &DetectionConfig::default()).unwrap();
    assert_eq!(result.classification, Classification::LikelyMemorized);
    assert_eq!(result.action, Action::BlockAndReprompt);
    assert_eq!(result.recommended_help_level, 1);
}

#[test]
fn confidence_stays_in_unit_interval() {
    for text in ["", ORGANIC, EDITORIAL, "O(n) O(n) O(n) optimal best efficient"] {
        let result = detect_memorization(&ctx(text), &DetectionConfig::default()).unwrap();
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of range for {:?}",
            result.confidence,
            text
        );
    }
}

#[test]
fn reprompts_bounded_and_tied_to_blocking() {
    let cfg = DetectionConfig::default();
    let blocked = detect_memorization(&ctx(EDITORIAL), &cfg).unwrap();
    assert_eq!(blocked.action, Action::BlockAndReprompt);
    assert!(!blocked.reprompts.is_empty());
    assert!(blocked.reprompts.len() <= cfg.max_reprompts);

    let clean = detect_memorization(&ctx(ORGANIC), &cfg).unwrap();
    assert_eq!(clean.action, Action::Continue);
    assert!(clean.reprompts.is_empty());
}

#[test]
fn detection_is_idempotent() {
    let cfg = DetectionConfig::default();
    let c = ctx(EDITORIAL);
    let a = detect_memorization(&c, &cfg).unwrap();
    let b = detect_memorization(&c, &cfg).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn likely_verdict_in_pattern_recognition_resets_to_feynman() {
    let mut c = ctx(EDITORIAL);
    c.stage = "PATTERN_RECOGNITION".into();
    let result = detect_memorization(&c, &DetectionConfig::default()).unwrap();
    assert_eq!(result.classification, Classification::LikelyMemorized);
    assert_eq!(result.action, Action::ResetToFeynman);
    assert!(result.reprompts.is_empty());
}

#[test]
fn strict_thresholds_forgive_moderate_suspicion() {
    let text = "Sliding window. The key insight is O(n) runtime.";
    let default_result = detect_memorization(&ctx(text), &DetectionConfig::default()).unwrap();
    assert_ne!(default_result.classification, Classification::Authentic);

    let strict = DetectionConfig {
        partial_threshold: 0.9,
        likely_threshold: 0.95,
        ..Default::default()
    };
    let strict_result = detect_memorization(&ctx(text), &strict).unwrap();
    assert_eq!(strict_result.classification, Classification::Authentic);
}

#[test]
fn anti_cheat_marker_lands_in_signal_evidence() {
    let mut c = ctx("This is just Kadane's algorithm in disguise.");
    c.anti_cheat_markers = Some(vec!["Kadane's algorithm".into()]);
    let result = detect_memorization(&c, &DetectionConfig::default()).unwrap();
    let marker = result
        .signals
        .iter()
        .find(|s| s.kind == SignalKind::AntiCheatMarker)
        .expect("marker signal should fire");
    assert!(marker.evidence.contains("Kadane's algorithm"));
}

#[test]
fn invalid_context_fails_before_any_detector_runs() {
    let mut c = ctx(EDITORIAL);
    c.response_time_ms = -1;
    let err = detect_memorization(&c, &DetectionConfig::default()).unwrap_err();
    assert_eq!(err, ContextError::NegativeResponseTime(-1));

    let mut c = ctx(EDITORIAL);
    c.pattern = String::new();
    let err = detect_memorization(&c, &DetectionConfig::default()).unwrap_err();
    assert_eq!(err, ContextError::EmptyField("pattern"));
}

#[test]
fn custom_max_reprompts_truncates() {
    let cfg = DetectionConfig {
        max_reprompts: 1,
        ..Default::default()
    };
    let result = detect_memorization(&ctx(EDITORIAL), &cfg).unwrap();
    assert_eq!(result.action, Action::BlockAndReprompt);
    assert_eq!(result.reprompts.len(), 1);
    assert_eq!(result.reprompts[0].id, "own_words");
}

#[test]
fn signals_preserve_detector_evaluation_order() {
    let result = detect_memorization(&ctx(EDITORIAL), &DetectionConfig::default()).unwrap();
    // Catchphrase signals come before the instant-optimal and complexity ones.
    let first_phrase = result
        .signals
        .iter()
        .position(|s| s.kind == SignalKind::EditorialPhrase)
        .unwrap();
    let instant = result
        .signals
        .iter()
        .position(|s| s.kind == SignalKind::InstantOptimal)
        .unwrap();
    assert!(first_phrase < instant);
}
