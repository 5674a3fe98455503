// rotewall/src/detectors/template_wording.rs
//
// Editorial scaffolding detector. Published write-ups lay the solution out
// as "Step 1: ... Step 2: ..." or a "First... Then... Finally..." walk;
// learners reasoning live rarely produce either shape unprompted.
//
// The two branches are mutually exclusive: the step-count branch wins when
// both would fire.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{DetectionSignal, SignalKind};

static STEP_MARKER: OnceLock<Regex> = OnceLock::new();
static SEQUENTIAL: OnceLock<Regex> = OnceLock::new();

fn step_marker() -> &'static Regex {
    STEP_MARKER.get_or_init(|| {
        // "Step 3:", "step 2.", or a bare numbered-list line "4) ..."
        Regex::new(r"(?im)(?:\bstep\s*\d+\s*[.:)]|^\s*\d+\s*[.)]\s)")
            .expect("step-marker regex is static")
    })
}

fn sequential() -> &'static Regex {
    SEQUENTIAL.get_or_init(|| {
        Regex::new(r"(?is)\bfirst\b.{0,400}?\bthen\b.{0,400}?\bfinally\b")
            .expect("sequential regex is static")
    })
}

const MIN_STEPS: usize = 3;
const BASE_CONFIDENCE: f32 = 0.3;
const PER_STEP: f32 = 0.1;
const MAX_CONFIDENCE: f32 = 0.8;
const SEQUENTIAL_CONFIDENCE: f32 = 0.4;

pub fn analyze(text: &str) -> Option<DetectionSignal> {
    let steps: Vec<_> = step_marker().find_iter(text).collect();
    if steps.len() >= MIN_STEPS {
        let confidence = (BASE_CONFIDENCE + PER_STEP * steps.len() as f32).min(MAX_CONFIDENCE);
        return Some(
            DetectionSignal::new(
                SignalKind::StepListFormat,
                confidence,
                format!("{} numbered step markers in editorial layout", steps.len()),
            )
            .with_excerpt(steps[0].as_str().trim().to_string()),
        );
    }

    if let Some(m) = sequential().find(text) {
        let excerpt: String = m.as_str().chars().take(80).collect();
        return Some(
            DetectionSignal::new(
                SignalKind::SequentialTemplate,
                SEQUENTIAL_CONFIDENCE,
                "First/Then/Finally write-up cadence",
            )
            .with_excerpt(excerpt),
        );
    }

    None
}
