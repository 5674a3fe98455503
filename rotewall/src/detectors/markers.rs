// rotewall/src/detectors/markers.rs
//
// Anti-cheat marker matcher. Problems can carry marker strings in their
// metadata — named algorithms, distinctive variable names, phrases only the
// editorial uses. Reproducing one verbatim is the strongest single tell,
// so each hit lands at a fixed high confidence.

use crate::types::{DetectionSignal, MemorizationContext, SignalKind};

const MARKER_CONFIDENCE: f32 = 0.7;

pub fn analyze(ctx: &MemorizationContext) -> Vec<DetectionSignal> {
    let Some(markers) = &ctx.anti_cheat_markers else {
        return Vec::new();
    };

    let lower = ctx.response_text.to_lowercase();
    markers
        .iter()
        .filter(|m| !m.is_empty() && lower.contains(&m.to_lowercase()))
        .map(|m| {
            DetectionSignal::new(
                SignalKind::AntiCheatMarker,
                MARKER_CONFIDENCE,
                format!("response reproduces anti-cheat marker \"{m}\""),
            )
            .with_excerpt(m.clone())
        })
        .collect()
}
