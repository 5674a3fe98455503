// rotewall/src/eval/mod.rs
//
// Labeled dataset + evaluation harness.
//
//   1. Loads a labeled JSONL dataset of submission contexts
//   2. Runs the full detection pipeline on every row
//   3. Computes per-signal-kind and aggregate precision / recall / F1 / FPR
//   4. Prints a markdown-formatted report
//
// Dataset format (one JSON object per line): all MemorizationContext fields
// plus "label": "memorized" for known copied responses, "authentic" or null
// for organic ones.
//
// Run:
//   rotewall eval --path labeled_dataset.jsonl

pub mod report;

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::{info, warn};

use crate::engine::classifier::detect_memorization;
use crate::types::{Classification, DetectionConfig, MemorizationContext, SignalKind};

/// All signal kinds, in detector evaluation order. Used to credit detectors
/// with true negatives on rows where they stayed quiet.
pub const ALL_KINDS: [SignalKind; 10] = [
    SignalKind::StepListFormat,
    SignalKind::SequentialTemplate,
    SignalKind::EditorialPhrase,
    SignalKind::NoPersonalReasoning,
    SignalKind::InstantOptimal,
    SignalKind::MissingTradeoffs,
    SignalKind::PatternNameDrop,
    SignalKind::ComplexityRecitation,
    SignalKind::VocabularyMismatch,
    SignalKind::AntiCheatMarker,
];

#[derive(Debug, Deserialize)]
pub struct LabeledContext {
    #[serde(flatten)]
    pub context: MemorizationContext,
    /// "memorized" marks the positive class; "authentic" or absent, negative.
    #[serde(default)]
    pub label: Option<String>,
}

impl LabeledContext {
    pub fn is_positive(&self) -> bool {
        self.label.as_deref() == Some("memorized")
    }
}

// ── Per-kind performance counters ─────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub struct KindMetrics {
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    pub fn_: u64,
}

impl KindMetrics {
    pub fn precision(&self) -> f64 {
        let denom = self.tp + self.fp;
        if denom == 0 { 1.0 } else { self.tp as f64 / denom as f64 }
    }

    pub fn recall(&self) -> f64 {
        let denom = self.tp + self.fn_;
        if denom == 0 { 0.0 } else { self.tp as f64 / denom as f64 }
    }

    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 { 0.0 } else { 2.0 * p * r / (p + r) }
    }

    pub fn fpr(&self) -> f64 {
        let denom = self.fp + self.tn;
        if denom == 0 { 0.0 } else { self.fp as f64 / denom as f64 }
    }
}

// ── Aggregate evaluation result ───────────────────────────────────────────────

#[derive(Debug)]
pub struct EvalResult {
    pub n_events: usize,
    pub n_positive: usize,
    pub n_negative: usize,
    pub n_invalid: usize,
    pub global: KindMetrics,
    pub per_kind: HashMap<SignalKind, KindMetrics>,
    pub classification_counts: HashMap<String, u64>,
    /// (confidence_bin_lower, count), 0.05-wide bins.
    pub confidence_histogram: Vec<(f32, usize)>,
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

pub struct Evaluator {
    cfg: DetectionConfig,
}

impl Evaluator {
    pub fn new(cfg: DetectionConfig) -> Self {
        Self { cfg }
    }

    pub fn run_dataset(&self, path: &Path) -> Result<EvalResult> {
        let content = std::fs::read_to_string(path)?;
        let mut rows: Vec<LabeledContext> = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<LabeledContext>(line) {
                Ok(row) => rows.push(row),
                Err(e) => warn!("eval dataset parse error: {e}"),
            }
        }

        info!("loaded {} labeled rows from {}", rows.len(), path.display());
        Ok(self.evaluate(&rows))
    }

    pub fn evaluate(&self, rows: &[LabeledContext]) -> EvalResult {
        let n_positive = rows.iter().filter(|r| r.is_positive()).count();

        let mut global = KindMetrics::default();
        let mut per_kind: HashMap<SignalKind, KindMetrics> = HashMap::new();
        let mut classification_counts: HashMap<String, u64> = HashMap::new();
        let mut bins = vec![0usize; 20];
        let mut n_invalid = 0usize;

        for row in rows {
            let result = match detect_memorization(&row.context, &self.cfg) {
                Ok(r) => r,
                Err(e) => {
                    warn!("skipping invalid row: {e}");
                    n_invalid += 1;
                    continue;
                }
            };

            let is_positive = row.is_positive();
            let flagged = result.classification != Classification::Authentic;

            for kind in ALL_KINDS {
                let fired = result.signals.iter().any(|s| s.kind == kind);
                let m = per_kind.entry(kind).or_default();
                match (fired, is_positive) {
                    (true, true) => m.tp += 1,
                    (true, false) => m.fp += 1,
                    (false, true) => m.fn_ += 1,
                    (false, false) => m.tn += 1,
                }
            }

            match (flagged, is_positive) {
                (true, true) => global.tp += 1,
                (true, false) => global.fp += 1,
                (false, true) => global.fn_ += 1,
                (false, false) => global.tn += 1,
            }

            let bin = ((result.confidence / 0.05) as usize).min(19);
            bins[bin] += 1;
            *classification_counts
                .entry(result.classification.to_string())
                .or_default() += 1;
        }

        let confidence_histogram = bins
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f32 * 0.05, c))
            .collect();

        EvalResult {
            n_events: rows.len(),
            n_positive,
            n_negative: rows.len() - n_positive,
            n_invalid,
            global,
            per_kind,
            classification_counts,
            confidence_histogram,
        }
    }
}
