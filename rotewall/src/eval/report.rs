// rotewall/src/eval/report.rs
//
// Markdown and JSON report output for the eval harness.

use super::EvalResult;

/// Approximate area under the ROC curve from the global counters.
/// AUC ≈ (1 + TPR - FPR) / 2; the exact curve would need per-row
/// score/label pairs, which the binned histogram no longer carries.
pub fn auc_roc_approx(result: &EvalResult) -> f64 {
    let tpr = result.global.recall();
    let fpr = result.global.fpr();
    (1.0 + tpr - fpr) / 2.0
}

/// Print a markdown-formatted full report to stdout.
pub fn print_markdown(result: &EvalResult) {
    println!("# Rotewall Evaluation Report");
    println!();
    println!(
        "**Rows**: {}  **Memorized**: {}  **Authentic**: {}  **Invalid**: {}",
        result.n_events, result.n_positive, result.n_negative, result.n_invalid
    );
    println!();
    println!("| Metric    | Value  |");
    println!("|-----------|--------|");
    println!("| Precision | {:.4}  |", result.global.precision());
    println!("| Recall    | {:.4}  |", result.global.recall());
    println!("| F1        | {:.4}  |", result.global.f1());
    println!("| FPR       | {:.4}  |", result.global.fpr());
    println!("| AUC-ROC   | {:.4}  |", auc_roc_approx(result));
    println!();

    println!("## Per-Signal Performance");
    println!();
    println!("| Signal | P | R | F1 | FPR |");
    println!("|--------|---|---|----|-----|");
    let mut kinds: Vec<_> = result.per_kind.iter().collect();
    kinds.sort_by(|a, b| b.1.f1().partial_cmp(&a.1.f1()).unwrap_or(std::cmp::Ordering::Equal));
    for (kind, m) in kinds {
        println!(
            "| {:22} | {:.3} | {:.3} | {:.3} | {:.4} |",
            kind.to_string(),
            m.precision(),
            m.recall(),
            m.f1(),
            m.fpr()
        );
    }

    println!();
    println!("## Classification Counts");
    println!();
    let mut counts: Vec<_> = result.classification_counts.iter().collect();
    counts.sort();
    for (classification, n) in counts {
        println!("- {classification}: {n}");
    }

    println!();
    println!("## Confidence Distribution");
    println!();
    for (lower, count) in &result.confidence_histogram {
        let bar: String =
            "#".repeat((*count as f64 / result.n_events.max(1) as f64 * 80.0) as usize);
        println!("{:.2}–{:.2} | {:5} | {}", lower, lower + 0.05, count, bar);
    }
}

/// Serialize the evaluation summary to JSON for downstream consumption.
pub fn to_json(result: &EvalResult) -> String {
    serde_json::json!({
        "n_events":              result.n_events,
        "n_positive":            result.n_positive,
        "n_negative":            result.n_negative,
        "n_invalid":             result.n_invalid,
        "precision":             result.global.precision(),
        "recall":                result.global.recall(),
        "f1":                    result.global.f1(),
        "fpr":                   result.global.fpr(),
        "auc_roc":               auc_roc_approx(result),
        "classification_counts": result.classification_counts,
    })
    .to_string()
}
