// rotewall/src/main.rs
//
// Rotewall — memorization and editorial-copy detection for coding-practice
// submissions.
//
// Two operational modes:
//   analyze — run the pipeline over a JSONL file of submission contexts,
//             print per-submission verdicts, append result JSONL
//   eval    — run a labeled JSONL dataset and print a precision/recall report
//
// Usage:
//   rotewall --mode analyze --path submissions.jsonl --output verdicts.jsonl
//   rotewall --mode eval --path labeled_dataset.jsonl
//   rotewall --mode eval --path labeled_dataset.jsonl --partial-threshold 0.5

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use rotewall::eval::{report, Evaluator};
use rotewall::types::{Action, Classification, DetectionConfig, MemorizationContext};
use rotewall::{detect_memorization, DetectionResult};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name    = "rotewall",
    about   = "Memorization and editorial-copy detection for coding-practice submissions",
    version = env!("CARGO_PKG_VERSION"),
)]
struct Cli {
    #[arg(long, value_enum, default_value = "analyze")]
    mode: Mode,

    #[arg(long, help = "JSONL input path (submission contexts, or labeled rows for eval)")]
    path: PathBuf,

    #[arg(long, default_value = "rotewall_verdicts.jsonl",
          help = "Verdict output path (analyze mode)")]
    output: PathBuf,

    #[arg(long, help = "Override the partially-memorized threshold (default 0.4)")]
    partial_threshold: Option<f32>,

    #[arg(long, help = "Override the likely-memorized threshold (default 0.7)")]
    likely_threshold: Option<f32>,

    #[arg(long, help = "Override the maximum reprompt count (default 3)")]
    max_reprompts: Option<usize>,

    #[arg(long, help = "Emit the eval summary as JSON instead of markdown")]
    json: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    Analyze, // verdict per submission
    Eval,    // labeled dataset → metrics report
}

fn config_from(cli: &Cli) -> DetectionConfig {
    let mut cfg = DetectionConfig::default();
    if let Some(t) = cli.partial_threshold {
        cfg.partial_threshold = t;
    }
    if let Some(t) = cli.likely_threshold {
        cfg.likely_threshold = t;
    }
    if let Some(n) = cli.max_reprompts {
        cfg.max_reprompts = n;
    }
    cfg
}

// ── Terminal output ───────────────────────────────────────────────────────────

fn print_verdict(ctx: &MemorizationContext, result: &DetectionResult) {
    let (color, icon) = match result.classification {
        Classification::LikelyMemorized => ("\x1b[91;1m", "✗"),
        Classification::PartiallyMemorized => ("\x1b[93;1m", "~"),
        Classification::Authentic => ("\x1b[92m", "✓"),
    };
    let reset = "\x1b[0m";

    println!(
        "\n{}{} {} → {}{}",
        color, icon, result.classification, result.action, reset
    );
    println!("  Problem   : {} [{}]", ctx.problem_id, ctx.stage);
    println!("  Confidence: {}{:.2}{}", color, result.confidence, reset);
    if !result.signals.is_empty() {
        let top: Vec<String> = result
            .signals
            .iter()
            .take(3)
            .map(|s| s.kind.to_string())
            .collect();
        println!("  Signals   : {}", top.join(" | "));
    }
    if result.action == Action::BlockAndReprompt {
        for r in &result.reprompts {
            println!("  Reprompt  : {}", r.question);
        }
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn run_analyze(cli: &Cli) -> Result<()> {
    let cfg = config_from(cli);
    let content = std::fs::read_to_string(&cli.path)?;
    let mut out = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.output)?;

    let mut n_processed = 0usize;
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let ctx: MemorizationContext = match serde_json::from_str(line) {
            Ok(c) => c,
            Err(e) => {
                warn!("line {}: parse error: {e}", lineno + 1);
                continue;
            }
        };
        let result = match detect_memorization(&ctx, &cfg) {
            Ok(r) => r,
            Err(e) => {
                warn!("line {}: rejected context: {e}", lineno + 1);
                continue;
            }
        };

        print_verdict(&ctx, &result);

        let record = serde_json::json!({
            "timestamp":  Utc::now(),
            "problem_id": ctx.problem_id,
            "stage":      ctx.stage,
            "result":     result,
        });
        writeln!(out, "{record}")?;
        n_processed += 1;
    }

    println!("\nprocessed {n_processed} submissions → {}", cli.output.display());
    Ok(())
}

fn run_eval(cli: &Cli) -> Result<()> {
    let cfg = config_from(cli);
    let result = Evaluator::new(cfg).run_dataset(&cli.path)?;
    if cli.json {
        println!("{}", report::to_json(&result));
    } else {
        report::print_markdown(&result);
    }
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rotewall=info".parse()?),
        )
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.mode {
        Mode::Analyze => run_analyze(&cli),
        Mode::Eval => run_eval(&cli),
    }
}
