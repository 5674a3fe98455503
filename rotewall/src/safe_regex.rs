// rotewall/src/safe_regex.rs
//
// Guarded execution of untrusted regex patterns. Editorial phrase catalogs
// and per-problem config may carry regex sources written by content authors,
// so the catchphrase detector must never let a bad pattern hang or crash a
// grading request.
//
// Guards, in order:
//   1. input truncated to the first 10,000 chars before matching
//   2. pattern sources longer than 200 chars rejected
//   3. four known catastrophic-backtracking shapes rejected (nested
//      quantifiers, repeated group followed by a group) — the regex crate's
//      NFA engine is linear-time, but the denylist keeps the catalog free of
//      patterns that would blow up if ever evaluated by a backtracking engine
//      downstream (the web tier shares these tables)
//   4. compilation bounded by size_limit; build failure degrades to no-match

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

const MAX_INPUT_CHARS: usize = 10_000;
const MAX_PATTERN_LEN: usize = 200;
const COMPILED_SIZE_LIMIT: usize = 1 << 16;

// Shapes that backtrack catastrophically: (x+)+, (x*)*, (x+)*, and a
// repeated group immediately followed by another group.
const DANGEROUS_SHAPES: &[&str] = &[
    r"\([^)]*\+\)[+*]",
    r"\([^)]*\*\)[+*]",
    r"\([^)]*\)\+\s*\([^)]*\)\+",
    r"\([^)]*\)\*\s*\([^)]*\)\*",
];

static SHAPE_CHECKS: OnceLock<Vec<Regex>> = OnceLock::new();

fn shape_checks() -> &'static [Regex] {
    SHAPE_CHECKS.get_or_init(|| {
        DANGEROUS_SHAPES
            .iter()
            .map(|s| Regex::new(s).expect("denylist shape regex is static"))
            .collect()
    })
}

/// True when the pattern source is safe to compile and evaluate.
pub fn is_safe_pattern(pattern: &str) -> bool {
    if pattern.len() > MAX_PATTERN_LEN {
        return false;
    }
    !shape_checks().iter().any(|re| re.is_match(pattern))
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    if !is_safe_pattern(pattern) {
        return None;
    }
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .ok()
}

/// Match `pattern` against (truncated) `text`, returning the first matched
/// substring. Rejected or malformed patterns yield `None`, never an error.
pub fn safe_find(pattern: &str, text: &str) -> Option<String> {
    let re = compile(pattern)?;
    re.find(truncate(text)).map(|m| m.as_str().to_string())
}

/// Boolean form of [`safe_find`].
pub fn safe_is_match(pattern: &str, text: &str) -> bool {
    compile(pattern)
        .map(|re| re.is_match(truncate(text)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pattern_matches() {
        assert_eq!(
            safe_find(r"two[- ]sum", "The Two-Sum trick"),
            Some("Two-Sum".to_string())
        );
    }

    #[test]
    fn malformed_pattern_degrades_to_no_match() {
        assert_eq!(safe_find(r"([unclosed", "anything"), None);
        assert!(!safe_is_match(r"([unclosed", "anything"));
    }

    #[test]
    fn oversized_pattern_rejected() {
        let long = "a".repeat(MAX_PATTERN_LEN + 1);
        assert!(!is_safe_pattern(&long));
        assert_eq!(safe_find(&long, &"a".repeat(300)), None);
    }

    #[test]
    fn nested_quantifier_shapes_rejected() {
        assert!(!is_safe_pattern(r"(a+)+b"));
        assert!(!is_safe_pattern(r"(a*)*b"));
        assert!(!is_safe_pattern(r"(x+)*y"));
        assert!(!is_safe_pattern(r"(a)+(b)+"));
    }

    #[test]
    fn benign_groups_still_allowed() {
        assert!(is_safe_pattern(r"(?:step )\d+"));
        assert!(is_safe_pattern(r"o\(n\^2\)"));
    }

    #[test]
    fn input_truncated_before_matching() {
        // Needle placed past the truncation boundary is never seen.
        let mut text = "x".repeat(MAX_INPUT_CHARS);
        text.push_str("needle");
        assert!(!safe_is_match("needle", &text));
        // Inside the boundary it is.
        let text = format!("needle{}", "x".repeat(50));
        assert!(safe_is_match("needle", &text));
    }
}
