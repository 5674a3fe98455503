// rotewall/src/phrasebook.rs
//
// Static catalogs behind the detectors:
//   - editorial phrase tables, generic + keyed by algorithmic pattern id
//   - pattern alias table (how learners refer to each pattern in prose)
//   - authentic-indicator phrases (first-person reasoning markers)
//   - formal/academic vocabulary (register markers)
//
// All tables are loaded once and never mutated. The literal-phrase catalogs
// are compiled into Aho-Corasick automatons: O(text_len) per scan regardless
// of catalog size.

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::types::{EditorialPhrase, PhraseCategory};

// ── Editorial phrase tables ───────────────────────────────────────────────────
// Wording typical of published solution write-ups. A learner reasoning from
// scratch says "I think we could..."; an editorial says "Observe that...".

use PhraseCategory::{Approach, Complexity, Pattern, Solution};

static GENERIC_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("the key insight is", 0.40, Approach),
    EditorialPhrase::literal("the key observation", 0.40, Approach),
    EditorialPhrase::literal("it is easy to see", 0.35, Approach),
    EditorialPhrase::literal("observe that", 0.30, Approach),
    EditorialPhrase::literal("note that we can", 0.25, Approach),
    EditorialPhrase::literal("trivially", 0.30, Approach),
    EditorialPhrase::literal("left as an exercise", 0.50, Approach),
    EditorialPhrase::literal("the optimal solution", 0.35, Solution),
    EditorialPhrase::literal("we can solve this in", 0.30, Solution),
    EditorialPhrase::literal("the intended solution", 0.50, Solution),
    EditorialPhrase::literal("standard technique", 0.40, Pattern),
    EditorialPhrase::literal("classic problem", 0.40, Pattern),
    EditorialPhrase::literal("well-known", 0.35, Pattern),
    EditorialPhrase::regex(
        r"this is (?:a|the) (?:classic|standard|textbook)",
        0.45,
        Pattern,
    ),
    EditorialPhrase::regex(
        r"runs? in o\([^)]{1,20}\) time and o\([^)]{1,20}\) space",
        0.40,
        Complexity,
    ),
];

static SLIDING_WINDOW_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("expand the window", 0.35, Solution),
    EditorialPhrase::literal("shrink the window", 0.35, Solution),
    EditorialPhrase::literal("maintain a window invariant", 0.45, Solution),
    EditorialPhrase::literal("two pointers defining a window", 0.40, Pattern),
];

static TWO_POINTERS_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("move the left pointer", 0.30, Solution),
    EditorialPhrase::literal("move the right pointer", 0.30, Solution),
    EditorialPhrase::literal("pointers toward each other", 0.40, Solution),
];

static BINARY_SEARCH_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("halve the search space", 0.40, Solution),
    EditorialPhrase::literal("binary search on the answer", 0.45, Pattern),
    EditorialPhrase::literal("the invariant holds", 0.35, Approach),
];

static DYNAMIC_PROGRAMMING_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("optimal substructure", 0.45, Pattern),
    EditorialPhrase::literal("overlapping subproblems", 0.45, Pattern),
    EditorialPhrase::literal("state transition", 0.40, Solution),
    EditorialPhrase::literal("dp table", 0.35, Solution),
    EditorialPhrase::literal("base case and transition", 0.40, Solution),
];

static BFS_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("level by level", 0.30, Solution),
    EditorialPhrase::literal("shortest path in an unweighted graph", 0.45, Pattern),
];

static DFS_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("recurse on each neighbor", 0.35, Solution),
    EditorialPhrase::literal("mark nodes as visited", 0.30, Solution),
];

static BACKTRACKING_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("prune the search", 0.40, Solution),
    EditorialPhrase::literal("choose, explore, unchoose", 0.50, Solution),
];

static TOP_K_HEAP_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("min-heap of size k", 0.45, Solution),
    EditorialPhrase::literal("pop the smallest element", 0.30, Solution),
];

static HASH_MAP_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("constant time lookup", 0.30, Complexity),
    EditorialPhrase::literal("store the complement", 0.40, Solution),
];

static MERGE_INTERVALS_PHRASES: &[EditorialPhrase] = &[
    EditorialPhrase::literal("sort by start time", 0.35, Solution),
    EditorialPhrase::literal("merge overlapping intervals", 0.35, Solution),
];

static PATTERN_PHRASES: &[(&str, &[EditorialPhrase])] = &[
    ("sliding_window", SLIDING_WINDOW_PHRASES),
    ("two_pointers", TWO_POINTERS_PHRASES),
    ("binary_search", BINARY_SEARCH_PHRASES),
    ("dynamic_programming", DYNAMIC_PROGRAMMING_PHRASES),
    ("bfs", BFS_PHRASES),
    ("dfs", DFS_PHRASES),
    ("backtracking", BACKTRACKING_PHRASES),
    ("top_k_heap", TOP_K_HEAP_PHRASES),
    ("hash_map", HASH_MAP_PHRASES),
    ("merge_intervals", MERGE_INTERVALS_PHRASES),
];

/// Generic phrases plus the table for this pattern id, if any.
pub fn phrases_for<'a>(pattern_id: &str) -> impl Iterator<Item = &'a EditorialPhrase> {
    let specific = PATTERN_PHRASES
        .iter()
        .find(|(id, _)| *id == pattern_id)
        .map(|(_, phrases)| *phrases)
        .unwrap_or(&[]);
    GENERIC_PHRASES.iter().chain(specific.iter())
}

// ── Pattern aliases ───────────────────────────────────────────────────────────
// How each pattern id shows up in learner prose. Used by the name-drop
// detector to find mentions that lack any justification nearby.

static PATTERN_ALIASES: &[(&str, &[&str])] = &[
    ("sliding_window", &["sliding window"]),
    ("two_pointers", &["two pointers", "two-pointer", "two pointer"]),
    (
        "fast_slow_pointers",
        &["fast and slow pointers", "tortoise and hare", "floyd's"],
    ),
    ("binary_search", &["binary search"]),
    ("merge_intervals", &["merge intervals", "interval merging"]),
    (
        "dynamic_programming",
        &["dynamic programming", "memoization", "tabulation"],
    ),
    ("bfs", &["breadth-first search", "breadth first search", "bfs"]),
    ("dfs", &["depth-first search", "depth first search", "dfs"]),
    ("backtracking", &["backtracking"]),
    ("top_k_heap", &["min-heap", "max-heap", "priority queue", "top k"]),
    ("hash_map", &["hash map", "hashmap", "hash table"]),
    ("prefix_sum", &["prefix sum", "prefix sums"]),
    ("monotonic_stack", &["monotonic stack"]),
    ("union_find", &["union find", "union-find", "disjoint set"]),
    ("greedy", &["greedy"]),
];

/// Known prose aliases for a pattern id. Unknown ids fall back to the id
/// itself, lowercased with underscores spaced out, so new curriculum
/// patterns still get name-drop coverage. Aliases are always lowercase:
/// the name-drop detector searches them in a lowercased haystack.
pub fn aliases_for(pattern_id: &str) -> Vec<String> {
    match PATTERN_ALIASES.iter().find(|(id, _)| *id == pattern_id) {
        Some((_, aliases)) => aliases.iter().map(|a| a.to_string()).collect(),
        None => vec![pattern_id.to_lowercase().replace('_', " ")],
    }
}

// ── Authentic indicators ──────────────────────────────────────────────────────
// First-person reasoning markers. Their presence discounts the aggregate
// score; their absence in a long answer is itself a signal.

const AUTHENTIC_INDICATORS: &[&str] = &[
    "i think",
    "i believe",
    "i guess",
    "i wonder",
    "i'm not sure",
    "im not sure",
    "not sure if",
    "i tried",
    "i noticed",
    "i realized",
    "i assumed",
    "my first instinct",
    "my first thought",
    "my intuition",
    "my approach",
    "at first i",
    "let me try",
    "let me think",
    "maybe",
    "hmm",
    "i got stuck",
    "i kept",
    "what if",
];

static AUTHENTIC_AC: OnceLock<AhoCorasick> = OnceLock::new();

fn authentic_automaton() -> &'static AhoCorasick {
    AUTHENTIC_AC.get_or_init(|| {
        AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(AUTHENTIC_INDICATORS)
            .expect("authentic-indicator automaton build failed")
    })
}

/// Count first-person reasoning markers in the text (non-overlapping).
pub fn count_authentic_indicators(text: &str) -> usize {
    authentic_automaton().find_iter(text).count()
}

// ── Formal vocabulary ─────────────────────────────────────────────────────────
// Academic/editorial register markers for the vocabulary-mismatch detector.

const FORMAL_VOCABULARY: &[&str] = &[
    "furthermore",
    "moreover",
    "consequently",
    "thus",
    "hence",
    "therefore",
    "subsequently",
    "whereby",
    "wherein",
    "aforementioned",
    "respectively",
    "utilize",
    "leverage",
    "asymptotically",
    "amortized",
    "invariant",
    "monotonic",
    "canonical",
];

static FORMAL_AC: OnceLock<AhoCorasick> = OnceLock::new();

fn formal_automaton() -> &'static AhoCorasick {
    FORMAL_AC.get_or_init(|| {
        AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(FORMAL_VOCABULARY)
            .expect("formal-vocabulary automaton build failed")
    })
}

/// Count formal/academic register markers in the text (non-overlapping).
pub fn count_formal_vocabulary(text: &str) -> usize {
    formal_automaton().find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_phrases_apply_to_unknown_patterns() {
        let phrases: Vec<_> = phrases_for("quantum_annealing").collect();
        assert_eq!(phrases.len(), GENERIC_PHRASES.len());
    }

    #[test]
    fn pattern_table_is_appended_to_generics() {
        let n_dp = phrases_for("dynamic_programming").count();
        assert_eq!(n_dp, GENERIC_PHRASES.len() + DYNAMIC_PROGRAMMING_PHRASES.len());
    }

    #[test]
    fn phrase_weights_are_bounded() {
        for (_, table) in PATTERN_PHRASES {
            for p in *table {
                assert!(p.weight > 0.0 && p.weight <= 1.0, "bad weight {}", p.weight);
            }
        }
        for p in GENERIC_PHRASES {
            assert!(p.weight > 0.0 && p.weight <= 1.0);
        }
    }

    #[test]
    fn alias_lookup_falls_back_to_spaced_id() {
        assert_eq!(aliases_for("bit_manipulation"), vec!["bit manipulation"]);
        assert!(aliases_for("two_pointers").contains(&"two pointers".to_string()));
    }

    #[test]
    fn fallback_alias_is_lowercased() {
        assert_eq!(aliases_for("Monotonic_Deque"), vec!["monotonic deque"]);
    }

    #[test]
    fn authentic_indicator_counting_is_case_insensitive() {
        assert_eq!(count_authentic_indicators("I think it works. Maybe."), 2);
        assert_eq!(count_authentic_indicators("The solution is optimal."), 0);
    }

    #[test]
    fn formal_vocabulary_counting() {
        let text = "Furthermore, the invariant holds; thus we are done.";
        assert_eq!(count_formal_vocabulary(text), 3);
    }
}
