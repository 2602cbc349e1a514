//! Candidate scene boundaries in Korean prose.

use regex::Regex;
use std::sync::LazyLock;

/// Boundary markers, in the order they are applied.
///
/// Sentence endings, the formal `-습니다` ending and its past-tense forms,
/// contrastive/causal connectives, then sequence and temporal transitions.
pub const BREAK_MARKERS: &[&str] = &[
    r"[.!?]\s*",
    r"습니다\s*",
    r"었습니다\s*",
    r"았습니다\s*",
    r"그런데\s*",
    r"그러나\s*",
    r"하지만\s*",
    r"그때\s*",
    r"그러자\s*",
    r"그리고\s*",
    r"한편\s*",
    r"이때\s*",
    r"그 후\s*",
];

static BREAK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BREAK_MARKERS
        .iter()
        .map(|marker| Regex::new(marker).expect("Valid break marker regex"))
        .collect()
});

/// Find candidate scene boundaries in `content`.
///
/// Each marker is matched independently over the whole text and the byte
/// offset just past every match is recorded, so markers may share offsets.
/// The result is sorted ascending with duplicates removed; every offset is a
/// char boundary in `1..=content.len()`.
///
/// # Examples
///
/// ```
/// use scenecraft_segment::find_break_points;
///
/// let breaks = find_break_points("비가 왔다. 그런데 해가 떴다.");
/// assert_eq!(breaks, vec![15, 25, 39]);
///
/// assert!(find_break_points("짧은문장").is_empty());
/// ```
pub fn find_break_points(content: &str) -> Vec<usize> {
    let mut break_points: Vec<usize> = BREAK_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(content).map(|m| m.end()))
        .collect();

    break_points.sort_unstable();
    break_points.dedup();
    break_points
}
