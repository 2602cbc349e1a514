//! Descriptive phrases used to enrich image prompts.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Most phrases kept per scene.
pub const MAX_KEY_PHRASES: usize = 3;

/// Descriptive constructions, in priority order.
///
/// Adjective + noun (아름다운 숲 style `-한` forms), possessive `-의`,
/// locative `-에서`, and subject marker `-이`.
pub const KEY_PHRASE_PATTERNS: &[&str] = &[
    r"[가-힣]+한\s+[가-힣]+",
    r"[가-힣]+의\s+[가-힣]+",
    r"[가-힣]+에서\s*[가-힣]+",
    r"[가-힣]+이\s+[가-힣]+",
];

static PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEY_PHRASE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Valid key phrase regex"))
        .collect()
});

/// Extract up to three descriptive phrases from a scene's text.
///
/// Matches are gathered pattern by pattern, deduplicated keeping the first
/// occurrence, and truncated to [`MAX_KEY_PHRASES`].
///
/// # Examples
///
/// ```
/// use scenecraft_segment::extract_key_phrases;
///
/// let phrases = extract_key_phrases("소녀의 마음이 따뜻했습니다.");
/// assert_eq!(phrases, vec!["소녀의 마음이", "마음이 따뜻했습니다"]);
///
/// assert!(extract_key_phrases("안녕하세요.").is_empty());
/// ```
pub fn extract_key_phrases(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    PHRASE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str()))
        .filter(|phrase| seen.insert(*phrase))
        .take(MAX_KEY_PHRASES)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locative_phrase() {
        let phrases = extract_key_phrases("아름다운 숲에서 작은 토끼가 뛰어다녔습니다.");
        assert_eq!(phrases, vec!["숲에서 작은"]);
    }

    #[test]
    fn test_pattern_order_and_limit() {
        let text = "용감한 소년의 작은 배가 바다에서 출발했다. 조용한 마을이 잠들었다. 소년의 꿈이 자랐다.";
        let phrases = extract_key_phrases(text);

        // Both adjective matches come before any possessive match
        assert_eq!(phrases, vec!["용감한 소년의", "조용한 마을이", "소년의 작은"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let phrases = extract_key_phrases("친절한 사람 친절한 사람 친절한 사람");
        assert_eq!(phrases, vec!["친절한 사람"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_key_phrases("").is_empty());
    }
}
