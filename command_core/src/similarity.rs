//! Utterance normalization and per-pattern scoring
//!
//! Scores are evaluated in a fixed precedence order and short-circuit at
//! the first rule that fires:
//! 1. Exact match → 1.0
//! 2. Pattern contained in the utterance → 0.9
//! 3. Word overlap ≥ 0.7 → matched pattern words / pattern words

use ahash::AHashSet;
use regex::Regex;
use std::sync::LazyLock;

pub const EXACT_SCORE: f64 = 1.0;
pub const CONTAINMENT_SCORE: f64 = 0.9;
pub const WORD_OVERLAP_MIN: f64 = 0.7;

static STRIPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("Invalid regex pattern"));

/// Lowercase and strip the fixed punctuation class
///
/// Apostrophes, question marks and other punctuation are left in place.
pub fn normalize(utterance: &str) -> String {
    STRIPPED.replace_all(&utterance.to_lowercase(), "").into_owned()
}

/// Score one normalized utterance against one pattern (0.0-1.0)
///
/// The pattern goes through the same normalization as the utterance.
/// Empty patterns never match.
pub fn score_pattern(normalized: &str, pattern: &str) -> f64 {
    let utterance_words: AHashSet<&str> = normalized.split_whitespace().collect();
    score_against(normalized, &utterance_words, pattern)
}

/// Best score of a normalized utterance across an intent's variants
pub fn score_patterns(normalized: &str, patterns: &[String]) -> f64 {
    let utterance_words: AHashSet<&str> = normalized.split_whitespace().collect();
    let mut best = 0.0;

    for pattern in patterns {
        let score = score_against(normalized, &utterance_words, pattern);
        if score > best {
            best = score;
            if best >= EXACT_SCORE {
                break;
            }
        }
    }

    best
}

fn score_against(normalized: &str, utterance_words: &AHashSet<&str>, pattern: &str) -> f64 {
    let pattern = normalize(pattern);
    if pattern.is_empty() {
        return 0.0;
    }

    if normalized == pattern {
        return EXACT_SCORE;
    }

    if normalized.contains(pattern.as_str()) {
        return CONTAINMENT_SCORE;
    }

    word_overlap(utterance_words, &pattern)
}

fn word_overlap(utterance_words: &AHashSet<&str>, pattern: &str) -> f64 {
    let pattern_words: Vec<&str> = pattern.split_whitespace().collect();
    if pattern_words.is_empty() {
        return 0.0;
    }

    let matched = pattern_words
        .iter()
        .filter(|w| utterance_words.contains(*w))
        .count();
    let score = matched as f64 / pattern_words.len() as f64;

    if score >= WORD_OVERLAP_MIN {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_fixed_class_only() {
        assert_eq!(normalize("Go to Dashboard!"), "go to dashboard");
        assert_eq!(normalize("log-out, (now)."), "logout now");
        assert_eq!(normalize("what's up?"), "what's up?");
        assert_eq!(normalize("a/b#c$d%e^f&g*h;i:j{k}l=m_n`o~p"), "abcdefghijklmnop");
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(score_pattern("open profile", "open profile"), 1.0);
        assert_eq!(score_pattern("open profile", "Open Profile"), 1.0);
    }

    #[test]
    fn test_containment() {
        assert_eq!(score_pattern("please open profile now", "open profile"), 0.9);
    }

    #[test]
    fn test_word_overlap_accepted() {
        // 3 of 4 pattern words present
        assert_eq!(score_pattern("show the records of mine", "show my records mine"), 0.75);
    }

    #[test]
    fn test_word_overlap_rejected() {
        // 2 of 3 pattern words present
        assert_eq!(score_pattern("take me to the dashboard", "go to dashboard"), 0.0);
    }

    #[test]
    fn test_duplicate_pattern_words_count_each_time() {
        // "to" appears twice in the pattern and both count
        assert_eq!(score_pattern("please to to", "i want to go to"), 0.0);
        assert_eq!(score_pattern("go to want i", "i want to go to x"), 5.0 / 6.0);
    }

    #[test]
    fn test_pattern_with_stripped_punctuation() {
        assert_eq!(score_pattern(&normalize("log-in"), "log-in"), 1.0);
        assert_eq!(score_pattern(&normalize("please log-in"), "log-in"), 0.9);
        assert_eq!(score_pattern("login", "Log-In!"), 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(score_pattern("", "help"), 0.0);
        assert_eq!(score_pattern("help", ""), 0.0);
        assert_eq!(score_pattern("", ""), 0.0);
    }

    #[test]
    fn test_score_patterns_takes_maximum() {
        let patterns = vec![
            "go to dashboard".to_string(),
            "please go to dashboard".to_string(),
        ];
        assert_eq!(score_patterns("please take me to the dashboard", &patterns), 0.75);
        assert_eq!(score_patterns("go to dashboard", &patterns), 1.0);
        assert_eq!(score_patterns("", &patterns), 0.0);
    }

    #[test]
    fn test_score_patterns_agrees_with_score_pattern() {
        let patterns = vec!["find a doctor".to_string(), "find doctor".to_string()];
        for input in ["find doctor", "i need to find a doctor", "doctor find", "hello"] {
            let best = patterns
                .iter()
                .map(|p| score_pattern(input, p))
                .fold(0.0, f64::max);
            assert_eq!(score_patterns(input, &patterns), best);
        }
    }
}
