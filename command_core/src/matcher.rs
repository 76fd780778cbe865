//! Intent matcher - picks the single best intent for an utterance

use crate::patterns::IntentPatterns;
use crate::similarity::{normalize, score_patterns};
use crate::types::{IntentKey, MatchResult};

/// Minimum winning score for an intent to be accepted
pub const ACCEPT_THRESHOLD: f64 = 0.7;

/// Match a raw utterance against a pattern library
///
/// The winner is the intent with the strictly highest score; ties keep the
/// intent that appears first in `library`. Below `threshold` the result has
/// no intent but still carries the best score seen.
pub fn match_intent(utterance: &str, library: &[IntentPatterns], threshold: f64) -> MatchResult {
    let normalized = normalize(utterance);

    let mut best: Option<IntentKey> = None;
    let mut best_score = 0.0;

    for entry in library {
        if entry.inert {
            continue;
        }
        let score = score_patterns(&normalized, &entry.phrases);
        tracing::trace!(intent = %entry.key, score, "scored intent");
        if score > best_score {
            best_score = score;
            best = Some(entry.key);
        }
    }

    if best.is_some() && best_score >= threshold {
        tracing::debug!(intent = ?best, score = best_score, "utterance matched");
        MatchResult {
            intent: best,
            score: best_score,
        }
    } else {
        tracing::debug!(score = best_score, "no intent above threshold");
        MatchResult {
            intent: None,
            score: best_score,
        }
    }
}
