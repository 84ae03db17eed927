//! Keyword-lexicon emotion classifier.
//!
//! A pure, synchronous classifier that scores a message against small
//! per-emotion keyword lists and returns the best-scoring label, or
//! "neutral" when nothing matches. It stands in for a heavier model
//! behind the same `EmotionClassifier` seam; the label only rides along
//! in the chat response and never influences what gets stored.

use feeler_core::llm::emotion::EmotionClassifier;

/// Per-emotion keyword lists, checked as lower-cased substrings.
const LEXICON: &[(&str, &[&str])] = &[
    (
        "joy",
        &["happy", "glad", "great", "awesome", "love", "excited", "yay", "wonderful"],
    ),
    (
        "sadness",
        &["sad", "down", "depressed", "miss", "cry", "lonely", "unhappy", "lost"],
    ),
    (
        "anger",
        &["angry", "mad", "furious", "hate", "annoyed", "unfair", "frustrated"],
    ),
    (
        "fear",
        &["scared", "afraid", "worried", "anxious", "nervous", "panic", "terrified"],
    ),
    (
        "surprise",
        &["wow", "surprised", "unexpected", "unbelievable", "no way"],
    ),
];

const NEUTRAL: &str = "neutral";

/// Lexicon-backed implementation of `EmotionClassifier`.
#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl EmotionClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        let mut best = NEUTRAL;
        let mut best_score = 0usize;
        for (label, keywords) in LEXICON {
            let score = keywords.iter().filter(|k| lowered.contains(*k)).count();
            if score > best_score {
                best = label;
                best_score = score;
            }
        }

        best.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_joy() {
        let c = LexiconClassifier::new();
        assert_eq!(c.classify("I'm so happy today, it was awesome"), "joy");
    }

    #[test]
    fn test_classify_sadness() {
        let c = LexiconClassifier::new();
        assert_eq!(c.classify("i miss my old dog, feeling sad"), "sadness");
    }

    #[test]
    fn test_classify_neutral_when_no_match() {
        let c = LexiconClassifier::new();
        assert_eq!(c.classify("what time is the meeting"), NEUTRAL);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let c = LexiconClassifier::new();
        assert_eq!(c.classify("I AM FURIOUS"), "anger");
    }

    #[test]
    fn test_more_matches_win() {
        let c = LexiconClassifier::new();
        // One joy keyword, two fear keywords.
        assert_eq!(c.classify("great, but i'm worried and anxious"), "fear");
    }
}
