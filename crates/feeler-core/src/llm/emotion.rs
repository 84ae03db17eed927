//! EmotionClassifier trait definition.
//!
//! Classification is a pure, synchronous call with no side effects on
//! state. The label rides along in the chat response; it never influences
//! what gets stored.

/// Trait for emotion classification backends.
pub trait EmotionClassifier: Send + Sync {
    /// Classify a message into an emotion label.
    fn classify(&self, text: &str) -> String;
}
