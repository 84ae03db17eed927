//! Collaborator trait definitions (generation and emotion classification).

pub mod emotion;
pub mod provider;

pub use emotion::EmotionClassifier;
pub use provider::LlmProvider;
