//! Emotion classification backends.

pub mod lexicon;

pub use lexicon::LexiconClassifier;
