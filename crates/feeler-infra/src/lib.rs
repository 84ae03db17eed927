//! Infrastructure implementations for Feeler.
//!
//! SQLite-backed stores, the OpenAI-compatible generation client, the
//! lexicon emotion classifier, and configuration loading. Everything here
//! implements the "port" traits defined in `feeler-core`.

pub mod config;
pub mod emotion;
pub mod llm;
pub mod sqlite;

use std::path::PathBuf;

/// Resolve the data directory from `FEELER_DATA_DIR`, falling back to
/// `~/.feeler`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FEELER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".feeler")
}
