//! Normalized user identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user identifier normalized to a single case.
///
/// All store reads and writes key on the normalized form, so `"Alice"` and
/// `"alice"` address the same per-user logs. Construction is the only place
/// normalization happens; everything downstream can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Normalize a raw identifier (case-fold, trim surrounding whitespace).
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_case_folds() {
        assert_eq!(UserId::new("Alice"), UserId::new("alice"));
        assert_eq!(UserId::new("ALICE").as_str(), "alice");
    }

    #[test]
    fn test_user_id_trims_whitespace() {
        assert_eq!(UserId::new("  bob "), UserId::new("bob"));
    }

    #[test]
    fn test_user_id_empty() {
        assert!(UserId::new("   ").is_empty());
        assert!(!UserId::new("carol").is_empty());
    }
}
