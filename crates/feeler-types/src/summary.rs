//! Session summary and emotion payload types for Feeler.
//!
//! A session summary is the durable memory produced by end-of-session
//! compression: one row per session-end call, stamped with the calendar
//! date and time-of-day, carrying the emotion signals captured by the
//! client and a one-sentence topic summary.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::user::UserId;

/// Client-supplied emotion signals captured at session end.
///
/// Typed mapping from emotion labels to numeric scores, validated on
/// ingress so the core never handles untyped dictionaries. BTreeMap keeps
/// serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionPayload(BTreeMap<String, f64>);

impl EmotionPayload {
    pub fn new(scores: BTreeMap<String, f64>) -> Self {
        Self(scores)
    }

    /// Validate an untyped JSON mapping into a typed payload.
    ///
    /// Every value must be a finite JSON number; anything else is rejected
    /// at the boundary.
    pub fn from_json(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self, String> {
        let mut scores = BTreeMap::new();
        for (label, value) in map {
            let score = value
                .as_f64()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("emotion '{label}' must be a numeric score"))?;
            scores.insert(label.clone(), score);
        }
        Ok(Self(scores))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.0
    }
}

/// A compressed record of one chat session.
///
/// Immutable once written. `id` is assigned by the summary store and is
/// the only meaningful ordering key. `topic_summary` may be empty when the
/// compression produced nothing; such rows are excluded from the memory
/// digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: i64,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
    pub emotions: EmotionPayload,
    pub topic_summary: String,
}
