//! SQLite summary store implementation.
//!
//! Implements `SummaryStore` from `feeler-core` using sqlx with split
//! read/write pools. Stamps each row with the current calendar date and
//! time-of-day at append time.

use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::Row;

use feeler_core::store::summaries::SummaryStore;
use feeler_types::error::RepositoryError;
use feeler_types::summary::{EmotionPayload, SessionSummary};
use feeler_types::user::UserId;

use super::pool::DatabasePool;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// SQLite-backed implementation of `SummaryStore`.
pub struct SqliteSummaryStore {
    pool: DatabasePool,
}

impl SqliteSummaryStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row type
// ---------------------------------------------------------------------------

struct SummaryRow {
    id: i64,
    user_id: String,
    date_str: String,
    time_str: String,
    emotion_json: String,
    topic_summary: String,
}

impl SummaryRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            date_str: row.try_get("date_str")?,
            time_str: row.try_get("time_str")?,
            emotion_json: row.try_get("emotion_json")?,
            topic_summary: row.try_get("topic_summary")?,
        })
    }

    fn into_summary(self) -> Result<SessionSummary, RepositoryError> {
        let date = NaiveDate::parse_from_str(&self.date_str, DATE_FORMAT)
            .map_err(|e| RepositoryError::Query(format!("invalid date: {e}")))?;
        let time_of_day = NaiveTime::parse_from_str(&self.time_str, TIME_FORMAT)
            .map_err(|e| RepositoryError::Query(format!("invalid time: {e}")))?;
        let emotions: EmotionPayload = serde_json::from_str(&self.emotion_json)
            .map_err(|e| RepositoryError::Query(format!("invalid emotion JSON: {e}")))?;

        Ok(SessionSummary {
            id: self.id,
            user_id: UserId::new(&self.user_id),
            date,
            time_of_day,
            emotions,
            topic_summary: self.topic_summary,
        })
    }
}

// ---------------------------------------------------------------------------
// SummaryStore impl
// ---------------------------------------------------------------------------

impl SummaryStore for SqliteSummaryStore {
    async fn append(
        &self,
        user_id: &UserId,
        emotions: &EmotionPayload,
        topic_summary: &str,
    ) -> Result<SessionSummary, RepositoryError> {
        let now = Utc::now();
        let date_str = now.format(DATE_FORMAT).to_string();
        let time_str = now.format(TIME_FORMAT).to_string();

        let emotion_json = serde_json::to_string(emotions)
            .map_err(|e| RepositoryError::Query(format!("serialize emotions: {e}")))?;

        let result = sqlx::query(
            r#"INSERT INTO session_summaries
               (user_id, date_str, time_str, emotion_json, topic_summary)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(user_id.as_str())
        .bind(&date_str)
        .bind(&time_str)
        .bind(&emotion_json)
        .bind(topic_summary)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        // Re-parse the stamped strings so the returned record matches what
        // a later read would produce (second precision, no sub-seconds).
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .map_err(|e| RepositoryError::Query(format!("invalid date: {e}")))?;
        let time_of_day = NaiveTime::parse_from_str(&time_str, TIME_FORMAT)
            .map_err(|e| RepositoryError::Query(format!("invalid time: {e}")))?;

        Ok(SessionSummary {
            id: result.last_insert_rowid(),
            user_id: user_id.clone(),
            date,
            time_of_day,
            emotions: emotions.clone(),
            topic_summary: topic_summary.to_string(),
        })
    }

    async fn recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<SessionSummary>, RepositoryError> {
        if limit == 0 {
            return Err(RepositoryError::InvalidLimit(0));
        }

        let rows = sqlx::query(
            r#"SELECT * FROM session_summaries
               WHERE user_id = ?
               ORDER BY id DESC
               LIMIT ?"#,
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        // Newest-to-oldest, no reversal.
        let mut summaries = Vec::with_capacity(rows.len());
        for row in &rows {
            let r = SummaryRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            summaries.push(r.into_summary()?);
        }
        Ok(summaries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;
    use serde_json::json;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn payload(value: serde_json::Value) -> EmotionPayload {
        EmotionPayload::from_json(value.as_object().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_user_returns_empty() {
        let store = SqliteSummaryStore::new(test_pool().await);
        let summaries = store.recent(&UserId::new("nobody"), 5).await.unwrap();
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn test_append_stamps_date_and_time() {
        let store = SqliteSummaryStore::new(test_pool().await);
        let user = UserId::new("alice");

        let before = Utc::now().date_naive();
        let summary = store
            .append(&user, &EmotionPayload::default(), "talked about hiking")
            .await
            .unwrap();

        assert_eq!(summary.date, before);
        assert_eq!(summary.topic_summary, "talked about hiking");
    }

    #[tokio::test]
    async fn test_recent_is_newest_to_oldest() {
        let store = SqliteSummaryStore::new(test_pool().await);
        let user = UserId::new("alice");
        let emotions = EmotionPayload::default();

        store.append(&user, &emotions, "first").await.unwrap();
        store.append(&user, &emotions, "second").await.unwrap();
        store.append(&user, &emotions, "third").await.unwrap();

        let summaries = store.recent(&user, 2).await.unwrap();
        let topics: Vec<&str> = summaries.iter().map(|s| s.topic_summary.as_str()).collect();
        assert_eq!(topics, ["third", "second"]);
    }

    #[tokio::test]
    async fn test_emotions_roundtrip() {
        let store = SqliteSummaryStore::new(test_pool().await);
        let user = UserId::new("alice");
        let emotions = payload(json!({"joy": 0.9, "sadness": 0.05}));

        store.append(&user, &emotions, "a good day").await.unwrap();

        let summaries = store.recent(&user, 1).await.unwrap();
        assert_eq!(summaries[0].emotions, emotions);
    }

    #[tokio::test]
    async fn test_empty_topic_summary_is_stored() {
        let store = SqliteSummaryStore::new(test_pool().await);
        let user = UserId::new("alice");

        store
            .append(&user, &EmotionPayload::default(), "")
            .await
            .unwrap();

        let summaries = store.recent(&user, 1).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].topic_summary.is_empty());
    }

    #[tokio::test]
    async fn test_recent_zero_limit_rejected() {
        let store = SqliteSummaryStore::new(test_pool().await);
        let err = store.recent(&UserId::new("alice"), 0).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidLimit(0)));
    }
}
