//! SQLite turn store implementation.
//!
//! Implements `TurnStore` from `feeler-core` using sqlx with split
//! read/write pools. Rows are materialized through a typed row struct at
//! the boundary, never positional tuples.

use chrono::{DateTime, Utc};
use sqlx::Row;

use feeler_core::store::turns::TurnStore;
use feeler_types::chat::{ChatTurn, Sender};
use feeler_types::error::RepositoryError;
use feeler_types::user::UserId;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TurnStore`.
pub struct SqliteTurnStore {
    pool: DatabasePool,
}

impl SqliteTurnStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row type
// ---------------------------------------------------------------------------

struct TurnRow {
    id: i64,
    user_id: String,
    sender: String,
    message: String,
    created_at: String,
}

impl TurnRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            sender: row.try_get("sender")?,
            message: row.try_get("message")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_turn(self) -> Result<ChatTurn, RepositoryError> {
        let sender: Sender = self
            .sender
            .parse()
            .map_err(RepositoryError::Query)?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(ChatTurn {
            id: self.id,
            user_id: UserId::new(&self.user_id),
            sender,
            message: self.message,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

// ---------------------------------------------------------------------------
// TurnStore impl
// ---------------------------------------------------------------------------

impl TurnStore for SqliteTurnStore {
    async fn append(
        &self,
        user_id: &UserId,
        sender: Sender,
        message: &str,
    ) -> Result<ChatTurn, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO chat_turns (user_id, sender, message, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id.as_str())
        .bind(sender.to_string())
        .bind(message)
        .bind(now.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(ChatTurn {
            id: result.last_insert_rowid(),
            user_id: user_id.clone(),
            sender,
            message: message.to_string(),
            created_at: now,
        })
    }

    async fn recent(&self, user_id: &UserId, limit: u32) -> Result<Vec<ChatTurn>, RepositoryError> {
        if limit == 0 {
            return Err(RepositoryError::InvalidLimit(0));
        }

        let rows = sqlx::query(
            r#"SELECT * FROM chat_turns
               WHERE user_id = ?
               ORDER BY id DESC
               LIMIT ?"#,
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let r = TurnRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            turns.push(r.into_turn()?);
        }

        // Selected newest-first; callers get oldest-to-newest.
        turns.reverse();
        Ok(turns)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
