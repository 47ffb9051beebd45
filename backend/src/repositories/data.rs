//! Per-user category storage: latest value plus append-only history

use anyhow::Result;
use chrono::{DateTime, Utc};
use prakriti_shared::types::{DataRecord, HistoryEntry};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Latest value row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserDataRecord {
    pub user_id: Uuid,
    pub category: String,
    pub payload: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl From<UserDataRecord> for DataRecord {
    fn from(record: UserDataRecord) -> Self {
        DataRecord {
            category: record.category,
            data: record.payload,
            updated_at: record.updated_at,
        }
    }
}

/// History row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserDataHistoryRecord {
    pub id: i64,
    pub user_id: Uuid,
    pub category: String,
    pub payload: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

impl From<UserDataHistoryRecord> for HistoryEntry {
    fn from(record: UserDataHistoryRecord) -> Self {
        HistoryEntry {
            id: record.id,
            category: record.category,
            data: record.payload,
            recorded_at: record.recorded_at,
        }
    }
}

/// Row counts removed by [`DataRepository::delete_all`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DeletedRows {
    pub records: u64,
    pub history_entries: u64,
}

pub struct DataRepository;

impl DataRepository {
    /// Upsert the latest value and append a history row atomically
    pub async fn save(
        pool: &PgPool,
        user_id: Uuid,
        category: &str,
        payload: &serde_json::Value,
    ) -> Result<UserDataRecord> {
        let mut tx = pool.begin().await?;
        let record = Self::write(&mut *tx, user_id, category, payload).await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Save several categories in one transaction; all or nothing
    pub async fn save_many(
        pool: &PgPool,
        user_id: Uuid,
        entries: &[(&str, serde_json::Value)],
    ) -> Result<Vec<UserDataRecord>> {
        let mut tx = pool.begin().await?;
        let mut records = Vec::with_capacity(entries.len());
        for (category, payload) in entries {
            records.push(Self::write(&mut *tx, user_id, category, payload).await?);
        }
        tx.commit().await?;

        Ok(records)
    }

    async fn write(
        conn: &mut PgConnection,
        user_id: Uuid,
        category: &str,
        payload: &serde_json::Value,
    ) -> Result<UserDataRecord> {
        let record = sqlx::query_as::<_, UserDataRecord>(
            r#"
            INSERT INTO user_data (user_id, category, payload, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, category)
            DO UPDATE SET payload = EXCLUDED.payload, updated_at = EXCLUDED.updated_at
            RETURNING user_id, category, payload, updated_at
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(payload)
        .fetch_one(&mut *conn)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_data_history (user_id, category, payload, recorded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(payload)
        .bind(record.updated_at)
        .execute(&mut *conn)
        .await?;

        Ok(record)
    }

    /// Most recent value for a category
    pub async fn get_latest(
        pool: &PgPool,
        user_id: Uuid,
        category: &str,
    ) -> Result<Option<UserDataRecord>> {
        let record = sqlx::query_as::<_, UserDataRecord>(
            r#"
            SELECT user_id, category, payload, updated_at
            FROM user_data
            WHERE user_id = $1 AND category = $2
            "#,
        )
        .bind(user_id)
        .bind(category)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// History for a category, newest first
    pub async fn get_history(
        pool: &PgPool,
        user_id: Uuid,
        category: &str,
        limit: i64,
    ) -> Result<Vec<UserDataHistoryRecord>> {
        let records = sqlx::query_as::<_, UserDataHistoryRecord>(
            r#"
            SELECT id, user_id, category, payload, recorded_at
            FROM user_data_history
            WHERE user_id = $1 AND category = $2
            ORDER BY recorded_at DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Remove the latest value; history is kept
    pub async fn delete(pool: &PgPool, user_id: Uuid, category: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"DELETE FROM user_data WHERE user_id = $1 AND category = $2"#,
        )
        .bind(user_id)
        .bind(category)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Categories that currently hold a value
    pub async fn list_categories(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            r#"SELECT category FROM user_data WHERE user_id = $1 ORDER BY category"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Erase every latest value and history row for a user
    pub async fn delete_all(pool: &PgPool, user_id: Uuid) -> Result<DeletedRows> {
        let mut tx = pool.begin().await?;

        let records = sqlx::query(r#"DELETE FROM user_data WHERE user_id = $1"#)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let history_entries = sqlx::query(r#"DELETE FROM user_data_history WHERE user_id = $1"#)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(DeletedRows {
            records,
            history_entries,
        })
    }
}
