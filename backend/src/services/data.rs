//! Per-user category storage
//!
//! Latest values are served through the read-through cache. Cache entries
//! hold `Option<DataRecord>`: writes store the committed record, deletes
//! store `null` so a racing read cannot bring the removed value back.

use crate::cache::{data_key, DataCache};
use crate::error::ApiError;
use crate::repositories::DataRepository;
use crate::telemetry;
use prakriti_shared::types::{DataRecord, DeletionSummary, HistoryEntry};
use prakriti_shared::validation::validate_category;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Effective history page size: default when absent, clamped to 1..=100
pub fn history_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

fn check_category(category: &str) -> Result<(), ApiError> {
    validate_category(category).map_err(|msg| ApiError::invalid_field("category", msg))
}

fn not_found(category: &str) -> ApiError {
    ApiError::NotFound(format!("No data stored for '{}'", category))
}

fn latest_or_not_found(category: &str, entry: Option<DataRecord>) -> Result<DataRecord, ApiError> {
    entry.ok_or_else(|| not_found(category))
}

pub struct DataService;

impl DataService {
    /// Store a value as the latest for its category and append it to history
    pub async fn put(
        pool: &PgPool,
        cache: &DataCache,
        user_id: Uuid,
        category: &str,
        data: serde_json::Value,
    ) -> Result<DataRecord, ApiError> {
        check_category(category)?;

        let record: DataRecord = DataRepository::save(pool, user_id, category, &data)
            .await
            .map_err(ApiError::Internal)?
            .into();

        cache.set(&data_key(user_id, category), &Some(&record)).await;
        telemetry::record_data_write(category);
        debug!(%user_id, category, "Stored category value");

        Ok(record)
    }

    /// Most recent value, or `NotFound` when the category was never written
    pub async fn get(
        pool: &PgPool,
        cache: &DataCache,
        user_id: Uuid,
        category: &str,
    ) -> Result<DataRecord, ApiError> {
        check_category(category)?;

        let key = data_key(user_id, category);
        if let Some(entry) = cache.get::<Option<DataRecord>>(&key).await {
            return latest_or_not_found(category, entry);
        }

        let entry: Option<DataRecord> = DataRepository::get_latest(pool, user_id, category)
            .await
            .map_err(ApiError::Internal)?
            .map(DataRecord::from);

        cache.fill(&key, &entry).await;
        latest_or_not_found(category, entry)
    }

    /// Newest-first history for a category
    pub async fn history(
        pool: &PgPool,
        user_id: Uuid,
        category: &str,
        limit: Option<i64>,
    ) -> Result<Vec<HistoryEntry>, ApiError> {
        check_category(category)?;

        let records = DataRepository::get_history(pool, user_id, category, history_limit(limit))
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(HistoryEntry::from).collect())
    }

    /// Drop the latest value; history is kept
    pub async fn delete(
        pool: &PgPool,
        cache: &DataCache,
        user_id: Uuid,
        category: &str,
    ) -> Result<(), ApiError> {
        check_category(category)?;

        let deleted = DataRepository::delete(pool, user_id, category)
            .await
            .map_err(ApiError::Internal)?;

        cache.set(&data_key(user_id, category), &None::<DataRecord>).await;

        if deleted {
            Ok(())
        } else {
            Err(not_found(category))
        }
    }

    /// Erase all latest values and history for a user
    pub async fn delete_all(
        pool: &PgPool,
        cache: &DataCache,
        user_id: Uuid,
    ) -> Result<DeletionSummary, ApiError> {
        let categories = DataRepository::list_categories(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let deleted = DataRepository::delete_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        for category in &categories {
            cache.set(&data_key(user_id, category), &None::<DataRecord>).await;
        }

        let summary = DeletionSummary {
            records: deleted.records,
            history_entries: deleted.history_entries,
        };
        info!(%user_id, removed = summary.total(), "Erased user data");

        Ok(summary)
    }
}
