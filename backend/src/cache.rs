//! Redis read-through cache for latest category values
//!
//! Every operation is best-effort: a missing connection or a Redis error
//! behaves like a cache miss and is logged, never surfaced to the caller.
//!
//! Writers overwrite the cached entry with the value they just committed.
//! Readers only fill an absent key (`SET NX`), so a read that raced a
//! write can never replace the newer entry with the row it loaded earlier.

use redis::aio::ConnectionManager;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Cache key for a user's latest value in a category
pub fn data_key(user_id: Uuid, category: &str) -> String {
    format!("data:{}:{}", user_id, category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    IfAbsent,
}

fn set_command(key: &str, payload: &str, ttl_secs: u64, mode: WriteMode) -> redis::Cmd {
    let mut cmd = redis::cmd("SET");
    cmd.arg(key).arg(payload).arg("EX").arg(ttl_secs);
    if mode == WriteMode::IfAbsent {
        cmd.arg("NX");
    }
    cmd
}

/// Thin wrapper over an optional Redis connection
#[derive(Clone)]
pub struct DataCache {
    conn: Option<ConnectionManager>,
    ttl_secs: u64,
}

impl DataCache {
    pub fn new(conn: Option<ConnectionManager>, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }

    /// Cache that never stores anything
    pub fn disabled() -> Self {
        Self::new(None, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.conn.is_some() && self.ttl_secs > 0
    }

    /// Fetch and decode a cached value
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut conn = self.connection()?;

        let raw = match redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await
        {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "Cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "Cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable cache entry");
                self.invalidate(key).await;
                None
            }
        }
    }

    /// Store a freshly written value, replacing whatever is cached
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        self.store(key, value, WriteMode::Overwrite).await;
    }

    /// Populate a key from a read; leaves an existing entry untouched
    pub async fn fill<T: Serialize>(&self, key: &str, value: &T) {
        self.store(key, value, WriteMode::IfAbsent).await;
    }

    async fn store<T: Serialize>(&self, key: &str, value: &T, mode: WriteMode) {
        let Some(mut conn) = self.connection() else {
            return;
        };

        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode cache entry");
                return;
            }
        };

        // NX replies nil when the key exists, so read the reply as optional
        if let Err(e) = set_command(key, &payload, self.ttl_secs, mode)
            .query_async::<_, Option<String>>(&mut conn)
            .await
        {
            warn!(key, error = %e, "Cache write failed");
        }
    }

    /// Drop a cached value
    pub async fn invalidate(&self, key: &str) {
        let Some(mut conn) = self.connection() else {
            return;
        };

        if let Err(e) = redis::cmd("DEL")
            .arg(key)
            .query_async::<_, ()>(&mut conn)
            .await
        {
            warn!(key, error = %e, "Cache invalidation failed");
        }
    }

    fn connection(&self) -> Option<ConnectionManager> {
        if self.ttl_secs == 0 {
            return None;
        }
        self.conn.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_key_format() {
        let user_id = Uuid::nil();
        assert_eq!(
            data_key(user_id, "constitution"),
            "data:00000000-0000-0000-0000-000000000000:constitution"
        );
    }

    fn packed(cmd: &redis::Cmd) -> String {
        String::from_utf8_lossy(&cmd.get_packed_command()).into_owned()
    }

    #[test]
    fn test_read_fill_only_sets_absent_keys() {
        let cmd = set_command("data:u:lifestyle", "{}", 300, WriteMode::IfAbsent);
        let text = packed(&cmd);
        assert!(text.contains("SET"));
        assert!(text.contains("EX"));
        assert!(text.contains("300"));
        assert!(text.contains("NX"));
    }

    #[test]
    fn test_write_through_overwrites() {
        let cmd = set_command("data:u:lifestyle", "{}", 300, WriteMode::Overwrite);
        assert!(!packed(&cmd).contains("NX"));
    }

    #[tokio::test]
    async fn test_disabled_cache_is_a_miss() {
        let cache = DataCache::disabled();
        assert!(!cache.is_enabled());
        cache.set("data:x:y", &serde_json::json!({ "a": 1 })).await;
        cache.fill("data:x:y", &serde_json::json!({ "a": 2 })).await;
        assert_eq!(cache.get::<serde_json::Value>("data:x:y").await, None);
        cache.invalidate("data:x:y").await;
    }
}
