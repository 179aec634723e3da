use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;

use crate::storage::{KeyValueStore, StorageError};

/// Redis-backed slot. Keys are namespaced under `prefix`.
pub struct RedisStore {
    client: redis::Client,
    prefix: String,
}

impl RedisStore {
    pub fn new(redis_url: &str, prefix: impl Into<String>) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)?;
        info!("Redis client initialized");
        Ok(Self {
            client,
            prefix: prefix.into(),
        })
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{key}", self.prefix)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(self.namespaced(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(self.namespaced(key), value).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        let store = RedisStore::new("redis://127.0.0.1:6379", "resume-builder").unwrap();
        assert_eq!(store.namespaced("resumeData"), "resume-builder:resumeData");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(
            RedisStore::new("not a url", "x"),
            Err(StorageError::Redis(_))
        ));
    }
}
