//! Persistence Adapter: one key-value slot holding the JSON document.
//!
//! `KeyValueStore` is the seam; `AppState` carries an `Arc<dyn KeyValueStore>`
//! chosen at startup from `STORAGE_BACKEND`.

pub mod file;
pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::resume::ResumeDocument;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Storage key the whole document lives under.
pub const RESUME_KEY: &str = "resumeData";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    /// Backend name, for logs.
    fn backend(&self) -> &'static str;
}

/// Saves and restores the resume under [`RESUME_KEY`].
#[derive(Clone)]
pub struct ResumeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ResumeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, doc: &ResumeDocument) -> Result<(), StorageError> {
        let payload = serde_json::to_string(doc)?;
        self.store.set(RESUME_KEY, payload).await?;
        info!(
            "Saved resume ({} experience, {} education, {} skills) to {} store",
            doc.experience.len(),
            doc.education.len(),
            doc.skills.len(),
            self.store.backend()
        );
        Ok(())
    }

    /// Restores the saved document. A missing slot, a corrupt payload, or an
    /// unreachable backend all yield `None`; the caller starts empty.
    pub async fn load(&self) -> Option<ResumeDocument> {
        let payload = match self.store.get(RESUME_KEY).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                info!("No saved resume found in {} store", self.store.backend());
                return None;
            }
            Err(e) => {
                warn!("Could not read saved resume: {e}");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("Ignoring corrupt saved resume: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{self, EducationField, SkillDraft};
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, SkillType};

    fn repo() -> (ResumeRepository, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (ResumeRepository::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let (repo, _) = repo();
        assert!(repo.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let (repo, _) = repo();
        let doc = document::set_personal_info(
            &Default::default(),
            PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                ..Default::default()
            },
        );
        let (doc, _) = document::add_entry(&doc, ExperienceEntry::default());
        let (doc, edu) = document::add_entry(&doc, EducationEntry::default());
        let doc = document::update_entry_field::<EducationEntry>(
            &doc,
            edu,
            EducationField::Degree("BSc".to_string()),
        );
        let doc = document::toggle_current::<EducationEntry>(&doc, edu);
        let doc = document::add_skill_category(&doc, SkillType::Soft, "Mentoring");
        let (doc, _) = document::add_skill(
            &doc,
            SkillDraft {
                name: "Coaching".to_string(),
                category: "Mentoring".to_string(),
                skill_type: SkillType::Soft,
                ..Default::default()
            },
        )
        .unwrap();

        repo.save(&doc).await.unwrap();
        assert_eq!(repo.load().await, Some(doc));
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_none() {
        let (repo, store) = repo();
        store
            .set(RESUME_KEY, "{not json".to_string())
            .await
            .unwrap();
        assert!(repo.load().await.is_none());
    }

    #[tokio::test]
    async fn test_stored_json_uses_camel_case_layout() {
        let (repo, store) = repo();
        let (doc, id) = document::add_entry(&Default::default(), ExperienceEntry::default());
        repo.save(&doc).await.unwrap();
        let raw = store.get(RESUME_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["experience"][0]["id"], serde_json::json!(id.to_string()));
        assert!(value["experience"][0].get("startDate").is_some());
    }
}
