//! Web-settings seeding.

use chrono::{DateTime, Utc};
use humanbench_core::storage::{to_document, DocumentStore, StoreError};
use humanbench_core::web_settings::WebSettings;

use crate::error::{AdminError, Result};

/// What a web-settings seed did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSettingsSeed {
    /// A document was already present and got replaced.
    pub replaced: bool,
    pub settings: WebSettings,
}

/// Overwrites the web settings with the defaults and checks the write landed.
pub async fn seed_web_settings(
    store: &dyn DocumentStore,
    now: DateTime<Utc>,
) -> Result<WebSettingsSeed> {
    let path = WebSettings::path();
    let replaced = store.get(&path).await?.is_some();
    if replaced {
        tracing::info!(%path, "web settings exist, updating");
    } else {
        tracing::info!(%path, "creating web settings");
    }

    let settings = WebSettings::defaults(now);
    store.set(&path, to_document(&settings)?).await?;

    match store.get_required(&path).await {
        Ok(_) => {}
        Err(StoreError::NotFound { path }) => return Err(AdminError::VerificationFailed { path }),
        Err(e) => return Err(e.into()),
    }
    tracing::debug!(%path, "web settings verified");

    Ok(WebSettingsSeed { replaced, settings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use humanbench_core::storage::{
        Document, DocumentPath, StoredDocument, WriteBatch, Result as StoreResult,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    /// Accepts writes and drops them.
    struct BlackHole;

    #[async_trait]
    impl DocumentStore for BlackHole {
        async fn get(&self, _path: &DocumentPath) -> StoreResult<Option<Document>> {
            Ok(None)
        }

        async fn list(&self, _collection: &str) -> StoreResult<Vec<StoredDocument>> {
            Ok(Vec::new())
        }

        async fn commit(&self, batch: WriteBatch) -> StoreResult<Vec<DocumentPath>> {
            Ok(vec![DocumentPath::new("ignored", "ignored"); batch.len()])
        }

        fn max_batch_size(&self) -> usize {
            500
        }

        fn target_display(&self) -> String {
            "black hole".to_string()
        }
    }

    #[tokio::test]
    async fn test_creates_settings() {
        let store = InMemoryStore::new();

        let seed = seed_web_settings(&store, now()).await.unwrap();

        assert!(!seed.replaced);
        assert!(seed.settings.web_game_enabled);
        let document = store.get_required(&WebSettings::path()).await.unwrap();
        assert_eq!(document["webGameEnabled"], true);
        assert_eq!(document["updatedBy"], "system");
    }

    #[tokio::test]
    async fn test_replaces_existing_settings() {
        let store = InMemoryStore::new();
        let mut disabled = WebSettings::defaults(now());
        disabled.web_game_enabled = false;
        store
            .set(&WebSettings::path(), to_document(&disabled).unwrap())
            .await
            .unwrap();

        let seed = seed_web_settings(&store, now()).await.unwrap();

        assert!(seed.replaced);
        let document = store.get_required(&WebSettings::path()).await.unwrap();
        assert_eq!(document["webGameEnabled"], true);
    }

    #[tokio::test]
    async fn test_lost_write_fails_verification() {
        let result = seed_web_settings(&BlackHole, now()).await;

        assert!(matches!(
            result,
            Err(AdminError::VerificationFailed { ref path }) if path == "web_settings/main"
        ));
    }
}
