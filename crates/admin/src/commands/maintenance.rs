//! Maintenance-mode flag.

use chrono::{DateTime, Utc};
use humanbench_core::maintenance::{MaintenanceFlag, MaintenanceStatus, DEFAULT_MAINTENANCE_MESSAGE};
use humanbench_core::storage::{from_document, to_document, DocumentStore};

use crate::error::Result;

/// Turns maintenance mode on. A missing or empty message gets the default one.
pub async fn enable(
    store: &dyn DocumentStore,
    message: Option<String>,
    now: DateTime<Utc>,
) -> Result<MaintenanceFlag> {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MAINTENANCE_MESSAGE.to_string());
    write(store, MaintenanceFlag::enabled(message, now)).await
}

/// Turns maintenance mode off.
pub async fn disable(store: &dyn DocumentStore, now: DateTime<Utc>) -> Result<MaintenanceFlag> {
    write(store, MaintenanceFlag::disabled(now)).await
}

/// Reads the current flag.
pub async fn status(store: &dyn DocumentStore) -> Result<MaintenanceStatus> {
    let status = match store.get(&MaintenanceFlag::path()).await? {
        Some(document) => MaintenanceStatus::Configured(from_document(&document)?),
        None => MaintenanceStatus::NotConfigured,
    };
    tracing::debug!(enabled = status.is_enabled(), "maintenance status read");
    Ok(status)
}

async fn write(store: &dyn DocumentStore, flag: MaintenanceFlag) -> Result<MaintenanceFlag> {
    store
        .set(&MaintenanceFlag::path(), to_document(&flag)?)
        .await?;
    tracing::info!(enabled = flag.enabled, message = %flag.message, "maintenance flag written");
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_status_without_document() {
        let store = InMemoryStore::new();

        let status = status(&store).await.unwrap();

        assert_eq!(status, MaintenanceStatus::NotConfigured);
        assert!(!status.is_enabled());
    }

    #[tokio::test]
    async fn test_enable_then_status() {
        let store = InMemoryStore::new();

        enable(&store, Some("Back in 2 hours".to_string()), now())
            .await
            .unwrap();
        let status = status(&store).await.unwrap();

        assert!(status.is_enabled());
        assert_eq!(status.message(), Some("Back in 2 hours"));
        match status {
            MaintenanceStatus::Configured(flag) => {
                assert_eq!(flag.updated_by, "admin-script");
                assert_eq!(flag.updated_at, Some(now()));
            }
            MaintenanceStatus::NotConfigured => panic!("expected a configured flag"),
        }
    }

    #[tokio::test]
    async fn test_disable_then_status() {
        let store = InMemoryStore::new();

        enable(&store, None, now()).await.unwrap();
        disable(&store, now()).await.unwrap();
        let status = status(&store).await.unwrap();

        assert!(!status.is_enabled());
        assert_eq!(status.message(), Some("App is under maintenance"));
    }

    #[tokio::test]
    async fn test_enable_without_message_uses_default() {
        let store = InMemoryStore::new();

        let flag = enable(&store, None, now()).await.unwrap();
        assert_eq!(flag.message, "App is under maintenance");

        let flag = enable(&store, Some(String::new()), now()).await.unwrap();
        assert_eq!(flag.message, "App is under maintenance");
    }

    #[tokio::test]
    async fn test_enable_keeps_whitespace_message() {
        let store = InMemoryStore::new();

        let flag = enable(&store, Some("   ".to_string()), now()).await.unwrap();

        assert_eq!(flag.message, "   ");
        assert_eq!(status(&store).await.unwrap().message(), Some("   "));
    }

    #[tokio::test]
    async fn test_document_uses_front_end_field_names() {
        let store = InMemoryStore::new();

        enable(&store, None, now()).await.unwrap();
        let document = store.get(&MaintenanceFlag::path()).await.unwrap().unwrap();

        assert_eq!(document["isMaintenanceMode"], true);
        assert_eq!(document["maintenanceMessage"], "App is under maintenance");
        assert_eq!(document["updatedBy"], "admin-script");
        assert!(document["updatedAt"].is_string());
    }
}
