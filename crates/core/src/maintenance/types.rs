use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::DocumentPath;

pub const MAINTENANCE_COLLECTION: &str = "app_settings";
pub const MAINTENANCE_DOC_ID: &str = "maintenance";
pub const DEFAULT_MAINTENANCE_MESSAGE: &str = "App is under maintenance";
pub const MAINTENANCE_UPDATED_BY: &str = "admin-script";

/// The maintenance-mode singleton read by the front end on every route.
///
/// Field names on the wire follow what the front end reads
/// (`isMaintenanceMode`, `maintenanceMessage`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceFlag {
    #[serde(rename = "isMaintenanceMode")]
    pub enabled: bool,
    #[serde(rename = "maintenanceMessage", default)]
    pub message: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: String,
}

impl MaintenanceFlag {
    /// A flag turning maintenance mode on with the given message.
    pub fn enabled(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            enabled: true,
            message: message.into(),
            updated_at: Some(now),
            updated_by: MAINTENANCE_UPDATED_BY.to_string(),
        }
    }

    /// A flag turning maintenance mode off. The default message is kept.
    pub fn disabled(now: DateTime<Utc>) -> Self {
        Self {
            enabled: false,
            message: DEFAULT_MAINTENANCE_MESSAGE.to_string(),
            updated_at: Some(now),
            updated_by: MAINTENANCE_UPDATED_BY.to_string(),
        }
    }

    /// Location of the singleton document.
    pub fn path() -> DocumentPath {
        DocumentPath::new(MAINTENANCE_COLLECTION, MAINTENANCE_DOC_ID)
    }
}

/// What a status read found.
#[derive(Debug, Clone, PartialEq)]
pub enum MaintenanceStatus {
    /// No document exists; the app is available.
    NotConfigured,
    Configured(MaintenanceFlag),
}

impl MaintenanceStatus {
    pub fn is_enabled(&self) -> bool {
        match self {
            MaintenanceStatus::NotConfigured => false,
            MaintenanceStatus::Configured(flag) => flag.enabled,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            MaintenanceStatus::Configured(flag) if !flag.message.is_empty() => {
                Some(flag.message.as_str())
            }
            _ => None,
        }
    }
}
