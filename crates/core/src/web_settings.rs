use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::DocumentPath;

pub const WEB_SETTINGS_COLLECTION: &str = "web_settings";
pub const WEB_SETTINGS_DOC_ID: &str = "main";
pub const PLAY_STORE_LINK: &str =
    "https://play.google.com/store/apps/details?id=xyz.mmkcode.focusflow";
pub const WEB_SETTINGS_UPDATED_BY: &str = "system";

/// Switches for the web build of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSettings {
    pub web_game_enabled: bool,
    /// Where the web build sends players when the web game is off.
    pub play_store_link: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl WebSettings {
    /// Web game enabled, pointing at the Android app.
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            web_game_enabled: true,
            play_store_link: PLAY_STORE_LINK.to_string(),
            updated_at: now,
            updated_by: WEB_SETTINGS_UPDATED_BY.to_string(),
        }
    }

    pub fn path() -> DocumentPath {
        DocumentPath::new(WEB_SETTINGS_COLLECTION, WEB_SETTINGS_DOC_ID)
    }
}
