use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::shared::config::SESSION_STORAGE_KEY;

/// Session snapshot kept in localStorage between visits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Decode a stored snapshot; corrupt data counts as no session
pub fn parse_session(raw: &str) -> Option<StoredSession> {
    serde_json::from_str(raw).ok()
}

/// Load the session snapshot from localStorage
pub fn load_session() -> Option<StoredSession> {
    let raw = get_local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    parse_session(&raw)
}

/// Save the session snapshot to localStorage
pub fn save_session(session: &StoredSession) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let raw = serde_json::to_string(session).map_err(|e| e.to_string())?;
    storage
        .set_item(SESSION_STORAGE_KEY, &raw)
        .map_err(|e| format!("{:?}", e))
}

/// Remove the session snapshot
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
