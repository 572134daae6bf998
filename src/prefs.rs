//! Persisted Preferences
//!
//! The dark-mode flag survives reloads via `window.localStorage`.

use std::cell::Cell;

/// Storage key, shared with earlier versions of the client
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read-on-init, write-on-change preference port
pub trait PreferenceStore {
    fn load_dark_mode(&self) -> bool;
    fn save_dark_mode(&self, dark: bool);
}

/// `window.localStorage` backed preferences
pub struct LocalStoragePreferences {
    storage: web_sys::Storage,
}

impl LocalStoragePreferences {
    /// `None` when the browser denies access to local storage
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn load_dark_mode(&self) -> bool {
        let stored = self.storage.get_item(DARK_MODE_KEY).ok().flatten();
        parse_flag(stored.as_deref())
    }

    fn save_dark_mode(&self, dark: bool) {
        if let Err(e) = self.storage.set_item(DARK_MODE_KEY, &dark.to_string()) {
            log::warn!("[PREFS] Failed to persist {}: {:?}", DARK_MODE_KEY, e);
        }
    }
}

/// Session-only preferences, used when local storage is unavailable
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    dark_mode: Cell<bool>,
}

impl MemoryPreferences {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode: Cell::new(dark_mode) }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_dark_mode(&self) -> bool {
        self.dark_mode.get()
    }

    fn save_dark_mode(&self, dark: bool) {
        self.dark_mode.set(dark);
    }
}

/// Only the exact string `"true"` means dark
fn parse_flag(stored: Option<&str>) -> bool {
    stored == Some("true")
}
