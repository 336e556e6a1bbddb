//! Thin wrappers over `localStorage` and `sessionStorage`.

use finanzas_core::credentials::{TokenStore, TOKEN_STORAGE_KEY};
use finanzas_core::guard::JUST_LOGGED_IN_KEY;
use web_sys::Storage;

fn local() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn load_local(key: &str) -> Option<String> {
    local().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn save_local(key: &str, value: &str) {
    if let Some(storage) = local() {
        if storage.set_item(key, value).is_err() {
            tracing::warn!("could not persist {}", key);
        }
    }
}

pub fn remove_local(key: &str) {
    if let Some(storage) = local() {
        let _ = storage.remove_item(key);
    }
}

/// Mark that a login just succeeded so the next guard may retry once.
pub fn flag_just_logged_in() {
    if let Some(storage) = session() {
        let _ = storage.set_item(JUST_LOGGED_IN_KEY, "true");
    }
}

/// Read and clear the just-logged-in flag.
pub fn take_just_logged_in() -> bool {
    let Some(storage) = session() else {
        return false;
    };
    let present = matches!(storage.get_item(JUST_LOGGED_IN_KEY), Ok(Some(_)));
    if present {
        let _ = storage.remove_item(JUST_LOGGED_IN_KEY);
    }
    present
}

/// Bearer token kept in local storage for the assistant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        load_local(TOKEN_STORAGE_KEY)
    }
}

pub fn store_token(token: &str) {
    save_local(TOKEN_STORAGE_KEY, token);
}

pub fn clear_token() {
    remove_local(TOKEN_STORAGE_KEY);
}
