//! Token persistence in `localStorage`.

use log::warn;
use web_sys::Storage;

const TOKEN_KEY: &str = "auth_token";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    let Some(storage) = local_storage() else {
        warn!("localStorage unavailable, session will not persist");
        return;
    };
    if let Err(e) = storage.set_item(TOKEN_KEY, token) {
        warn!("Failed to persist token: {e:?}");
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
