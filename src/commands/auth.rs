//! Auth Commands
//!
//! Sign-in, registration and token restore. The token is mirrored into
//! `localStorage` so a reload keeps the session.

use catalog_core::catalog::auth;
use catalog_core::domain::{Credentials, Registration, User};
use catalog_core::ClientResult;
use leptos::prelude::*;

use crate::context::{AppContext, View};
use crate::storage;
use crate::store::{store_reset, AppStateStoreFields, AppStore};

fn persist_and_enter(ctx: AppContext, store: AppStore, user: User) {
    if let Some(token) = ctx.services().session.read() {
        storage::save_token(&token);
    }
    ctx.flash_info(format!("Welcome, {}", user.username));
    store.user().set(Some(user));
    ctx.navigate(View::from_location().unwrap_or(View::Dashboard));
    ctx.reload();
}

pub async fn sign_in(ctx: AppContext, store: AppStore, credentials: Credentials) -> ClientResult<()> {
    let services = ctx.services();
    let user = auth::sign_in(&services.backend, &services.session, &credentials).await?;
    persist_and_enter(ctx, store, user);
    Ok(())
}

pub async fn register(ctx: AppContext, store: AppStore, registration: Registration) -> ClientResult<()> {
    let services = ctx.services();
    let user = auth::register(&services.backend, &services.session, &registration).await?;
    persist_and_enter(ctx, store, user);
    Ok(())
}

/// Verify a persisted token at start-up. Falls back to the login screen
/// when there is none or it was rejected.
pub async fn restore_session(ctx: AppContext, store: AppStore) {
    let services = ctx.services();
    match auth::restore(&services.backend, &services.session).await {
        Some(user) => store.user().set(Some(user)),
        None => {
            storage::clear_token();
            if ctx.view.get_untracked() != View::Login {
                ctx.navigate(View::Login);
            }
        }
    }
}

pub fn sign_out(ctx: AppContext, store: AppStore) {
    auth::sign_out(&ctx.services().session);
    storage::clear_token();
    store_reset(&store);
    ctx.navigate(View::Login);
    ctx.flash_info("Signed out");
}
