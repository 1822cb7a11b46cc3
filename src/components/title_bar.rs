//! Title Bar Component
//!
//! App title, navigation between overview, list and workspaces, and the signed-in
//! user with a sign-out button.

use leptos::prelude::*;

use crate::commands;
use crate::context::{use_app_context, View};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let nav_class = move |target: View| {
        move || {
            let active = match (ctx.view.get(), &target) {
                (View::Detail(_) | View::Compare(_), View::Models) => true,
                (current, target) => current == *target,
            };
            if active { "nav-btn active" } else { "nav-btn" }
        }
    };

    view! {
        <header class="titlebar">
            <span class="titlebar-title">"Model Catalog"</span>
            <Show when=move || store.user().with(|u| u.is_some())>
                <nav class="titlebar-nav">
                    <button class=nav_class(View::Dashboard) on:click=move |_| ctx.navigate(View::Dashboard)>
                        "Overview"
                    </button>
                    <button class=nav_class(View::Models) on:click=move |_| ctx.navigate(View::Models)>
                        "Models"
                    </button>
                    <button class=nav_class(View::Workspaces) on:click=move |_| ctx.navigate(View::Workspaces)>
                        "Workspaces"
                    </button>
                </nav>
                <div class="titlebar-user">
                    <span>{move || store.user().with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default())}</span>
                    <button class="titlebar-btn" on:click=move |_| commands::sign_out(ctx, store)>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </header>
    }
}
