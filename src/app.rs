//! Model Catalog App
//!
//! Root component: provides context and store, wires the session teardown,
//! drives list refreshes from the query, and switches screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    ComparisonView, Dashboard, FlashBanner, LoginForm, ModelDetail, ModelList, TitleBar,
    WorkspacePanel,
};
use crate::context::{AppContext, Services, View};
use crate::storage;
use crate::store::{store_reset, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App(services: Services) -> impl IntoView {
    let initial = if services.session.is_authenticated() {
        View::from_location().unwrap_or(View::Dashboard)
    } else {
        View::Login
    };
    let session = services.session.clone();
    let ctx = AppContext::new(services, initial);
    let store: AppStore = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // A rejected token anywhere sends the user back to sign in
    session.subscribe(move || {
        info!("Session cleared");
        storage::clear_token();
        store_reset(&store);
        ctx.navigate(View::Login);
        ctx.flash_error("Your session has expired. Please sign in again.");
    });

    spawn_local(commands::restore_session(ctx, store));

    // Workspaces and tag options, once signed in and on every reload
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        if store.user().with(|u| u.is_none()) {
            return;
        }
        spawn_local(async move {
            commands::load_workspaces(ctx, store).await;
            commands::load_tags(ctx, store).await;
        });
    });

    // Refetch the list whenever the query changes
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        let query = store.query().get();
        if store.user().with(|u| u.is_none()) {
            return;
        }
        spawn_local(commands::refresh(ctx, store, query));
    });

    view! {
        <div class="app-layout">
            <TitleBar />
            <FlashBanner />
            <main class="main-content">
                {move || match ctx.view.get() {
                    View::Login => view! { <LoginForm /> }.into_any(),
                    View::Dashboard => view! { <Dashboard /> }.into_any(),
                    View::Models => view! { <ModelList /> }.into_any(),
                    View::Detail(id) => view! { <ModelDetail id=id /> }.into_any(),
                    View::Compare(route) => view! { <ComparisonView route=route /> }.into_any(),
                    View::Workspaces => view! { <WorkspacePanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
