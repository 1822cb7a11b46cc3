//! Workspace Tab Bar Component
//!
//! Tabs acting as the workspace filter of the model list. "All" clears the
//! filter; "+" adds a workspace inline.

use catalog_core::domain::WorkspaceId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WorkspaceTabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let query = store.query();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let select = move |id: Option<WorkspaceId>| {
        query.maybe_update(|q| q.set_workspace(id));
    };
    let tab_class = move |id: Option<WorkspaceId>| {
        move || {
            if query.with(|q| q.workspace_id()) == id {
                "workspace-tab active"
            } else {
                "workspace-tab"
            }
        }
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::create_workspace(ctx, store, &name, "").await {
                Ok(_) => {
                    set_new_name.set(String::new());
                    set_adding.set(false);
                }
                Err(e) => ctx.report(&e),
            }
        });
    };

    view! {
        <div class="workspace-tab-bar">
            <button class=tab_class(None) on:click=move |_| select(None)>
                "All"
            </button>
            <For
                each=move || store.workspaces().get()
                key=|ws| (ws.id, ws.name.clone())
                children=move |ws| {
                    let id = Some(ws.id);
                    view! {
                        <button class=tab_class(id) on:click=move |_| select(id)>
                            {ws.name.clone()}
                            {ws.is_default.then(|| view! { <span class="default-mark">"•"</span> })}
                        </button>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="workspace-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Workspace name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="workspace-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
