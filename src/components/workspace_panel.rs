//! Workspace Panel Component
//!
//! Workspace management: create, rename, delete, and open a workspace as
//! the model-list filter.

use catalog_core::domain::{WorkspaceEntry, WorkspaceId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::DeleteConfirmButton;
use crate::commands;
use crate::context::{use_app_context, View};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WorkspacePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (n, d) = (name.get(), description.get());
        spawn_local(async move {
            match commands::create_workspace(ctx, store, &n, &d).await {
                Ok(ws) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    ctx.flash_info(format!("Created workspace {}", ws.name));
                }
                Err(e) => ctx.report(&e),
            }
        });
    };

    view! {
        <section class="workspace-panel">
            <h2>"Workspaces"</h2>
            <form class="workspace-add-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Workspace name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit">"Create"</button>
            </form>
            <ul class="workspace-list">
                <For
                    each=move || store.workspaces().get()
                    key=|ws| (ws.id, ws.name.clone(), ws.description.clone())
                    children=move |ws| view! { <WorkspaceRow workspace=ws /> }
                />
            </ul>
        </section>
    }
}

#[component]
fn WorkspaceRow(workspace: WorkspaceEntry) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id: WorkspaceId = workspace.id;

    let renaming = RwSignal::new(false);
    let name = RwSignal::new(workspace.name.clone());
    let description = RwSignal::new(workspace.description.clone().unwrap_or_default());
    let model_count = RwSignal::new(None::<usize>);

    // Model count comes from the workspace detail
    spawn_local(async move {
        if let Ok(detail) = commands::get_workspace(ctx, id).await {
            model_count.set(Some(detail.models.len()));
        }
    });

    let open = move |_: leptos::ev::MouseEvent| {
        store.query().maybe_update(|q| q.set_workspace(Some(id)));
        ctx.navigate(View::Models);
    };

    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (n, d) = (name.get_untracked(), description.get_untracked());
        spawn_local(async move {
            match commands::update_workspace(ctx, store, id, &n, &d).await {
                Ok(_) => renaming.set(false),
                Err(e) => ctx.report(&e),
            }
        });
    };

    let on_delete = Callback::new(move |pending: WriteSignal<bool>| {
        spawn_local(async move {
            if let Err(e) = commands::delete_workspace(ctx, store, id).await {
                ctx.report(&e);
            }
            pending.set(false);
        });
    });

    view! {
        <li class="workspace-row">
            {move || if renaming.get() {
                view! {
                    <form class="workspace-rename-form" on:submit=on_rename>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| renaming.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="link-btn workspace-name" on:click=open>
                        {move || name.get()}
                    </button>
                    <span class="workspace-description">{move || description.get()}</span>
                    <span class="workspace-count">
                        {move || model_count.get().map(|n| format!("{n} models"))}
                    </span>
                    <button class="rename-btn" on:click=move |_| renaming.set(true)>"Rename"</button>
                }.into_any()
            }}
            {workspace.is_default.then(|| view! { <span class="default-mark">"default"</span> })}
            <DeleteConfirmButton
                button_class="delete-btn"
                subject=Signal::derive(move || name.get())
                on_confirm=on_delete
            />
        </li>
    }
}
