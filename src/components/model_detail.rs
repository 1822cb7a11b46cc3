//! Model Detail Component
//!
//! One entry with its notes, an edit form, delete, move between
//! workspaces, and AI insights fetched on demand.

use catalog_core::domain::{ModelEntry, ModelId, ModelPatch, ModelStatus, ModelType, WorkspaceId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{split_list, ChoiceSelect, MODEL_STATUSES, MODEL_TYPES};
use crate::commands;
use crate::context::{use_app_context, View};
use crate::markdown::render_markdown;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ModelDetail(id: ModelId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let entry = RwSignal::new(None::<ModelEntry>);
    let load_error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<ModelPatch>);
    let tags_text = RwSignal::new(String::new());
    let links_text = RwSignal::new(String::new());
    let insights = RwSignal::new(None::<String>);
    let insights_loading = RwSignal::new(false);
    let move_target = RwSignal::new(None::<WorkspaceId>);

    let load = move || {
        spawn_local(async move {
            match commands::get_model(ctx, id).await {
                Ok(loaded) => entry.set(Some(loaded)),
                Err(e) => {
                    load_error.set(Some(e.to_string()));
                    ctx.report(&e);
                }
            }
        });
    };
    load();

    let start_edit = move |_: leptos::ev::MouseEvent| {
        if let Some(current) = entry.get_untracked() {
            tags_text.set(current.tags.join(", "));
            links_text.set(current.source_links.join("\n"));
            editing.set(Some(ModelPatch::from_entry(&current)));
        }
    };

    let patch_with = move |f: Box<dyn FnOnce(&mut ModelPatch)>| {
        editing.update(|p| {
            if let Some(patch) = p.as_mut() {
                f(patch);
            }
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut patch) = editing.get_untracked() else {
            return;
        };
        patch.tags = Some(split_list(&tags_text.get_untracked()));
        patch.source_links = Some(split_list(&links_text.get_untracked()));
        spawn_local(async move {
            match commands::update_model(ctx, store, id, patch).await {
                Ok(updated) => {
                    entry.set(Some(updated));
                    editing.set(None);
                }
                Err(e) => ctx.report(&e),
            }
        });
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            match commands::delete_model(ctx, store, id).await {
                Ok(true) => ctx.navigate(View::Models),
                Ok(false) => {}
                Err(e) => ctx.report(&e),
            }
        });
    };

    let on_move = move |_: leptos::ev::MouseEvent| {
        let Some(to) = move_target.get_untracked() else {
            ctx.flash_error("Choose a workspace to move to");
            return;
        };
        let from = entry.with_untracked(|e| e.as_ref().and_then(|e| e.workspace_id));
        spawn_local(async move {
            match commands::move_model(ctx, store, id, from, to).await {
                Ok(()) => {
                    move_target.set(None);
                    load();
                }
                Err(e) => ctx.report(&e),
            }
        });
    };

    let on_insights = move |_: leptos::ev::MouseEvent| {
        insights_loading.set(true);
        spawn_local(async move {
            match commands::model_insights(ctx, id).await {
                Ok(text) => insights.set(Some(text)),
                Err(e) => ctx.report(&e),
            }
            insights_loading.set(false);
        });
    };

    let workspace_name = move |ws_id: Option<WorkspaceId>| {
        ws_id.and_then(|ws_id| {
            store
                .workspaces()
                .with(|all| all.iter().find(|w| w.id == ws_id).map(|w| w.name.clone()))
        })
    };

    let read_view = move |m: ModelEntry| {
        let rows = [
            ("Developer", m.developer.clone()),
            ("Type", m.model_type.map(|t| t.to_string())),
            ("Status", m.status.map(|s| s.to_string())),
            ("Last used", m.date_interacted.map(|d| d.format("%Y-%m-%d").to_string())),
            ("Parameters", m.parameters.map(|p| p.to_string())),
            ("License", m.license.clone()),
            ("Version", m.version.clone()),
            ("Workspace", workspace_name(m.workspace_id)),
        ];
        view! {
            <h2>{m.name.clone()}</h2>
            <dl class="model-fields">
                {rows.into_iter().filter_map(|(label, value)| value.map(|v| view! {
                    <dt>{label}</dt>
                    <dd>{v}</dd>
                })).collect_view()}
            </dl>
            <div class="model-card-tags">
                {m.tags.iter().map(|t| view! { <span class="tag-chip">{t.clone()}</span> }).collect_view()}
            </div>
            <ul class="source-links">
                {m.source_links.iter().map(|link| view! {
                    <li><a href=link.clone() target="_blank" rel="noopener noreferrer">{link.clone()}</a></li>
                }).collect_view()}
            </ul>
            {m.notes.as_deref().map(|notes| view! {
                <div class="markdown notes" inner_html=render_markdown(notes)></div>
            })}
        }
    };

    let edit_view = move || {
        view! {
            <form class="edit-model-form" on:submit=on_save>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || editing.with(|p| p.as_ref().and_then(|p| p.name.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        patch_with(Box::new(move |p| p.name = Some(v)));
                    }
                />
                <input
                    type="text"
                    placeholder="Developer"
                    prop:value=move || editing.with(|p| p.as_ref().and_then(|p| p.developer.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        patch_with(Box::new(move |p| p.developer = Some(v)));
                    }
                />
                <ChoiceSelect
                    options=MODEL_TYPES
                    current=Signal::derive(move || editing.with(|p| p.as_ref().and_then(|p| p.model_type)))
                    on_change=Callback::new(move |t: Option<ModelType>| patch_with(Box::new(move |p| p.model_type = t)))
                    placeholder="Type"
                />
                <ChoiceSelect
                    options=MODEL_STATUSES
                    current=Signal::derive(move || editing.with(|p| p.as_ref().and_then(|p| p.status)))
                    on_change=Callback::new(move |s: Option<ModelStatus>| patch_with(Box::new(move |p| p.status = s)))
                    placeholder="Status"
                />
                <input
                    type="text"
                    placeholder="Tags, comma separated"
                    prop:value=move || tags_text.get()
                    on:input=move |ev| tags_text.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Source links, one per line"
                    prop:value=move || links_text.get()
                    on:input=move |ev| links_text.set(event_target_value(&ev))
                ></textarea>
                <textarea
                    placeholder="Notes (markdown)"
                    prop:value=move || editing.with(|p| p.as_ref().and_then(|p| p.notes.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        patch_with(Box::new(move |p| p.notes = Some(v)));
                    }
                ></textarea>
                <div class="form-actions">
                    <button type="submit">"Save"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| editing.set(None)>
                        "Cancel"
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <section class="model-detail">
            <button class="link-btn back" on:click=move |_| ctx.navigate(View::Models)>
                "← Back to list"
            </button>

            {move || load_error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            {move || match (entry.get(), editing.with(|p| p.is_some())) {
                (None, _) => None,
                (Some(_), true) => Some(edit_view().into_any()),
                (Some(m), false) => Some(read_view(m).into_any()),
            }}

            <Show when=move || entry.with(|e| e.is_some()) && editing.with(|p| p.is_none())>
                <div class="detail-actions">
                    <button on:click=start_edit>"Edit"</button>
                    <button class="danger" on:click=on_delete>"Delete"</button>
                    <select on:change=move |ev| move_target.set(event_target_value(&ev).parse().ok())>
                        <option value="" selected=move || move_target.get().is_none()>"Move to..."</option>
                        <For
                            each=move || {
                                let current = entry.with(|e| e.as_ref().and_then(|e| e.workspace_id));
                                store.workspaces().with(|all| {
                                    all.iter().filter(|w| Some(w.id) != current).cloned().collect::<Vec<_>>()
                                })
                            }
                            key=|ws| ws.id
                            children=move |ws| view! { <option value=ws.id.to_string()>{ws.name}</option> }
                        />
                    </select>
                    <button on:click=on_move prop:disabled=move || move_target.get().is_none()>
                        "Move"
                    </button>
                </div>
            </Show>

            <div class="insights">
                <button on:click=on_insights prop:disabled=move || insights_loading.get()>
                    {move || if insights_loading.get() { "Generating insights..." } else { "Get AI insights" }}
                </button>
                {move || insights.get().map(|text| view! {
                    <div class="markdown" inner_html=render_markdown(&text)></div>
                })}
            </div>
        </section>
    }
}
