//! New Model Form Component
//!
//! Create-model panel driven by a [`CreateFlow`], with the autofill helper
//! that pre-populates the draft from an external source.

use catalog_core::catalog::CreateFlow;
use catalog_core::domain::{AutofillFile, AutofillRequest, ModelDraft, ModelStatus, ModelType};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use super::{split_list, ChoiceSelect, MODEL_STATUSES, MODEL_TYPES};
use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Read every file picked in `input`. Unreadable files are skipped.
async fn read_files(input: &HtmlInputElement) -> Vec<AutofillFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let mut files = Vec::new();
    for i in 0..list.length() {
        let Some(file) = list.get(i) else { continue };
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => files.push(AutofillFile {
                name: file.name(),
                bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
            }),
            Err(e) => warn!("Could not read {}: {e:?}", file.name()),
        }
    }
    files
}

/// Text of an optional draft field
fn draft_text(flow: RwSignal<CreateFlow>, read: fn(&ModelDraft) -> Option<String>) -> impl Fn() -> String + Copy + Send + Sync {
    move || flow.with(|f| f.draft().and_then(read).unwrap_or_default())
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn NewModelForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let flow = RwSignal::new(CreateFlow::default());
    // List fields are edited as text and split on submit
    let tags_text = RwSignal::new(String::new());
    let links_text = RwSignal::new(String::new());
    let source_id = RwSignal::new(String::new());
    let source_links = RwSignal::new(String::new());
    let autofilling = RwSignal::new(false);
    let file_input: NodeRef<Input> = NodeRef::new();

    let edit = move |f: Box<dyn FnOnce(&mut ModelDraft)>| {
        flow.update(|flow| {
            flow.edit(f);
        });
    };

    // Current draft with the text-edited lists folded in
    let collect_draft = move || {
        let mut draft = flow.with_untracked(|f| f.draft().cloned()).unwrap_or_default();
        draft.tags = split_list(&tags_text.get_untracked());
        draft.source_links = split_list(&links_text.get_untracked());
        draft
    };

    let show_draft = move |draft: &ModelDraft| {
        tags_text.set(draft.tags.join(", "));
        links_text.set(draft.source_links.join("\n"));
    };

    let open = move |_: leptos::ev::MouseEvent| {
        flow.update(|f| f.open());
        let workspace = store.query().with_untracked(|q| q.workspace_id());
        edit(Box::new(move |d| d.workspace_id = workspace));
        tags_text.set(String::new());
        links_text.set(String::new());
        source_id.set(String::new());
        source_links.set(String::new());
    };

    let on_autofill = move |_: leptos::ev::MouseEvent| {
        if autofilling.get() {
            return;
        }
        let input = file_input.get();
        let model_id = source_id.get();
        let model_links = split_list(&source_links.get());
        autofilling.set(true);
        spawn_local(async move {
            let files = match input {
                Some(input) => read_files(&input).await,
                None => Vec::new(),
            };
            let request = AutofillRequest { model_id, model_links, files };
            match commands::run_autofill(ctx, request).await {
                Ok(filled) => {
                    // Merge into the form as it is now, edits made while waiting included
                    let mut merged = collect_draft();
                    filled.merge_into(&mut merged);
                    show_draft(&merged);
                    edit(Box::new(move |d| *d = merged));
                }
                Err(e) => flow.update(|f| f.set_error(e.to_string())),
            }
            autofilling.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = collect_draft();
        edit(Box::new(move |d| *d = draft));
        let Some(draft) = flow.try_update(|f| f.submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = commands::create_model(ctx, store, draft).await;
            flow.update(|f| f.finish(&result));
        });
    };

    let name = draft_text(flow, |d| Some(d.name.clone()));
    let developer = draft_text(flow, |d| d.developer.clone());
    let notes = draft_text(flow, |d| d.notes.clone());
    let license = draft_text(flow, |d| d.license.clone());
    let version = draft_text(flow, |d| d.version.clone());
    let parameters = draft_text(flow, |d| d.parameters.map(|p| p.to_string()));

    view! {
        <Show
            when=move || flow.with(|f| f.is_open())
            fallback=move || view! {
                <button class="add-model-btn" on:click=open>"+ Add model"</button>
            }
        >
            <form class="new-model-form" on:submit=on_submit>
                <fieldset class="autofill" prop:disabled=move || autofilling.get()>
                    <legend>"Autofill"</legend>
                    <input
                        type="text"
                        placeholder="Source id, e.g. meta-llama/Llama-3-8B"
                        prop:value=move || source_id.get()
                        on:input=move |ev| source_id.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Extra links, one per line"
                        prop:value=move || source_links.get()
                        on:input=move |ev| source_links.set(event_target_value(&ev))
                    ></textarea>
                    <input type="file" multiple node_ref=file_input />
                    <button type="button" on:click=on_autofill>
                        {move || if autofilling.get() { "Fetching..." } else { "Autofill" }}
                    </button>
                </fieldset>

                <fieldset prop:disabled=move || flow.with(|f| f.is_submitting())>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=name
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            edit(Box::new(move |d| d.name = v));
                        }
                    />
                    <input
                        type="text"
                        placeholder="Developer"
                        prop:value=developer
                        on:input=move |ev| {
                            let v = non_blank(event_target_value(&ev));
                            edit(Box::new(move |d| d.developer = v));
                        }
                    />
                    <ChoiceSelect
                        options=MODEL_TYPES
                        current=Signal::derive(move || flow.with(|f| f.draft().and_then(|d| d.model_type)))
                        on_change=Callback::new(move |t: Option<ModelType>| edit(Box::new(move |d| d.model_type = t)))
                        placeholder="Type"
                    />
                    <ChoiceSelect
                        options=MODEL_STATUSES
                        current=Signal::derive(move || flow.with(|f| f.draft().and_then(|d| d.status)))
                        on_change=Callback::new(move |s: Option<ModelStatus>| edit(Box::new(move |d| d.status = s)))
                        placeholder="Status"
                    />
                    <select
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse().ok();
                            edit(Box::new(move |d| d.workspace_id = id));
                        }
                    >
                        <option value="" selected=move || flow.with(|f| f.draft().and_then(|d| d.workspace_id).is_none())>
                            "No workspace"
                        </option>
                        <For
                            each=move || store.workspaces().get()
                            key=|ws| ws.id
                            children=move |ws| {
                                let id = ws.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || flow.with(|f| f.draft().and_then(|d| d.workspace_id) == Some(id))
                                    >
                                        {ws.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <input
                        type="text"
                        placeholder="Tags, comma separated"
                        prop:value=move || tags_text.get()
                        on:input=move |ev| tags_text.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Parameters"
                        inputmode="numeric"
                        prop:value=parameters
                        on:input=move |ev| {
                            let v = event_target_value(&ev).trim().replace('_', "").parse().ok();
                            edit(Box::new(move |d| d.parameters = v));
                        }
                    />
                    <input
                        type="text"
                        placeholder="License"
                        prop:value=license
                        on:input=move |ev| {
                            let v = non_blank(event_target_value(&ev));
                            edit(Box::new(move |d| d.license = v));
                        }
                    />
                    <input
                        type="text"
                        placeholder="Version"
                        prop:value=version
                        on:input=move |ev| {
                            let v = non_blank(event_target_value(&ev));
                            edit(Box::new(move |d| d.version = v));
                        }
                    />
                    <textarea
                        placeholder="Source links, one per line"
                        prop:value=move || links_text.get()
                        on:input=move |ev| links_text.set(event_target_value(&ev))
                    ></textarea>
                    <textarea
                        placeholder="Notes (markdown)"
                        prop:value=notes
                        on:input=move |ev| {
                            let v = non_blank(event_target_value(&ev));
                            edit(Box::new(move |d| d.notes = v));
                        }
                    ></textarea>
                </fieldset>

                {move || flow.with(|f| f.error().map(str::to_string)).map(|e| view! {
                    <p class="form-error">{e}</p>
                })}

                <div class="form-actions">
                    <button type="submit" prop:disabled=move || flow.with(|f| f.is_submitting())>
                        {move || if flow.with(|f| f.is_submitting()) { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| flow.update(|f| f.cancel())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
