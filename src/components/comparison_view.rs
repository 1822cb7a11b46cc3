//! Comparison View Component
//!
//! Side-by-side attributes of the compared models and the AI analysis,
//! split into paragraphs. A custom prompt regenerates the analysis.

use catalog_core::catalog::{Comparison, ComparisonRoute};
use catalog_core::domain::ModelEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, View};

type Row = (&'static str, fn(&ModelEntry) -> String);

const ROWS: &[Row] = &[
    ("Developer", |m| m.developer.clone().unwrap_or_default()),
    ("Type", |m| m.model_type.map(|t| t.to_string()).unwrap_or_default()),
    ("Status", |m| m.status.map(|s| s.to_string()).unwrap_or_default()),
    ("Parameters", |m| m.parameters.map(|p| p.to_string()).unwrap_or_default()),
    ("License", |m| m.license.clone().unwrap_or_default()),
    ("Version", |m| m.version.clone().unwrap_or_default()),
    ("Tags", |m| m.tags.join(", ")),
];

#[component]
pub fn ComparisonView(route: ComparisonRoute) -> impl IntoView {
    let ctx = use_app_context();

    let comparison = RwSignal::new(None::<Comparison>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let prompt = RwSignal::new(String::new());
    let route = StoredValue::new(route);

    let load = move |custom: Option<String>| {
        loading.set(true);
        error.set(None);
        let route = route.get_value();
        spawn_local(async move {
            match commands::load_comparison(ctx, route, custom).await {
                Ok(loaded) => comparison.set(Some(loaded)),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    ctx.report(&e);
                }
            }
            loading.set(false);
        });
    };
    load(None);

    let on_regenerate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        load(Some(prompt.get_untracked()));
    };

    let table = move |c: &Comparison| {
        view! {
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th></th>
                        {c.models.iter().map(|m| {
                            let id = m.id;
                            view! {
                                <th>
                                    <button class="link-btn" on:click=move |_| ctx.navigate(View::Detail(id))>
                                        {m.name.clone()}
                                    </button>
                                </th>
                            }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {ROWS.iter().map(|(label, value)| view! {
                        <tr>
                            <th>{*label}</th>
                            {c.models.iter().map(|m| view! { <td>{value(m)}</td> }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }
    };

    view! {
        <section class="comparison-view">
            <button class="link-btn back" on:click=move |_| ctx.navigate(View::Models)>
                "← Back to list"
            </button>
            <h2>"Model comparison"</h2>

            <Show when=move || loading.get()>
                <div class="spinner" aria-label="Loading"></div>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            {move || comparison.with(|c| c.as_ref().map(|c| view! {
                {table(c)}
                <div class="analysis">
                    <h3>"Analysis"</h3>
                    {c.paragraphs().into_iter().map(|p| view! { <p>{p.to_string()}</p> }).collect_view()}
                </div>
            }))}

            <form class="prompt-form" on:submit=on_regenerate>
                <input
                    type="text"
                    placeholder="Ask something specific, e.g. which is better for code review?"
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=move || loading.get()>"Regenerate"</button>
            </form>
        </section>
    }
}
