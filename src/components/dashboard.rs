//! Dashboard Component
//!
//! Landing overview: headline counts, models per status, the most recently
//! used models and the most used tags.

use catalog_core::catalog::CatalogStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, View};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let stats = RwSignal::new(None::<CatalogStats>);
    let error = RwSignal::new(None::<String>);

    // Reload with the rest of the app
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        spawn_local(async move {
            match commands::load_stats(ctx).await {
                Ok(loaded) => {
                    error.set(None);
                    stats.set(Some(loaded));
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    ctx.report(&e);
                }
            }
        });
    });

    let filter_by_tag = move |tag: String| {
        store.query().maybe_update(|q| q.set_tag(Some(tag)));
        ctx.navigate(View::Models);
    };

    let figures = |s: &CatalogStats| {
        [
            ("Total models", s.total),
            ("Model types", s.type_count),
            ("Tags", s.tag_count),
            ("Used this month", s.this_month),
        ]
        .into_iter()
        .map(|(label, n)| view! {
            <div class="stat-card">
                <h3>{label}</h3>
                <p class="stat-value">{n}</p>
            </div>
        })
        .collect_view()
    };

    let body = move |s: &CatalogStats| {
        view! {
            <div class="stat-cards">{figures(s)}</div>
            <div class="dashboard-columns">
                <div class="dashboard-panel">
                    <h3>"Models by status"</h3>
                    <ul class="status-counts">
                        {s.by_status.iter().map(|(status, n)| view! {
                            <li class=format!("status-{}", status.as_str().to_lowercase())>
                                <span>{status.as_str()}</span>
                                <span class="count">{*n}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="dashboard-panel">
                    <h3>"Recent models"</h3>
                    <ul class="recent-models">
                        {s.recent.iter().map(|m| {
                            let id = m.id;
                            view! {
                                <li>
                                    <button class="link-btn" on:click=move |_| ctx.navigate(View::Detail(id))>
                                        {m.name.clone()}
                                    </button>
                                    <span class="model-type">
                                        {m.model_type.map(|t| t.to_string())}
                                    </span>
                                    <span class="model-date">
                                        {m.date_interacted.map(|d| d.format("%Y-%m-%d").to_string())}
                                    </span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </div>
            <div class="dashboard-panel">
                <h3>"Popular tags"</h3>
                <div class="tag-cloud">
                    {s.popular_tags.iter().map(|(tag, n)| {
                        let tag = tag.clone();
                        let label = format!("{tag} ({n})");
                        view! {
                            <button class="tag-chip" on:click=move |_| filter_by_tag(tag.clone())>
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        }
    };

    view! {
        <section class="dashboard">
            <h2>"Overview"</h2>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || match stats.with(|s| s.as_ref().map(body)) {
                Some(loaded) => Some(loaded.into_any()),
                None if error.with(|e| e.is_none()) => {
                    Some(view! { <div class="spinner" aria-label="Loading"></div> }.into_any())
                }
                None => None,
            }}
        </section>
    }
}
