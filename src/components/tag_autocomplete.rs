//! Tag Autocomplete Component
//!
//! Tag filter input with fuzzy suggestions from the catalog's tags.

use leptos::prelude::*;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

const MAX_SUGGESTIONS: usize = 6;

/// Tag input with suggestions
///
/// Props:
/// - all_tags: every tag known to the catalog
/// - current: the active tag filter, shown as a removable chip
/// - on_select: called with the chosen tag, or `None` to clear the filter
#[component]
pub fn TagAutocomplete(
    #[prop(into)] all_tags: Signal<Vec<String>>,
    #[prop(into)] current: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        let input = input_value.get();
        let input = input.trim();
        if input.is_empty() {
            return vec![];
        }
        all_tags
            .get()
            .into_iter()
            .filter(|tag| fuzzy_match(input, tag))
            .take(MAX_SUGGESTIONS)
            .collect::<Vec<_>>()
    };

    let choose = move |tag: String| {
        on_select.run(Some(tag));
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let typed = input_value.get().trim().to_string();
        if typed.is_empty() {
            return;
        }
        // Prefer the highlighted suggestion over the raw text
        let chosen = suggestions()
            .get(selected_idx.get())
            .cloned()
            .unwrap_or(typed);
        choose(chosen);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let count = suggestions().len();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < count {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Escape" => set_input_value.set(String::new()),
            _ => {}
        }
    };

    view! {
        <div class="tag-input-wrapper">
            {move || current.get().map(|tag| view! {
                <span class="tag-chip active">
                    {tag}
                    <button
                        type="button"
                        class="tag-chip-clear"
                        prop:disabled=move || disabled.get()
                        on:click=move |_| on_select.run(None)
                    >
                        "×"
                    </button>
                </span>
            })}
            <form class="tag-filter-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Filter by tag..."
                    autocomplete="off"
                    prop:disabled=move || disabled.get()
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:keydown=on_keydown
                />
            </form>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() || disabled.get() {
                    return None;
                }
                let selected = selected_idx.get();
                Some(view! {
                    <div class="autocomplete-list">
                        {sugg.into_iter().enumerate().map(|(i, tag)| {
                            let for_click = tag.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        choose(for_click.clone());
                                    }
                                >
                                    {tag}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
