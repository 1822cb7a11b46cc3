//! Choice Selector Component
//!
//! `<select>` over a fixed catalog such as model types or statuses, with an
//! empty "any" option.

use std::fmt::Display;
use std::str::FromStr;

use catalog_core::domain::{ModelStatus, ModelType};
use leptos::prelude::*;

pub const MODEL_TYPES: &[ModelType] = &ModelType::ALL;
pub const MODEL_STATUSES: &[ModelStatus] = &ModelStatus::ALL;

/// Select over `options`; picking the empty option yields `None`.
#[component]
pub fn ChoiceSelect<T>(
    options: &'static [T],
    #[prop(into)] current: Signal<Option<T>>,
    #[prop(into)] on_change: Callback<Option<T>>,
    /// Label of the empty option
    #[prop(into)]
    placeholder: String,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView
where
    T: Copy + PartialEq + Display + FromStr + Send + Sync + 'static,
{
    view! {
        <select
            class="choice-select"
            prop:disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev).parse::<T>().ok())
        >
            <option value="" selected=move || current.get().is_none()>{placeholder}</option>
            {options.iter().copied().map(|option| {
                let label = option.to_string();
                let value = label.clone();
                view! {
                    <option value=value selected=move || current.get() == Some(option)>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
