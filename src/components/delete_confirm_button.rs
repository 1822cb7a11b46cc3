//! Delete Confirm Button Component

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Idle,
    Asking,
    Pending,
}

/// Two-step delete for rows where a modal `confirm()` would be too heavy.
///
/// `on_confirm` receives the pending flag; clear it once the request settles
/// so the row leaves the pending state (a successful delete usually unmounts
/// the row first).
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// What is being deleted, shown in the question
    #[prop(into)]
    subject: Signal<String>,
    on_confirm: Callback<WriteSignal<bool>>,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let (pending, set_pending) = signal(false);
    let stage = move || match (pending.get(), asking.get()) {
        (true, _) => Stage::Pending,
        (false, true) => Stage::Asking,
        (false, false) => Stage::Idle,
    };

    move || match stage() {
        Stage::Idle => view! {
            <button
                class=button_class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    asking.set(true);
                }
            >
                "Delete"
            </button>
        }
        .into_any(),
        Stage::Asking => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {move || format!("Delete {}?", subject.get())}
                </span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                        set_pending.set(true);
                        on_confirm.run(set_pending);
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        }
        .into_any(),
        Stage::Pending => view! { <span class="delete-confirm pending">"Deleting..."</span> }.into_any(),
    }
}
