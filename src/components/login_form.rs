//! Login Form Component
//!
//! Sign-in and registration in one form; the mode toggles which fields show.

use catalog_core::domain::{Credentials, Registration};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::use_app_store;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (registering, set_registering) = signal(false);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        set_pending.set(true);
        set_error.set(None);

        let (email, password) = (email.get(), password.get());
        let register = registering.get();
        let username = username.get();
        spawn_local(async move {
            let result = if register {
                commands::register(ctx, store, Registration { username, email, password }).await
            } else {
                commands::sign_in(ctx, store, Credentials { email, password }).await
            };
            if let Err(e) = result {
                set_error.set(Some(e.to_string()));
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>{move || if registering.get() { "Create account" } else { "Sign in" }}</h2>
            <Show when=move || registering.get()>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </Show>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" prop:disabled=move || pending.get()>
                {move || if registering.get() { "Register" } else { "Sign in" }}
            </button>
            <button
                type="button"
                class="link-btn"
                on:click=move |_| {
                    set_error.set(None);
                    set_registering.update(|r| *r = !*r);
                }
            >
                {move || if registering.get() { "Have an account? Sign in" } else { "New here? Register" }}
            </button>
        </form>
    }
}
