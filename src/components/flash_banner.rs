//! Flash Banner Component
//!
//! One message per failed (or notable) operation, dismissed after a few
//! seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, Flash};

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn FlashBanner() -> impl IntoView {
    let ctx = use_app_context();

    // Auto-dismiss, unless a newer message replaced this one meanwhile
    Effect::new(move |_| {
        let Some(shown) = ctx.flash.get() else { return };
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            if ctx.flash.get_untracked().as_ref() == Some(&shown) {
                ctx.dismiss_flash();
            }
        });
    });

    move || {
        ctx.flash.get().map(|flash| {
            let (class, text) = match flash {
                Flash::Info(text) => ("flash flash-info", text),
                Flash::Error(text) => ("flash flash-error", text),
            };
            view! {
                <div class=class role="alert" on:click=move |_| ctx.dismiss_flash()>
                    {text}
                </div>
            }
        })
    }
}
