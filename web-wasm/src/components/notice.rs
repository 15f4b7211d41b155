//! Dismissible notification

use leptos::prelude::*;
use crate::app::AppContext;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <Show when=move || ctx.notice.get().is_some()>
            <div
                class=move || {
                    let error = ctx.notice.get().map(|n| n.is_error).unwrap_or(false);
                    if error { "notice notice-error" } else { "notice" }
                }
                role="alert"
            >
                <span>{move || ctx.notice.get().map(|n| n.message).unwrap_or_default()}</span>
                <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>
                    "×"
                </button>
            </div>
        </Show>
    }
}
