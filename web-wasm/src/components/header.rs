//! Header component

use leptos::prelude::*;
use profile_verify_common::Route;
use crate::app::AppContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <header class="header">
            <h1>"Profile Verify"</h1>
            <nav>
                <button class="nav-link" on:click=move |_| {
                    ctx.navigate(Route::Upload);
                }>
                    "Verify"
                </button>
            </nav>
        </header>
    }
}
