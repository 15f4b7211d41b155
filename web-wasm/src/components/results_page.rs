//! Results screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use profile_verify_common::workflow::VERIFY_FAILED_NOTICE;
use profile_verify_common::{ResultsEntry, VerificationClient, WorkflowState};
use crate::api::FetchVerificationClient;
use crate::app::AppContext;
use crate::components::fake_meter::FakeMeter;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // runs once after mount
    Effect::new(move |_| {
        let entry = ctx.session.try_update(|s| s.enter_results());
        match entry {
            Some(ResultsEntry::Redirect(route)) => {
                ctx.navigate(route);
            }
            Some(ResultsEntry::Verify(request)) => {
                spawn_local(async move {
                    let client = FetchVerificationClient::default();
                    let outcome = client.verify(&request.image).await;
                    if let Err(e) = &outcome {
                        web_sys::console::error_1(&format!("Error during verification: {}", e).into());
                    }
                    let failed = ctx
                        .session
                        .try_update(|s| {
                            matches!(
                                s.resolve_request(request.id, outcome),
                                Some(WorkflowState::Failed(_))
                            )
                        })
                        .unwrap_or(false);
                    if failed {
                        ctx.notify_error(VERIFY_FAILED_NOTICE);
                    }
                });
            }
            Some(ResultsEntry::Failed(e)) => {
                web_sys::console::error_1(&format!("Error during verification: {}", e).into());
                ctx.notify_error(VERIFY_FAILED_NOTICE);
            }
            Some(ResultsEntry::InFlight) | None => {}
        }
    });

    on_cleanup(move || {
        ctx.session.update(|s| s.leave_results());
    });

    let on_try_again = move |_| {
        let route = ctx.session.try_update(|s| s.try_again()).unwrap_or_default();
        ctx.dismiss_notice();
        ctx.navigate(route);
    };

    let is_loading = move || ctx.session.with(|s| s.is_loading());
    let error = move || ctx.session.with(|s| s.error_message().map(str::to_string));
    let result = move || ctx.session.with(|s| s.result().cloned());

    view! {
        <main class="results-page">
            <h2>{move || if is_loading() { "Analyzing Profile..." } else { "Verification Results" }}</h2>

            {move || {
                if is_loading() {
                    view! {
                        <div class="loading">
                            <div class="spinner" />
                            <p class="text-muted">"Our AI is analyzing the profile..."</p>
                        </div>
                    }
                    .into_any()
                } else if let Some(message) = error() {
                    view! {
                        <div class="error-view">
                            <h3>"Verification Failed"</h3>
                            <p class="text-muted">{message}</p>
                            <button class="btn btn-primary" on:click=on_try_again>"Try Again"</button>
                        </div>
                    }
                    .into_any()
                } else if let Some(result) = result() {
                    let tone = result.tone();
                    view! {
                        <div class="result">
                            <div class="verdict">
                                <h3 class="text-muted">"Our Verdict"</h3>
                                <div class=format!("verdict-label verdict-{}", tone.as_str())>
                                    {result.verdict.label().to_string()}
                                </div>
                            </div>

                            <div class="chance">
                                <h3 class="text-muted">"Chances of being fake"</h3>
                                <FakeMeter
                                    percentage=result.fake_percentage
                                    label=result.chances_of_being_fake.clone()
                                    tone=tone
                                />
                            </div>

                            <div class="explanation">
                                <h3>"Analysis Explanation"</h3>
                                <p class="why">{result.why.clone()}</p>
                            </div>

                            <button class="btn btn-secondary" on:click=on_try_again>
                                "Verify Another Profile"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    ().into_any()
                }
            }}
        </main>
    }
}
