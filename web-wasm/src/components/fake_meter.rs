//! Fake-chance meter

use leptos::prelude::*;
use profile_verify_common::VerdictTone;

#[component]
pub fn FakeMeter(percentage: u8, label: String, tone: VerdictTone) -> impl IntoView {
    view! {
        <div class="meter-container">
            <div class="meter-bar">
                <div
                    class=format!("meter-fill meter-{}", tone.as_str())
                    style=format!("width: {}%", percentage.min(100))
                />
            </div>
            <div class="meter-scale">
                <span>"0%"</span>
                <span class="meter-value">{label}</span>
                <span>"100%"</span>
            </div>
        </div>
    }
}
