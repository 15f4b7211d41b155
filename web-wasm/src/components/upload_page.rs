//! Upload screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use profile_verify_common::workflow::{ENCODE_FAILED_MESSAGE, NOT_AN_IMAGE_MESSAGE};
use profile_verify_common::{Error, SelectedFile};
use web_sys::File;
use crate::app::AppContext;
use crate::components::upload_area::UploadArea;
use crate::encoder::{read_data_url, read_file_as_base64};

#[component]
pub fn UploadPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);
    let is_processing = RwSignal::new(false);

    // a fresh page holds no file handle for an earlier selection
    if ctx.session.with_untracked(|s| s.selected_file().is_some()) {
        ctx.session.update(|s| s.clear_selection());
    }

    let on_file = move |chosen: File| {
        let selected = SelectedFile::new(chosen.name(), chosen.type_(), chosen.size() as u64);
        match ctx.session.try_update(|s| s.select_file(selected)) {
            Some(Ok(())) => {
                file.set(Some(chosen.clone()));
                preview.set(None);
                spawn_local(async move {
                    match read_data_url(&chosen).await {
                        Ok(url) => preview.set(Some(url)),
                        Err(e) => web_sys::console::warn_1(&format!("preview failed: {}", e).into()),
                    }
                });
            }
            Some(Err(Error::NotAnImage(_))) => gloo::dialogs::alert(NOT_AN_IMAGE_MESSAGE),
            Some(Err(e)) => ctx.notify_error(&e.to_string()),
            None => {}
        }
    };

    let on_reset = move |_| {
        ctx.session.update(|s| s.clear_selection());
        file.set(None);
        preview.set(None);
    };

    let on_verify = move |_| {
        let Some(chosen) = file.get_untracked() else {
            ctx.notify_error(&Error::NoFileSelected.to_string());
            return;
        };

        is_processing.set(true);
        spawn_local(async move {
            let encoded = read_file_as_base64(&chosen).await;
            let submitted = ctx.session.try_update(|s| s.submit(encoded));
            is_processing.set(false);

            match submitted {
                Some(Ok(route)) => {
                    ctx.navigate(route);
                }
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("Error processing file: {}", e).into());
                    ctx.notify_error(ENCODE_FAILED_MESSAGE);
                }
                None => {}
            }
        });
    };

    let selected = move || ctx.session.with(|s| s.selected_file().cloned());

    view! {
        <main class="upload-page">
            <h2>"Verify Profile Image"</h2>
            <p class="text-muted">
                "Upload a screenshot or image of the social media profile you want to verify"
            </p>

            <Show
                when=move || selected().is_some()
                fallback=move || view! { <UploadArea on_file=on_file /> }
            >
                <div class="preview">
                    <Show when=move || preview.get().is_some()>
                        <img src=move || preview.get().unwrap_or_default() alt="Preview" />
                    </Show>
                    <div class="preview-footer">
                        <span class="preview-name">
                            {move || selected().map(|f| f.summary()).unwrap_or_default()}
                        </span>
                        <button class="btn btn-secondary btn-small" on:click=on_reset>
                            "Change"
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class="btn btn-primary"
                disabled=move || selected().is_none() || is_processing.get()
                on:click=on_verify
            >
                {move || if is_processing.get() { "Processing..." } else { "Verify Now" }}
            </button>

            <p class="text-muted">
                "For the best results, ensure the image clearly shows the profile information."
            </p>
        </main>
    }
}
