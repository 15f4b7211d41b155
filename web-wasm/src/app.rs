//! Main application component

use leptos::prelude::*;
use profile_verify_common::{Route, WorkflowSession};
use crate::components::{
    header::Header,
    notice::NoticeBar,
    results_page::ResultsPage,
    upload_page::UploadPage,
};

/// Dismissible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

/// State shared by every screen
///
/// The session replaces string-keyed browser storage as the hand-off between
/// the upload and results screens.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<WorkflowSession>,
    pub route: RwSignal<Route>,
    pub notice: RwSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(route: Route) -> Self {
        Self {
            session: RwSignal::new(WorkflowSession::new()),
            route: RwSignal::new(route),
            notice: RwSignal::new(None),
        }
    }

    /// Switch screens; returns `false` if `route` is already current
    ///
    /// Setting the same route would rebuild the page and drop its local state.
    pub fn navigate(&self, route: Route) -> bool {
        if self.route.get_untracked() == route {
            return false;
        }
        self.route.set(route);
        true
    }

    pub fn notify_error(&self, message: &str) {
        self.notice.set(Some(Notice {
            message: message.to_string(),
            is_error: true,
        }));
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

fn initial_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(initial_route());
    provide_context(ctx);

    // keep the address bar in sync with the current screen
    Effect::new(move |_| {
        let path = ctx.route.get().path();
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    });

    view! {
        <div class="container">
            <Header />
            <NoticeBar />

            {move || match ctx.route.get() {
                Route::Upload => view! { <UploadPage /> }.into_any(),
                Route::Results => view! { <ResultsPage /> }.into_any(),
            }}
        </div>
    }
}
