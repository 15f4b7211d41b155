//! Screen switching tests (run with `wasm-pack test --headless --firefox`)
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use profile_verify_common::{Route, SelectedFile};
use profile_verify_web::app::AppContext;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn navigate_to_current_route_keeps_page() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AppContext::new(Route::Upload);
        ctx.session
            .update(|s| s.select_file(SelectedFile::new("me.png", "image/png", 10)).unwrap());

        assert!(!ctx.navigate(Route::Upload));
        assert_eq!(ctx.route.get_untracked(), Route::Upload);
        assert!(ctx.session.with_untracked(|s| s.selected_file().is_some()));
    });
}

#[wasm_bindgen_test]
fn navigate_switches_route() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AppContext::new(Route::Upload);

        assert!(ctx.navigate(Route::Results));
        assert_eq!(ctx.route.get_untracked(), Route::Results);
        assert!(ctx.navigate(Route::Upload));
    });
}
