//! Browser encoder tests (run with `wasm-pack test --headless --firefox`)
#![cfg(target_arch = "wasm32")]

use profile_verify_common::encode_bytes;
use profile_verify_web::encoder::{read_data_url, read_file_as_base64};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

wasm_bindgen_test_configure!(run_in_browser);

fn png_file(bytes: &[u8]) -> File {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let options = FilePropertyBag::new();
    options.set_type("image/png");
    File::new_with_u8_array_sequence_and_options(&JsValue::from(parts), "profile.png", &options)
        .expect("Failed to create File")
}

#[wasm_bindgen_test]
async fn data_url_keeps_header() {
    let file = png_file(b"hello");
    let url = read_data_url(&file).await.unwrap();
    assert_eq!(url, "data:image/png;base64,aGVsbG8=");
}

#[wasm_bindgen_test]
async fn base64_has_no_prefix() {
    let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let file = png_file(&bytes);

    let image = read_file_as_base64(&file).await.unwrap();

    assert_eq!(image, encode_bytes(&bytes));
    assert!(!image.as_str().starts_with("data:"));
    assert!(!image.as_str().contains(','));
}
