//! Verification API via `fetch`

use profile_verify_common::{
    parse_verification_response, Error, PendingImage, Result, VerificationClient,
    VerificationRequest, VerificationResult, CONTENT_TYPE_JSON, DEFAULT_ENDPOINT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Endpoint baked in at build time, falling back to the public backend
pub fn configured_endpoint() -> &'static str {
    option_env!("PROFILE_VERIFY_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT)
}

pub struct FetchVerificationClient {
    endpoint: String,
}

impl FetchVerificationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for FetchVerificationClient {
    fn default() -> Self {
        Self::new(configured_endpoint())
    }
}

impl VerificationClient for FetchVerificationClient {
    async fn verify(&self, image: &PendingImage) -> Result<VerificationResult> {
        let body = serde_json::to_string(&VerificationRequest::new(image))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(js_transport_error)?;
        let headers = request.headers();
        headers.set("Content-Type", CONTENT_TYPE_JSON).map_err(js_transport_error)?;
        headers.set("Accept", CONTENT_TYPE_JSON).map_err(js_transport_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Transport("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_transport_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_transport_error)?;

        if !resp.ok() {
            return Err(Error::Api(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_transport_error)?)
            .await
            .map_err(js_transport_error)?;
        let text = text
            .as_string()
            .ok_or_else(|| Error::Transport("response body is not text".into()))?;

        parse_verification_response(&text)
    }
}

fn js_transport_error(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}
