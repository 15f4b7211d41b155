//! Verification client seam
//!
//! The CLI implements this with `reqwest`, the web app with `fetch`.

use crate::error::Result;
use crate::types::{PendingImage, VerificationResult};

/// Default backend endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://fake-social-media-detector-backend.vercel.app/verify-account";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Sends one image to the backend and returns the validated verdict
///
/// Implementations issue a single POST with a `VerificationRequest` body,
/// map non-2xx statuses to `Error::Api(status)` without reading the body,
/// and run 2xx bodies through `parse_verification_response`.
#[allow(async_fn_in_trait)]
pub trait VerificationClient {
    async fn verify(&self, image: &PendingImage) -> Result<VerificationResult>;
}
