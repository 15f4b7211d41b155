use profile_verify::client::HttpVerificationClient;
use profile_verify::upload::encode_file;
use profile_verify_common::{VerificationClient, DEFAULT_ENDPOINT};
use std::path::PathBuf;

/// Hits the real backend; opt in with PROFILE_VERIFY_LIVE_IMAGE=<path>
#[tokio::test]
async fn live_endpoint_integration() {
    let image = match std::env::var("PROFILE_VERIFY_LIVE_IMAGE") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => {
            eprintln!("PROFILE_VERIFY_LIVE_IMAGE not set; skipping integration test");
            return;
        }
    };

    let endpoint = std::env::var("PROFILE_VERIFY_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let client = HttpVerificationClient::new(&endpoint, Some(120)).expect("invalid endpoint");
    let payload = encode_file(&image).await.expect("failed to read image");

    let result = client.verify(&payload).await.expect("verification failed");

    assert!(result.fake_percentage <= 100);
    assert!(!result.verdict.label().is_empty());
}
