//! Upload → results flow against a mock endpoint
//!
//! The mock is a local axum server standing in for `/verify-account`.

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use profile_verify::client::HttpVerificationClient;
use profile_verify::error::ProfileVerifyError;
use profile_verify::upload::encode_file;
use profile_verify::verify::{verify_all, verify_image, VerifyOptions};
use profile_verify_common::workflow::VERIFY_FAILED_MESSAGE;
use profile_verify_common::{
    encode_bytes, run_verification, Error, Route, SelectedFile, Verdict, WorkflowSession,
    WorkflowState,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

const FAKE_BODY: &str =
    r#"{"chancesOfBeingFake":"73%","verdict":"Fake","why":"Profile photo appears in stock libraries."}"#;

const PNG_BYTES: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

#[derive(Default)]
struct MockState {
    hits: AtomicUsize,
    last_body: Mutex<Option<Value>>,
    last_accept: Mutex<Option<String>>,
}

impl MockState {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a mock endpoint answering every POST with `status` and `body`
async fn spawn_mock(status: StatusCode, body: &'static str) -> (String, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    let handler_state = state.clone();

    let app = Router::new().route(
        "/verify-account",
        post(move |headers: HeaderMap, Json(payload): Json<Value>| {
            let state = handler_state.clone();
            async move {
                state.hits.fetch_add(1, Ordering::SeqCst);
                *state.last_body.lock().unwrap() = Some(payload);
                *state.last_accept.lock().unwrap() = headers
                    .get(ACCEPT)
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock endpoint");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{}/verify-account", addr), state)
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write test file");
    path
}

fn quiet() -> VerifyOptions {
    VerifyOptions {
        json: true,
        show_progress: false,
    }
}

#[tokio::test]
async fn mocked_verdict_is_resolved() {
    let (url, mock) = spawn_mock(StatusCode::OK, FAKE_BODY).await;
    let client = HttpVerificationClient::new(&url, None).unwrap();
    let dir = tempdir().unwrap();
    let image = write_file(&dir, "profile.png", &PNG_BYTES);

    let mut session = WorkflowSession::new();
    let result = verify_image(&mut session, &client, &image, quiet())
        .await
        .expect("verification should succeed");

    assert_eq!(result.chances_of_being_fake, "73%");
    assert_eq!(result.fake_percentage, 73);
    assert_eq!(result.verdict, Verdict::Fake);
    assert_eq!(result.why, "Profile photo appears in stock libraries.");
    assert_eq!(session.result(), Some(&result));
    assert!(!session.is_verification_in_progress());

    assert_eq!(mock.hits(), 1);
    let body = mock.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["image_base64"], encode_bytes(&PNG_BYTES).as_str());
    assert_eq!(
        mock.last_accept.lock().unwrap().as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn server_error_ends_in_failed() {
    let (url, mock) = spawn_mock(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let client = HttpVerificationClient::new(&url, None).unwrap();
    let dir = tempdir().unwrap();
    let image = write_file(&dir, "profile.png", &PNG_BYTES);

    let mut session = WorkflowSession::new();
    let result = verify_image(&mut session, &client, &image, quiet()).await;

    assert!(matches!(
        result,
        Err(ProfileVerifyError::Common(Error::Api(500)))
    ));
    assert_eq!(mock.hits(), 1);
    assert_eq!(session.error_message(), Some(VERIFY_FAILED_MESSAGE));
    assert!(!session.is_verification_in_progress());
    assert!(session.can_retry());

    assert_eq!(session.try_again(), Route::Upload);
    assert!(session.pending_image().is_none());
}

#[tokio::test]
async fn malformed_payload_ends_in_failed() {
    let (url, _mock) = spawn_mock(StatusCode::OK, r#"{"verdict":"Fake"}"#).await;
    let client = HttpVerificationClient::new(&url, None).unwrap();
    let dir = tempdir().unwrap();
    let image = write_file(&dir, "profile.png", &PNG_BYTES);

    let mut session = WorkflowSession::new();
    let result = verify_image(&mut session, &client, &image, quiet()).await;

    assert!(matches!(
        result,
        Err(ProfileVerifyError::Common(Error::InvalidResponse(_)))
    ));
    assert!(matches!(session.state(), WorkflowState::Failed(_)));
    assert!(!session.is_verification_in_progress());
}

#[tokio::test]
async fn non_image_is_rejected_before_encoding() {
    let (url, mock) = spawn_mock(StatusCode::OK, FAKE_BODY).await;
    let client = HttpVerificationClient::new(&url, None).unwrap();
    let dir = tempdir().unwrap();
    let text = write_file(&dir, "notes.txt", b"not an image");

    let mut session = WorkflowSession::new();
    let result = verify_image(&mut session, &client, &text, quiet()).await;

    assert!(matches!(
        result,
        Err(ProfileVerifyError::Common(Error::NotAnImage(_)))
    ));
    assert_eq!(mock.hits(), 0);
    assert_eq!(session.state(), &WorkflowState::Idle);
    assert!(session.pending_image().is_none());
    assert!(!session.is_verification_in_progress());
}

#[tokio::test]
async fn results_without_flag_redirects_to_upload() {
    let (url, mock) = spawn_mock(StatusCode::OK, FAKE_BODY).await;
    let client = HttpVerificationClient::new(&url, None).unwrap();

    let mut session = WorkflowSession::new();
    let route = run_verification(&mut session, &client).await.unwrap();

    assert_eq!(route, Route::Upload);
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn submit_stores_encoder_output() {
    let dir = tempdir().unwrap();
    let image = write_file(&dir, "profile.jpg", b"\xFF\xD8\xFF\xE0jpeg-ish");

    let mut session = WorkflowSession::new();
    session
        .select_file(SelectedFile::new("profile.jpg", "image/jpeg", 12))
        .unwrap();
    let route = session.submit(encode_file(&image).await).unwrap();

    assert_eq!(route, Route::Results);
    assert_eq!(session.pending_image(), Some(&encode_file(&image).await.unwrap()));
    assert!(session.is_verification_in_progress());
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    // Bind and drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}/verify-account", addr);
    let client = HttpVerificationClient::new(&url, Some(5)).unwrap();
    let dir = tempdir().unwrap();
    let image = write_file(&dir, "profile.png", &PNG_BYTES);

    let mut session = WorkflowSession::new();
    let result = verify_image(&mut session, &client, &image, quiet()).await;

    assert!(matches!(
        result,
        Err(ProfileVerifyError::Common(Error::Transport(_)))
    ));
    assert!(!session.is_verification_in_progress());
}

#[tokio::test]
async fn verify_all_checks_each_image_once() {
    let (url, mock) = spawn_mock(StatusCode::OK, FAKE_BODY).await;
    let client = HttpVerificationClient::new(&url, None).unwrap();
    let dir = tempdir().unwrap();
    let images = vec![
        write_file(&dir, "first.png", &PNG_BYTES),
        write_file(&dir, "skip.txt", b"text"),
        write_file(&dir, "second.png", &PNG_BYTES),
    ];

    let reports = verify_all(&client, &images, quiet()).await;

    assert_eq!(reports.len(), 3);
    assert!(reports[0].outcome.is_ok());
    assert!(reports[1].outcome.is_err());
    assert!(reports[2].outcome.is_ok());
    assert_eq!(mock.hits(), 2);
}

#[test]
fn invalid_endpoint_is_rejected() {
    let result = HttpVerificationClient::new("localhost:3000", None);
    assert!(result.is_err());
}
