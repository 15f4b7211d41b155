//! Profile Verify Common Library
//!
//! Types and workflow shared by the CLI and the web (WASM) frontends

pub mod types;
pub mod error;
pub mod encoder;
pub mod parser;
pub mod client;
pub mod workflow;

pub use types::{PendingImage, SelectedFile, Verdict, VerdictTone, VerificationRequest, VerificationResult};
pub use error::{Error, Result};
pub use encoder::{encode_bytes, from_data_url, strip_data_url_prefix};
pub use parser::{parse_percentage, parse_verification_response, RawVerificationResponse};
pub use client::{VerificationClient, CONTENT_TYPE_JSON, DEFAULT_ENDPOINT};
pub use workflow::{run_verification, ResultsEntry, Route, VerifyRequest, WorkflowSession, WorkflowState};
