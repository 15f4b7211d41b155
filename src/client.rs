//! HTTP verification client (reqwest)

use crate::config::validate_endpoint;
use crate::error::{ProfileVerifyError, Result};
use log::debug;
use profile_verify_common::{
    parse_verification_response, Error, PendingImage, VerificationClient, VerificationRequest,
    VerificationResult, CONTENT_TYPE_JSON,
};
use reqwest::header::ACCEPT;
use std::time::Duration;

pub struct HttpVerificationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpVerificationClient {
    pub fn new(endpoint: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        validate_endpoint(endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder
            .build()
            .map_err(|e| ProfileVerifyError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl VerificationClient for HttpVerificationClient {
    async fn verify(&self, image: &PendingImage) -> profile_verify_common::Result<VerificationResult> {
        debug!("POST {} ({} base64 chars)", self.endpoint, image.len());

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .json(&VerificationRequest::new(image))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        debug!("Response {} ({} bytes)", status, body.len());

        parse_verification_response(&body)
    }
}
