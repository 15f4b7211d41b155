use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileVerifyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Unexpected workflow state: {0}")]
    Workflow(String),

    #[error("{failed} of {total} verification(s) failed")]
    VerificationFailed { failed: usize, total: usize },

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] profile_verify_common::Error),
}

pub type Result<T> = std::result::Result<T, ProfileVerifyError>;
