//! Error types

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please upload an image file (got {0})")]
    NotAnImage(String),

    #[error("Please select an image to verify")]
    NoFileSelected,

    #[error("Error processing file: {0}")]
    Encode(String),

    #[error("No image found")]
    NoImageFound,

    #[error("API error: {0}")]
    Api(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
