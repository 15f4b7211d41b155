//! Image encoder
//!
//! Turns raw image bytes (CLI) or a `FileReader` data URL (web) into the
//! bare base64 payload expected by the verification endpoint.

use base64::{engine::general_purpose, Engine as _};

use crate::error::{Error, Result};
use crate::types::PendingImage;

/// Encode raw bytes as standard base64
pub fn encode_bytes(bytes: &[u8]) -> PendingImage {
    PendingImage::from_base64(general_purpose::STANDARD.encode(bytes))
}

/// Extract the base64 part of a data URL
///
/// # Arguments
/// * `data_url` - a URL of the form "data:image/jpeg;base64,/9j/4AAQ..."
///
/// # Returns
/// Everything after the first comma, or `None` when there is no header
///
/// # Examples
/// ```
/// use profile_verify_common::strip_data_url_prefix;
///
/// assert_eq!(strip_data_url_prefix("data:image/png;base64,iVBORw0"), Some("iVBORw0"));
/// assert_eq!(strip_data_url_prefix("iVBORw0"), None);
/// ```
pub fn strip_data_url_prefix(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, payload)| payload)
}

/// Build a pending image from a `readAsDataURL` result
pub fn from_data_url(data_url: &str) -> Result<PendingImage> {
    let payload = strip_data_url_prefix(data_url)
        .ok_or_else(|| Error::Encode("data URL has no base64 payload".into()))?;
    if payload.contains(',') {
        return Err(Error::Encode("malformed data URL".into()));
    }
    Ok(PendingImage::from_base64(payload.to_string()))
}
