//! Upload step: file inspection and encoding
//!
//! Mirrors the upload screen. The MIME type is worked out the way a browser
//! does for a picked file (extension first), falling back to magic bytes.

use crate::error::{ProfileVerifyError, Result};
use image::ImageFormat;
use profile_verify_common::{encode_bytes, PendingImage, SelectedFile};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// Describe a file for `WorkflowSession::select_file`
pub fn inspect_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(ProfileVerifyError::FileNotFound(path.display().to_string()));
    }

    let size_bytes = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(SelectedFile::new(name, detect_mime_type(path)?, size_bytes))
}

/// MIME type from the extension, then from the file header
pub fn detect_mime_type(path: &Path) -> Result<String> {
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format.to_mime_type().to_string());
    }

    let mut header = [0u8; 32];
    let read = File::open(path)?.read(&mut header)?;
    let mime = match image::guess_format(&header[..read]) {
        Ok(format) => format.to_mime_type(),
        Err(_) => UNKNOWN_MIME,
    };
    Ok(mime.to_string())
}

/// Read and base64-encode a file
///
/// Fails with `Error::Encode` if the file cannot be read.
pub async fn encode_file(path: &Path) -> profile_verify_common::Result<PendingImage> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        profile_verify_common::Error::Encode(format!("{}: {}", path.display(), e))
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(encode_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_inspect_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let file = inspect_file(&path).unwrap();
        assert_eq!(file.name, "profile.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size_bytes, 8);
        assert!(file.is_image());
    }

    #[test]
    fn test_detect_by_magic_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screenshot");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        assert_eq!(detect_mime_type(&path).unwrap(), "image/png");
    }

    #[test]
    fn test_detect_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let file = inspect_file(&path).unwrap();
        assert_eq!(file.mime_type, UNKNOWN_MIME);
        assert!(!file.is_image());
    }

    #[test]
    fn test_inspect_missing_file() {
        let result = inspect_file(Path::new("/nonexistent/profile.png"));
        assert!(matches!(result, Err(ProfileVerifyError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_encode_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.png");
        std::fs::write(&path, b"hello").unwrap();

        let image = encode_file(&path).await.unwrap();
        assert_eq!(image.as_str(), "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_encode_missing_file() {
        let result = encode_file(Path::new("/nonexistent/profile.png")).await;
        assert!(matches!(result, Err(profile_verify_common::Error::Encode(_))));
    }
}
