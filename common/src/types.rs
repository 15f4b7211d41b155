//! Verification types
//!
//! Shared between the CLI and the web (WASM) frontends:
//! - SelectedFile: the file chosen on the upload screen
//! - PendingImage: base64 payload handed to the results screen
//! - VerificationRequest: request body for `/verify-account`
//! - VerificationResult: validated verdict returned by the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// File chosen on the upload screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Whether the MIME type declares an image (`image/*`)
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Size in megabytes, as shown under the preview
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// Preview line, e.g. `profile.png (1.25 MB)`
    pub fn summary(&self) -> String {
        format!("{} ({:.2} MB)", self.name, self.size_mb())
    }
}

/// Base64 encoded image waiting for verification
///
/// Never contains a `data:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage(String);

impl PendingImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Crate-internal constructor; callers go through the encoder.
    pub(crate) fn from_base64(data: String) -> Self {
        Self(data)
    }
}

/// Request body for the verification endpoint
#[derive(Debug, Serialize)]
pub struct VerificationRequest<'a> {
    pub image_base64: &'a str,
}

impl<'a> VerificationRequest<'a> {
    pub fn new(image: &'a PendingImage) -> Self {
        Self {
            image_base64: image.as_str(),
        }
    }
}

/// Classification label returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Real,
    Fake,
    Other(String),
}

impl Verdict {
    /// `Real`/`Fake` match case-insensitively, anything else is kept verbatim.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("real") {
            Verdict::Real
        } else if trimmed.eq_ignore_ascii_case("fake") {
            Verdict::Fake
        } else {
            Verdict::Other(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Verdict::Real => "Real",
            Verdict::Fake => "Fake",
            Verdict::Other(label) => label.as_str(),
        }
    }

    pub fn tone(&self) -> VerdictTone {
        match self {
            Verdict::Real => VerdictTone::Genuine,
            Verdict::Fake => VerdictTone::Suspicious,
            Verdict::Other(_) => VerdictTone::Uncertain,
        }
    }
}

impl From<String> for Verdict {
    fn from(label: String) -> Self {
        Verdict::from_label(&label)
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        verdict.label().to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation tone of a verdict (green / red / amber)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Genuine,
    Suspicious,
    Uncertain,
}

impl VerdictTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictTone::Genuine => "genuine",
            VerdictTone::Suspicious => "suspicious",
            VerdictTone::Uncertain => "uncertain",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VerdictTone::Genuine => "✅",
            VerdictTone::Suspicious => "❌",
            VerdictTone::Uncertain => "⚠️",
        }
    }
}

/// Validated verification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Display text as sent by the backend, e.g. `73%`
    pub chances_of_being_fake: String,

    /// Rounded percentage (0-100) for the meter
    pub fake_percentage: u8,

    pub verdict: Verdict,

    /// Free-text explanation
    pub why: String,
}

impl VerificationResult {
    pub fn tone(&self) -> VerdictTone {
        self.verdict.tone()
    }
}
