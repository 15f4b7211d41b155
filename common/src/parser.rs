//! Verification response parser
//!
//! The backend returns loosely typed JSON. Every field is checked here so a
//! malformed payload surfaces as `Error::InvalidResponse` instead of a broken
//! results screen.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{Verdict, VerificationResult};

/// Wire shape of a `/verify-account` response before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVerificationResponse {
    pub chances_of_being_fake: Option<Value>,
    pub verdict: Option<Value>,
    pub why: Option<Value>,
}

/// Parse and validate a response body
///
/// # Arguments
/// * `body` - response body of a 2xx reply
///
/// # Returns
/// * `Ok(VerificationResult)` - all fields present and well-formed
/// * `Err(Error::InvalidResponse)` - a field is missing or has the wrong type
/// * `Err(Error::Json)` - the body is not JSON
///
/// # Examples
/// ```
/// use profile_verify_common::{parse_verification_response, Verdict};
///
/// let body = r#"{"chancesOfBeingFake":"73%","verdict":"Fake","why":"Stock avatar"}"#;
/// let result = parse_verification_response(body).unwrap();
/// assert_eq!(result.fake_percentage, 73);
/// assert_eq!(result.verdict, Verdict::Fake);
/// ```
pub fn parse_verification_response(body: &str) -> Result<VerificationResult> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(Error::InvalidResponse("expected a JSON object".into()));
    }
    let raw: RawVerificationResponse = serde_json::from_value(value)?;
    validate(raw)
}

/// Validate an already decoded response
pub fn validate(raw: RawVerificationResponse) -> Result<VerificationResult> {
    let (chances_of_being_fake, fake_percentage) = match raw.chances_of_being_fake {
        Some(Value::String(text)) => {
            let percentage = parse_percentage(&text).ok_or_else(|| {
                Error::InvalidResponse(format!("chancesOfBeingFake is not a percentage: {:?}", text))
            })?;
            (text, percentage)
        }
        Some(Value::Number(number)) => {
            let percentage = number
                .as_f64()
                .and_then(round_percentage)
                .ok_or_else(|| {
                    Error::InvalidResponse(format!("chancesOfBeingFake out of range: {}", number))
                })?;
            (format!("{}%", number), percentage)
        }
        Some(other) => {
            return Err(Error::InvalidResponse(format!(
                "chancesOfBeingFake has unexpected type: {}",
                other
            )))
        }
        None => return Err(Error::InvalidResponse("chancesOfBeingFake missing".into())),
    };

    let verdict = match raw.verdict {
        Some(Value::String(label)) if !label.trim().is_empty() => Verdict::from_label(&label),
        Some(Value::String(_)) => return Err(Error::InvalidResponse("verdict is empty".into())),
        Some(other) => {
            return Err(Error::InvalidResponse(format!(
                "verdict has unexpected type: {}",
                other
            )))
        }
        None => return Err(Error::InvalidResponse("verdict missing".into())),
    };

    let why = match raw.why {
        Some(Value::String(why)) => why,
        Some(other) => {
            return Err(Error::InvalidResponse(format!(
                "why has unexpected type: {}",
                other
            )))
        }
        None => return Err(Error::InvalidResponse("why missing".into())),
    };

    Ok(VerificationResult {
        chances_of_being_fake,
        fake_percentage,
        verdict,
        why,
    })
}

/// Parse `"73%"`, `"73"` or `" 73.5 % "` into a rounded 0-100 value
pub fn parse_percentage(text: &str) -> Option<u8> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value: f64 = number.parse().ok()?;
    round_percentage(value)
}

fn round_percentage(value: f64) -> Option<u8> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Some(value.round() as u8)
    } else {
        None
    }
}
