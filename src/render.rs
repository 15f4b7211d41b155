//! Terminal rendering of the results screen

use profile_verify_common::{SelectedFile, VerificationResult};

const METER_WIDTH: usize = 30;

/// Fake-chance meter, e.g. `[█████░░░░░]`
pub fn meter(percentage: u8, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width + 50) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn render_preview(file: &SelectedFile) -> String {
    format!("📷 {}", file.summary())
}

pub fn render_result(result: &VerificationResult) -> String {
    let mut out = String::new();
    out.push_str("Verification Results\n\n");
    out.push_str(&format!(
        "  Our Verdict: {} {}\n\n",
        result.tone().icon(),
        result.verdict
    ));
    out.push_str("  Chances of being fake\n");
    out.push_str(&format!(
        "  {} {}\n",
        meter(result.fake_percentage, METER_WIDTH),
        result.chances_of_being_fake
    ));
    out.push_str(&format!("   0%{:>width$}\n\n", "100%", width = METER_WIDTH - 1));
    out.push_str("  Analysis Explanation\n");
    for line in result.why.lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// Error view with the single recovery action
pub fn render_failure(message: &str, retry_command: &str) -> String {
    format!(
        "Verification Failed\n  {}\n  Try Again: {}\n",
        message, retry_command
    )
}
