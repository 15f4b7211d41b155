//! Verify command: drives the workflow for each image in turn

use crate::error::{ProfileVerifyError, Result};
use crate::render;
use crate::upload::{encode_file, inspect_file};
use indicatif::{ProgressBar, ProgressStyle};
use profile_verify_common::workflow::{
    ENCODE_FAILED_MESSAGE, NOT_AN_IMAGE_MESSAGE, VERIFY_FAILED_MESSAGE, VERIFY_FAILED_NOTICE,
};
use profile_verify_common::{
    run_verification, Error, VerificationClient, VerificationResult, WorkflowSession,
    WorkflowState,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Print results as JSON instead of the results screen
    pub json: bool,
    pub show_progress: bool,
}

/// Outcome of one image
#[derive(Debug)]
pub struct VerifyReport {
    pub path: PathBuf,
    pub outcome: Result<VerificationResult>,
}

/// Run upload → results for one image
///
/// # Returns
/// * `Ok(VerificationResult)` - the session ended in `Resolved`
/// * `Err(_)` - rejected on the upload step, or the session ended in `Failed`
pub async fn verify_image<C>(
    session: &mut WorkflowSession,
    client: &C,
    path: &Path,
    options: VerifyOptions,
) -> Result<VerificationResult>
where
    C: VerificationClient,
{
    // Upload screen
    let file = inspect_file(path)?;
    session.select_file(file.clone())?;
    if !options.json {
        println!("{}", render::render_preview(&file));
    }

    let encoded = encode_file(path).await;
    session.submit(encoded)?;

    // Results screen
    let spinner = spinner(options.show_progress && !options.json);
    let outcome = run_verification(session, client).await;
    spinner.finish_and_clear();

    match (outcome, session.state()) {
        (Ok(_), WorkflowState::Resolved(result)) => Ok(result.clone()),
        (Err(e), _) => Err(e.into()),
        (Ok(_), state) => Err(ProfileVerifyError::Workflow(state.name().to_string())),
    }
}

/// Verify every image one after another
///
/// Each image starts from a fresh upload screen ("Verify Another Profile").
pub async fn verify_all<C>(client: &C, paths: &[PathBuf], options: VerifyOptions) -> Vec<VerifyReport>
where
    C: VerificationClient,
{
    let mut session = WorkflowSession::new();
    let mut reports = Vec::with_capacity(paths.len());

    for (index, path) in paths.iter().enumerate() {
        if index > 0 {
            session.try_again();
            if !options.json {
                println!();
            }
        }

        let outcome = verify_image(&mut session, client, path, options).await;
        if options.json {
            println!("{}", report_json(path, &outcome));
        } else {
            print_outcome(path, &outcome);
        }

        reports.push(VerifyReport {
            path: path.clone(),
            outcome,
        });
    }

    reports
}

/// Message shown for a failed image, matching the web app's notifications
pub fn user_message(error: &ProfileVerifyError) -> &'static str {
    match error {
        ProfileVerifyError::Common(Error::NotAnImage(_)) => NOT_AN_IMAGE_MESSAGE,
        ProfileVerifyError::Common(Error::Encode(_)) => ENCODE_FAILED_MESSAGE,
        _ => VERIFY_FAILED_MESSAGE,
    }
}

fn print_outcome(path: &Path, outcome: &Result<VerificationResult>) {
    match outcome {
        Ok(result) => {
            println!("✔ Analysis complete\n");
            print!("{}", render::render_result(result));
        }
        Err(ProfileVerifyError::FileNotFound(file)) => {
            eprintln!("✖ File not found: {}", file);
        }
        Err(e @ ProfileVerifyError::Common(Error::NotAnImage(_) | Error::Encode(_))) => {
            eprintln!("✖ {}", user_message(e));
            log::debug!("{}", e);
        }
        Err(e) => {
            eprintln!("✖ {}", VERIFY_FAILED_NOTICE);
            log::debug!("{}", e);
            let retry = format!("profile-verify verify {}", path.display());
            print!("{}", render::render_failure(user_message(e), &retry));
        }
    }
}

fn report_json(path: &Path, outcome: &Result<VerificationResult>) -> serde_json::Value {
    match outcome {
        Ok(result) => json!({
            "file": path.display().to_string(),
            "result": result,
        }),
        Err(e) => json!({
            "file": path.display().to_string(),
            "error": e.to_string(),
        }),
    }
}

fn spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message("Analyzing profile...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
