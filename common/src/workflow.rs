//! Upload → results workflow
//!
//! `WorkflowSession` is the typed hand-off between the upload screen and the
//! results screen. It owns the pending image and the "verification in
//! progress" flag; both frontends drive it through the same transitions:
//!
//! ```text
//! Idle ─select─▶ FileSelected ─submit─▶ Submitting ─enter_results─▶ Pending
//!                                                                    │
//!                     Idle ◀─try_again── Resolved | Failed ◀─resolve─┘
//! ```

use log::{debug, info, warn};

use crate::client::VerificationClient;
use crate::error::{Error, Result};
use crate::types::{PendingImage, SelectedFile, VerificationResult};

/// Alert shown when a non-image file is picked
pub const NOT_AN_IMAGE_MESSAGE: &str = "Please upload an image file";
/// Notification shown when encoding the file fails
pub const ENCODE_FAILED_MESSAGE: &str = "Error processing file. Please try again.";
/// Error view text on the results screen
pub const VERIFY_FAILED_MESSAGE: &str = "Failed to verify profile. Please try again.";
/// Dismissible notification on the results screen
pub const VERIFY_FAILED_NOTICE: &str = "Verification failed. Please try again.";

/// Screens reachable inside the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Upload,
    Results,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Upload => "/upload",
            Route::Results => "/results",
        }
    }

    /// Unknown paths land on the upload screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/results" => Route::Results,
            _ => Route::Upload,
        }
    }
}

/// Workflow state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    /// Upload screen, nothing chosen
    #[default]
    Idle,
    /// Upload screen, preview shown
    FileSelected(SelectedFile),
    /// Image encoded and stored, navigating to results
    Submitting,
    /// Results screen, waiting for the backend
    Pending,
    Resolved(VerificationResult),
    Failed(String),
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::FileSelected(_) => "file-selected",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Pending => "pending",
            WorkflowState::Resolved(_) => "resolved",
            WorkflowState::Failed(_) => "failed",
        }
    }
}

/// One call to the verification client
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    /// Matches the outcome to the visit that issued it
    pub id: u64,
    pub image: PendingImage,
}

/// What the results screen must do on entry
#[derive(Debug)]
pub enum ResultsEntry {
    /// No verification was started; go back
    Redirect(Route),
    /// Call the verification client with this image
    Verify(VerifyRequest),
    /// A request is already outstanding
    InFlight,
    /// Nothing to verify even though the flag was set
    Failed(Error),
}

/// Session shared by the upload and results screens
#[derive(Debug, Clone, Default)]
pub struct WorkflowSession {
    state: WorkflowState,
    pending_image: Option<PendingImage>,
    verification_in_progress: bool,
    request_id: u64,
}

impl WorkflowSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from its stored parts (state starts at `Idle`)
    pub fn from_parts(pending_image: Option<PendingImage>, verification_in_progress: bool) -> Self {
        Self {
            state: WorkflowState::Idle,
            pending_image,
            verification_in_progress,
            request_id: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn pending_image(&self) -> Option<&PendingImage> {
        self.pending_image.as_ref()
    }

    pub fn is_verification_in_progress(&self) -> bool {
        self.verification_in_progress
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.state {
            WorkflowState::FileSelected(file) => Some(file),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&VerificationResult> {
        match &self.state {
            WorkflowState::Resolved(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Submitting | WorkflowState::Pending)
    }

    /// "Try Again" is offered on both terminal states
    pub fn can_retry(&self) -> bool {
        matches!(self.state, WorkflowState::Resolved(_) | WorkflowState::Failed(_))
    }

    /// Pick (or drop) a file on the upload screen
    ///
    /// Non-image MIME types are rejected and leave the session untouched.
    /// Accepting a new file discards whatever a previous, abandoned
    /// submission left behind.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<()> {
        if !file.is_image() {
            warn!("Rejected non-image file {} ({})", file.name, file.mime_type);
            return Err(Error::NotAnImage(file.mime_type));
        }

        if self.verification_in_progress || self.pending_image.is_some() {
            debug!("Discarding stale pending verification");
        }
        self.pending_image = None;
        self.verification_in_progress = false;

        debug!("Selected {}", file.summary());
        self.transition(WorkflowState::FileSelected(file));
        Ok(())
    }

    /// "Change" on the preview
    pub fn clear_selection(&mut self) {
        if matches!(self.state, WorkflowState::FileSelected(_)) {
            self.transition(WorkflowState::Idle);
        }
    }

    /// Confirm the upload with the encoder's output
    ///
    /// # Returns
    /// * `Ok(Route::Results)` - image and flag stored, navigate to results
    /// * `Err(Error::NoFileSelected)` - nothing was selected
    /// * `Err(_)` - the encoder failed; the selection is kept
    pub fn submit(&mut self, encoded: Result<PendingImage>) -> Result<Route> {
        if self.selected_file().is_none() {
            return Err(Error::NoFileSelected);
        }

        let image = encoded.map_err(|e| {
            warn!("Encoding failed: {}", e);
            e
        })?;

        info!("Submitting image ({} base64 chars)", image.len());
        self.pending_image = Some(image);
        self.verification_in_progress = true;
        self.transition(WorkflowState::Submitting);
        Ok(Route::Results)
    }

    /// Called when the results screen is shown
    pub fn enter_results(&mut self) -> ResultsEntry {
        if !self.verification_in_progress {
            debug!("No verification in progress, redirecting to upload");
            self.transition(WorkflowState::Idle);
            return ResultsEntry::Redirect(Route::Upload);
        }

        if self.state == WorkflowState::Pending {
            return ResultsEntry::InFlight;
        }

        match self.pending_image.clone() {
            Some(image) => {
                self.request_id += 1;
                self.transition(WorkflowState::Pending);
                ResultsEntry::Verify(VerifyRequest {
                    id: self.request_id,
                    image,
                })
            }
            None => {
                self.verification_in_progress = false;
                self.transition(WorkflowState::Failed(VERIFY_FAILED_MESSAGE.to_string()));
                ResultsEntry::Failed(Error::NoImageFound)
            }
        }
    }

    /// Apply the verification client's outcome
    ///
    /// The flag is cleared either way. If the results screen was left while
    /// the request was in flight the outcome is discarded.
    pub fn resolve(&mut self, outcome: Result<VerificationResult>) -> &WorkflowState {
        match outcome {
            Ok(result) => self.complete(Ok(result)),
            Err(e) => self.complete(Err(&e)),
        };
        &self.state
    }

    /// Like `resolve`, but ignores outcomes of superseded requests
    ///
    /// A request is superseded once the results screen was left and entered
    /// again with a newer submission; its outcome must not touch the flag.
    ///
    /// # Returns
    /// * `Some(state)` - the outcome was applied, `state` is `Resolved` or `Failed`
    /// * `None` - the outcome was discarded
    pub fn resolve_request(
        &mut self,
        id: u64,
        outcome: Result<VerificationResult>,
    ) -> Option<&WorkflowState> {
        if id != self.request_id {
            debug!("Ignoring outcome of superseded request {}", id);
            return None;
        }
        let applied = match outcome {
            Ok(result) => self.complete(Ok(result)),
            Err(e) => self.complete(Err(&e)),
        };
        applied.then_some(&self.state)
    }

    /// Returns `false` when the outcome was discarded
    fn complete(&mut self, outcome: std::result::Result<VerificationResult, &Error>) -> bool {
        self.verification_in_progress = false;

        if self.state != WorkflowState::Pending {
            debug!("Discarding verification outcome in state {}", self.state.name());
            return false;
        }

        match outcome {
            Ok(result) => {
                info!("Verdict: {} ({})", result.verdict, result.chances_of_being_fake);
                self.transition(WorkflowState::Resolved(result));
            }
            Err(e) => {
                warn!("Verification failed: {}", e);
                self.transition(WorkflowState::Failed(VERIFY_FAILED_MESSAGE.to_string()));
            }
        }
        true
    }

    /// Navigate away from the results screen
    pub fn leave_results(&mut self) {
        if self.state == WorkflowState::Pending {
            self.transition(WorkflowState::Idle);
        }
    }

    /// "Try Again" / "Verify Another Profile"
    pub fn try_again(&mut self) -> Route {
        self.pending_image = None;
        self.verification_in_progress = false;
        self.transition(WorkflowState::Idle);
        Route::Upload
    }

    fn transition(&mut self, next: WorkflowState) {
        debug!("workflow: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}

/// Run the results screen once: enter, call the client, apply the outcome
///
/// # Returns
/// * `Ok(Route::Results)` - the session ended in `Resolved` or `Failed`
/// * `Ok(Route::Upload)` - there was nothing to verify
/// * `Err(_)` - the client failed (already applied to the session)
pub async fn run_verification<C>(session: &mut WorkflowSession, client: &C) -> Result<Route>
where
    C: VerificationClient,
{
    match session.enter_results() {
        ResultsEntry::Redirect(route) => Ok(route),
        ResultsEntry::InFlight => Ok(Route::Results),
        ResultsEntry::Failed(e) => Err(e),
        ResultsEntry::Verify(request) => match client.verify(&request.image).await {
            Ok(result) => {
                session.complete(Ok(result));
                Ok(Route::Results)
            }
            Err(e) => {
                session.complete(Err(&e));
                Err(e)
            }
        },
    }
}
