//! The resume upload view controller.
//!
//! Each action checks its precondition against the current state, releases
//! the state lock, awaits the backend, then re-locks to apply the response.
//! Actions may overlap; upload and skill-suggestion responses carry a request
//! token so that a slower, older response never overwrites a newer one.

use std::path::Path;

use resumetwin_api_client::ResumeBackend;
use resumetwin_core::{validation, AppError, CareerPath, SelectedFile, REPORT_FILENAME};
use tokio::sync::Mutex;

use crate::notify::Notifier;
use crate::report::ReportSink;
use crate::state::{RequestTokens, Slice, ViewState};

pub const UPLOAD_FAILED_MESSAGE: &str = "Something went wrong!";
pub const SKILLS_FAILED_MESSAGE: &str = "Could not fetch skill suggestions.";

/// What happened when an action ran.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The request succeeded and its result was applied.
    Completed,
    /// A precondition failed; no request was issued.
    Skipped(AppError),
    /// The request failed.
    Failed(AppError),
    /// A newer request for the same slice was issued while this one was in flight.
    Superseded,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            ActionOutcome::Skipped(err) | ActionOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Inner {
    state: ViewState,
    tokens: RequestTokens,
}

pub struct ResumeUpload<B, N, S> {
    backend: B,
    notifier: N,
    sink: S,
    inner: Mutex<Inner>,
}

impl<B, N, S> ResumeUpload<B, N, S>
where
    B: ResumeBackend,
    N: Notifier,
    S: ReportSink,
{
    pub fn new(backend: B, notifier: N, sink: S) -> Self {
        Self {
            backend,
            notifier,
            sink,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Copy of the current view state.
    pub async fn snapshot(&self) -> ViewState {
        self.inner.lock().await.state.clone()
    }

    /// Current state rendered as text.
    pub async fn render(&self) -> String {
        crate::render::render(&self.snapshot().await)
    }

    pub async fn select_file(&self, file: SelectedFile) {
        if !file.is_pdf() {
            tracing::warn!(file = %file.name, "Selected file does not look like a PDF");
        }
        tracing::debug!(file = %file.name, bytes = file.len(), "File selected");
        self.inner.lock().await.state.file = Some(file);
    }

    pub async fn select_file_path(&self, path: &Path) -> Result<(), AppError> {
        let file = SelectedFile::from_path(path)?;
        self.select_file(file).await;
        Ok(())
    }

    pub async fn set_email(&self, email: impl Into<String>) {
        self.inner.lock().await.state.email = email.into();
    }

    pub async fn set_career_path(&self, career_path: Option<CareerPath>) {
        self.inner.lock().await.state.career_path = career_path;
    }

    /// Upload the selected file and replace message, resume text, ATS result
    /// and career twins with the response.
    pub async fn upload(&self) -> ActionOutcome {
        let (file, token) = {
            let mut inner = self.inner.lock().await;
            let checked = validation::require_file(inner.state.file.as_ref()).cloned();
            let file = match checked {
                Ok(file) => file,
                Err(err) => {
                    inner.state.message = err.user_message();
                    return ActionOutcome::Skipped(err);
                }
            };
            (file, inner.tokens.issue(Slice::Upload))
        };

        let result = self.backend.upload_resume(&file).await;

        let mut inner = self.inner.lock().await;
        if !inner.tokens.is_latest(Slice::Upload, token) {
            tracing::debug!(file = %file.name, token, "Discarding superseded upload response");
            return ActionOutcome::Superseded;
        }

        match result {
            Ok(response) => {
                tracing::info!(
                    file = %file.name,
                    keywords = response.ats_result.keywords_found.len(),
                    career_twins = response.career_twins.len(),
                    "Resume uploaded"
                );
                let state = &mut inner.state;
                state.message = response.message;
                state.resume_text = response.resume_text;
                state.ats_result = Some(response.ats_result);
                state.career_twins = response.career_twins;
                ActionOutcome::Completed
            }
            Err(err) => {
                // A rejected upload only replaces the status line. Resume text,
                // ATS result and career twins keep their previous values.
                inner.state.message = match err.api_message() {
                    Some(message) => {
                        tracing::warn!(file = %file.name, error = %err, "Upload rejected by backend");
                        message.to_string()
                    }
                    None => {
                        tracing::error!(file = %file.name, error = %err.detailed_message(), "Upload error");
                        UPLOAD_FAILED_MESSAGE.to_string()
                    }
                };
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Request matched and missing skills for the selected career path.
    pub async fn suggest_skills(&self) -> ActionOutcome {
        let checked = {
            let mut inner = self.inner.lock().await;
            let career_path = inner.state.career_path;
            validation::require_skill_inputs(career_path, &inner.state.resume_text).map(|path| {
                (
                    path,
                    inner.state.resume_text.clone(),
                    inner.tokens.issue(Slice::Skills),
                )
            })
        };

        let (career_path, resume_text, token) = match checked {
            Ok(inputs) => inputs,
            Err(err) => {
                self.notifier.alert(&err.user_message());
                return ActionOutcome::Skipped(err);
            }
        };

        let result = self.backend.suggest_skills(&resume_text, career_path).await;

        {
            let mut inner = self.inner.lock().await;
            if !inner.tokens.is_latest(Slice::Skills, token) {
                tracing::debug!(career_path = %career_path, token, "Discarding superseded skill suggestions");
                return ActionOutcome::Superseded;
            }

            if let Ok(suggestions) = &result {
                tracing::info!(
                    career_path = %career_path,
                    matched = suggestions.matched_skills.len(),
                    missing = suggestions.missing_skills.len(),
                    "Skill suggestions received"
                );
                inner.state.skill_suggestions = Some(suggestions.clone());
            }
        }

        match result {
            Ok(_) => ActionOutcome::Completed,
            Err(err) => {
                tracing::error!(career_path = %career_path, error = %err.detailed_message(), "Skill suggestion error");
                self.notifier.alert(SKILLS_FAILED_MESSAGE);
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Fetch the rendered report for the current ATS result and save it as `ATS_Report.pdf`.
    pub async fn download_report(&self) -> ActionOutcome {
        let ats_result = {
            let inner = self.inner.lock().await;
            match validation::require_ats_result(inner.state.ats_result.as_ref()).cloned() {
                Ok(ats) => ats,
                Err(err) => {
                    tracing::debug!("No ATS result to build a report from");
                    return ActionOutcome::Skipped(err);
                }
            }
        };

        let bytes = match self.backend.download_report(&ats_result).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(error = %err.detailed_message(), "Download failed");
                return ActionOutcome::Failed(err);
            }
        };

        match self.sink.save(REPORT_FILENAME, &bytes) {
            Ok(path) => {
                tracing::info!(path = %path.display(), bytes = bytes.len(), "Report saved");
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to save report");
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Ask the backend to email the report to the entered address.
    pub async fn send_email(&self) -> ActionOutcome {
        let email = {
            let inner = self.inner.lock().await;
            validation::require_email(&inner.state.email).map(str::to_string)
        };

        let email = match email {
            Ok(email) => email,
            Err(err) => {
                self.notifier.alert(&err.user_message());
                return ActionOutcome::Skipped(err);
            }
        };

        match self.backend.send_email(&email).await {
            Ok(response) => {
                tracing::info!(email = %email, "Report email requested");
                self.notifier.alert(&response.message);
                ActionOutcome::Completed
            }
            Err(err) => {
                match err.api_message() {
                    Some(message) => {
                        tracing::warn!(email = %email, error = %err, "Email rejected by backend");
                        self.notifier.alert(message);
                    }
                    None => {
                        tracing::error!(email = %email, error = %err.detailed_message(), "Email send failed");
                    }
                }
                ActionOutcome::Failed(err)
            }
        }
    }
}
