//! Domain methods for the ResumeTwin API client.

use bytes::Bytes;
use resumetwin_core::{
    AppError, AtsResult, CareerPath, DownloadReportRequest, MessageResponse, SelectedFile,
    SendEmailRequest, SkillSuggestionRequest, SkillSuggestions, UploadResponse,
};

use crate::ApiClient;

/// Multipart field the backend reads the resume from.
pub const RESUME_FIELD: &str = "resume";

impl ApiClient {
    /// Upload a resume for text extraction, ATS scoring and career-twin matching.
    pub async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadResponse, AppError> {
        let mut part =
            reqwest::multipart::Part::bytes(file.content.to_vec()).file_name(file.name.clone());
        if file.is_pdf() {
            part = part
                .mime_str("application/pdf")
                .map_err(|e| AppError::InvalidInput(format!("Invalid content type: {}", e)))?;
        }

        let form = reqwest::multipart::Form::new().part(RESUME_FIELD, part);

        tracing::debug!(file = %file.name, bytes = file.len(), "Uploading resume");
        self.post_multipart("/upload", form).await
    }

    /// Matched and missing skills of the resume text for a career path.
    pub async fn suggest_skills(
        &self,
        resume_text: &str,
        career_path: CareerPath,
    ) -> Result<SkillSuggestions, AppError> {
        let body = SkillSuggestionRequest {
            resume_text: resume_text.to_string(),
            job_role: career_path.as_str().to_string(),
        };

        let suggestions: SkillSuggestions = self.post_json("/suggest-skills", &body).await?;
        Ok(suggestions.or_career_path(career_path.as_str()))
    }

    /// Render the ATS report on the backend and return the document bytes.
    pub async fn download_report(&self, ats_result: &AtsResult) -> Result<Bytes, AppError> {
        let body = DownloadReportRequest::from(ats_result);
        self.post_json_for_bytes("/download-report", &body).await
    }

    /// Ask the backend to email the last generated report.
    pub async fn send_email(&self, email: &str) -> Result<MessageResponse, AppError> {
        let body = SendEmailRequest {
            email: email.to_string(),
        };
        self.post_json("/send-email", &body).await
    }
}
