use async_trait::async_trait;
use bytes::Bytes;
use resumetwin_core::{
    AppError, AtsResult, CareerPath, MessageResponse, SelectedFile, SkillSuggestions,
    UploadResponse,
};

use crate::ApiClient;

/// The four backend calls the resume view depends on.
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadResponse, AppError>;

    async fn suggest_skills(
        &self,
        resume_text: &str,
        career_path: CareerPath,
    ) -> Result<SkillSuggestions, AppError>;

    async fn download_report(&self, ats_result: &AtsResult) -> Result<Bytes, AppError>;

    async fn send_email(&self, email: &str) -> Result<MessageResponse, AppError>;
}

#[async_trait]
impl ResumeBackend for ApiClient {
    async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadResponse, AppError> {
        ApiClient::upload_resume(self, file).await
    }

    async fn suggest_skills(
        &self,
        resume_text: &str,
        career_path: CareerPath,
    ) -> Result<SkillSuggestions, AppError> {
        ApiClient::suggest_skills(self, resume_text, career_path).await
    }

    async fn download_report(&self, ats_result: &AtsResult) -> Result<Bytes, AppError> {
        ApiClient::download_report(self, ats_result).await
    }

    async fn send_email(&self, email: &str) -> Result<MessageResponse, AppError> {
        ApiClient::send_email(self, email).await
    }
}

#[async_trait]
impl<T: ResumeBackend + ?Sized> ResumeBackend for std::sync::Arc<T> {
    async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadResponse, AppError> {
        (**self).upload_resume(file).await
    }

    async fn suggest_skills(
        &self,
        resume_text: &str,
        career_path: CareerPath,
    ) -> Result<SkillSuggestions, AppError> {
        (**self).suggest_skills(resume_text, career_path).await
    }

    async fn download_report(&self, ats_result: &AtsResult) -> Result<Bytes, AppError> {
        (**self).download_report(ats_result).await
    }

    async fn send_email(&self, email: &str) -> Result<MessageResponse, AppError> {
        (**self).send_email(email).await
    }
}
