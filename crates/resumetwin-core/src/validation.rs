//! Preconditions checked before a request is issued.

use crate::error::AppError;
use crate::models::{AtsResult, CareerPath, SelectedFile};

pub fn require_file(file: Option<&SelectedFile>) -> Result<&SelectedFile, AppError> {
    file.ok_or(AppError::NoFileSelected)
}

/// Skill suggestions need both a chosen role and previously extracted resume text.
pub fn require_skill_inputs(
    career_path: Option<CareerPath>,
    resume_text: &str,
) -> Result<CareerPath, AppError> {
    match career_path {
        Some(path) if !resume_text.trim().is_empty() => Ok(path),
        _ => Err(AppError::MissingSkillInputs),
    }
}

pub fn require_ats_result(ats_result: Option<&AtsResult>) -> Result<&AtsResult, AppError> {
    ats_result.ok_or(AppError::MissingAtsResult)
}

/// Returns the trimmed address. Only emptiness is checked; the backend owns delivery.
pub fn require_email(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::MissingEmail);
    }
    Ok(email)
}
