//! ResumeTwin Core Library
//!
//! Backend contract models, the shared error type, client configuration and
//! input validation used by the API client and the terminal front end.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{AppError, LogLevel};
pub use models::{
    AtsResult, CareerPath, CareerTwin, DownloadReportRequest, MessageResponse, SelectedFile,
    SendEmailRequest, SkillSuggestionRequest, SkillSuggestions, UploadResponse, REPORT_FILENAME,
};
