//! Error types module
//!
//! All failures of the client are unified under `AppError`. Validation variants
//! are raised before any request is issued; `Api` and `Transport` come from the
//! HTTP client. Each variant describes how the UI should present it.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for backend-reported failures
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Missing career path or resume text")]
    MissingSkillInputs,

    #[error("No ATS result available")]
    MissingAtsResult,

    #[error("Missing email address")]
    MissingEmail,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backend answered with a non-success status. `message` is set only
    /// when the body is JSON with a non-empty `message` field; `body` keeps the
    /// raw text for logs.
    #[error("API request failed with status {status}: {body}")]
    Api {
        status: u16,
        message: Option<String>,
        body: String,
    },

    #[error("Request failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Transport {
            message: format!("{:#}", err),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl AppError {
    /// True for failures caught before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::NoFileSelected
                | AppError::MissingSkillInputs
                | AppError::MissingAtsResult
                | AppError::MissingEmail
                | AppError::InvalidInput(_)
        )
    }

    /// Message that may be shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NoFileSelected => "Please select a file.".to_string(),
            AppError::MissingSkillInputs => {
                "Please upload your resume and select a career path.".to_string()
            }
            AppError::MissingAtsResult => "Upload your resume first.".to_string(),
            AppError::MissingEmail => "Enter your email address.".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::Api {
                message: Some(ref message),
                ..
            } if !message.is_empty() => message.clone(),
            AppError::Api { .. } | AppError::Transport { .. } | AppError::Io(_) => {
                "Something went wrong!".to_string()
            }
            AppError::Config(ref msg) => msg.clone(),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NoFileSelected
            | AppError::MissingSkillInputs
            | AppError::MissingAtsResult
            | AppError::MissingEmail
            | AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Api { .. } => LogLevel::Warn,
            AppError::Transport { .. } | AppError::Io(_) | AppError::Config(_) => LogLevel::Error,
        }
    }

    /// Backend-provided message of an `Api` error, if the body carried one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}
