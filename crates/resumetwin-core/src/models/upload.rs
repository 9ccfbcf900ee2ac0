use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::null_as_default;

/// ATS analysis returned by `POST /upload`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsResult {
    #[serde(default)]
    pub score: Option<Number>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords_found: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

impl AtsResult {
    /// Score as shown to the user; a missing or zero score reads "0".
    pub fn score_display(&self) -> String {
        match &self.score {
            Some(n) if n.as_f64().is_some_and(|v| v != 0.0) => n.to_string(),
            _ => "0".to_string(),
        }
    }
}

/// Example role/company profile sharing skills with the uploaded resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerTwin {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    /// Number of skills shared with the resume, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
}

/// Response body of `POST /upload`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ats_result: AtsResult,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_twins: Vec<CareerTwin>,
}

/// `{ "message": ... }` body used by `/send-email` and by backend error responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}
