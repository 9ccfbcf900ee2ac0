use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Body of `POST /suggest-skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestionRequest {
    pub resume_text: String,
    pub job_role: String,
}

/// Matched vs. missing skills for a career path.
///
/// `missing_skills` also accepts `suggested_skills`, which is the key the
/// backend's `/suggest-skills` route actually emits. An empty `career_path`
/// is filled in by the caller with the role that was requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matched_skills: Vec<String>,
    #[serde(default, alias = "suggested_skills", deserialize_with = "null_as_default")]
    pub missing_skills: Vec<String>,
}

impl SkillSuggestions {
    pub fn or_career_path(mut self, requested: &str) -> Self {
        if self.career_path.is_empty() {
            self.career_path = requested.to_string();
        }
        self
    }
}
