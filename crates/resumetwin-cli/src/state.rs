use resumetwin_core::{AtsResult, CareerPath, CareerTwin, SelectedFile, SkillSuggestions};
use serde::{Serialize, Serializer};

/// Everything the resume view shows. Each action writes only its own slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    #[serde(rename = "file_name", serialize_with = "serialize_file_name")]
    pub file: Option<SelectedFile>,
    pub message: String,
    pub resume_text: String,
    /// Present once an upload succeeded, even if the backend sent no ATS fields.
    pub ats_result: Option<AtsResult>,
    pub email: String,
    pub skill_suggestions: Option<SkillSuggestions>,
    pub career_twins: Vec<CareerTwin>,
    pub career_path: Option<CareerPath>,
}

fn serialize_file_name<S: Serializer>(
    file: &Option<SelectedFile>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match file {
        Some(file) => serializer.serialize_some(&file.name),
        None => serializer.serialize_none(),
    }
}

/// State slices written by a network response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Upload,
    Skills,
}

/// Monotonic request counters, one per slice. A response is applied only if
/// its token is still the newest one issued for that slice.
#[derive(Debug, Default)]
pub struct RequestTokens {
    upload: u64,
    skills: u64,
}

impl RequestTokens {
    pub fn issue(&mut self, slice: Slice) -> u64 {
        let counter = self.counter(slice);
        *counter += 1;
        *counter
    }

    pub fn is_latest(&self, slice: Slice, token: u64) -> bool {
        let current = match slice {
            Slice::Upload => self.upload,
            Slice::Skills => self.skills,
        };
        current == token
    }

    fn counter(&mut self, slice: Slice) -> &mut u64 {
        match slice {
            Slice::Upload => &mut self.upload,
            Slice::Skills => &mut self.skills,
        }
    }
}
