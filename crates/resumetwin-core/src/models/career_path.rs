use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Career roles the user can request skill suggestions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerPath {
    #[serde(rename = "Web Developer")]
    WebDeveloper,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Android Developer")]
    AndroidDeveloper,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
}

impl CareerPath {
    pub const ALL: [CareerPath; 5] = [
        CareerPath::WebDeveloper,
        CareerPath::DataScientist,
        CareerPath::AndroidDeveloper,
        CareerPath::DevOpsEngineer,
        CareerPath::UiUxDesigner,
    ];

    /// Label sent to the backend as `job_role`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerPath::WebDeveloper => "Web Developer",
            CareerPath::DataScientist => "Data Scientist",
            CareerPath::AndroidDeveloper => "Android Developer",
            CareerPath::DevOpsEngineer => "DevOps Engineer",
            CareerPath::UiUxDesigner => "UI/UX Designer",
        }
    }
}

impl fmt::Display for CareerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareerPath {
    type Err = AppError;

    /// Case-insensitive match on the label, also accepting `-`/`_` for spaces
    /// (`data-scientist`, `devops_engineer`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        CareerPath::ALL
            .into_iter()
            .find(|path| normalize(path.as_str()) == wanted)
            .ok_or_else(|| {
                let choices: Vec<&str> = CareerPath::ALL.iter().map(|p| p.as_str()).collect();
                AppError::InvalidInput(format!(
                    "Unknown career path '{}'. Choose one of: {}",
                    s.trim(),
                    choices.join(", ")
                ))
            })
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
