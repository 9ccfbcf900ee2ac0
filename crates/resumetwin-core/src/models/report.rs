use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::AtsResult;

/// File name the downloaded report is saved under.
pub const REPORT_FILENAME: &str = "ATS_Report.pdf";

/// Body of `POST /download-report`: the score/suggestions/keywords subset of an ATS result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadReportRequest {
    pub score: Option<Number>,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
}

impl From<&AtsResult> for DownloadReportRequest {
    fn from(ats: &AtsResult) -> Self {
        DownloadReportRequest {
            score: ats.score.clone(),
            suggestions: ats.suggestions.clone(),
            keywords: ats.keywords_found.clone(),
        }
    }
}

/// Body of `POST /send-email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub email: String,
}
