use crate::types::scoring::AssessmentResult;
use serde::Serialize;

/// Something the reader of a report should know about the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub assessment_code: String,
    pub subject: String,
    pub profile_table: String,
    pub catalog_version: String,
    pub generated_at: String,
    pub result: AssessmentResult,
    pub notices: Vec<Notice>,
}

impl ScoreReport {
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }
}
