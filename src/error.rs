use crate::types::assessment::RaterType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadscopeError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("score {score} for question {question_id} is outside 1..=5")]
    ScoreOutOfRange { question_id: String, score: u8 },

    #[error("rater slot already taken: {0}")]
    RaterSlotTaken(RaterType),

    #[error("rater not present on assessment: {0}")]
    RaterMissing(RaterType),

    #[error("invalid assessment file {path}: {reason}")]
    AssessmentParse { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeadscopeError>;
