//! Question catalog snapshots.
//!
//! A [`Catalog`] is an immutable, versioned list of questions. Scoring takes
//! one explicitly; nothing reads a process-wide question list.

pub mod builtin;

use crate::error::{LeadscopeError, Result};
use crate::types::question::{Question, Section, SubSection};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: String,
    fingerprint: String,
    questions: Vec<Question>,
}

/// On-disk shape used by the admin export and import path.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    #[serde(default, skip_deserializing)]
    fingerprint: String,
    questions: Vec<Question>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_parts(builtin::BUILTIN_VERSION.to_string(), builtin::questions())
    }

    pub fn new(version: impl Into<String>, questions: Vec<Question>) -> Result<Self> {
        validate_questions(&questions)?;
        Ok(Self::from_parts(version.into(), questions))
    }

    fn from_parts(version: String, questions: Vec<Question>) -> Self {
        let fingerprint = fingerprint(&questions);
        Self {
            version,
            fingerprint,
            questions,
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.version, file.questions)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LeadscopeError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)
            .map_err(|e| LeadscopeError::Catalog(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(
            path = %path.display(),
            version = %catalog.version,
            questions = catalog.questions.len(),
            "loaded catalog snapshot"
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            version: self.version.clone(),
            fingerprint: self.fingerprint.clone(),
            questions: self.questions.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// SHA-256 over the serialized question list.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn by_section(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn by_sub_section(&self, sub_section: SubSection) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.sub_section == sub_section)
            .collect()
    }
}

fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(LeadscopeError::Catalog("catalog has no questions".to_string()));
    }

    let mut seen = HashSet::new();
    for question in questions {
        if question.id.trim().is_empty() {
            return Err(LeadscopeError::Catalog("question id cannot be empty".to_string()));
        }
        if !seen.insert(question.id.as_str()) {
            return Err(LeadscopeError::Catalog(format!(
                "duplicate question id: {}",
                question.id
            )));
        }
        if question.sub_section.section() != question.section {
            return Err(LeadscopeError::Catalog(format!(
                "question {} places sub-section {} under {}",
                question.id, question.sub_section, question.section
            )));
        }
    }
    Ok(())
}

fn fingerprint(questions: &[Question]) -> String {
    let mut hasher = Sha256::new();
    for question in questions {
        // serde_json cannot fail on these plain structs
        if let Ok(bytes) = serde_json::to_vec(question) {
            hasher.update(&bytes);
        }
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}
