use crate::catalog::Catalog;
use crate::error::{LeadscopeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaterType {
    #[serde(rename = "SELF")]
    SelfRater,
    Rater1,
    Rater2,
}

impl RaterType {
    pub fn is_external(self) -> bool {
        !matches!(self, RaterType::SelfRater)
    }
}

impl fmt::Display for RaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RaterType::SelfRater => "SELF",
            RaterType::Rater1 => "RATER1",
            RaterType::Rater2 => "RATER2",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub question_id: String,
    pub score: u8,
}

/// One rater's answers for an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaterResponses {
    pub rater_type: RaterType,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub responses: Vec<AssessmentResponse>,
    #[serde(default)]
    pub completed: bool,
}

impl RaterResponses {
    pub fn new(rater_type: RaterType, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rater_type,
            email: email.into(),
            name: name.into(),
            responses: Vec::new(),
            completed: false,
        }
    }

    pub fn score_for(&self, question_id: &str) -> Option<u8> {
        self.responses
            .iter()
            .find(|response| response.question_id == question_id)
            .map(|response| response.score)
    }

    /// Stores an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, catalog: &Catalog, question_id: &str, score: u8) -> Result<()> {
        if catalog.by_id(question_id).is_none() {
            return Err(LeadscopeError::UnknownQuestion(question_id.to_string()));
        }
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&score) {
            return Err(LeadscopeError::ScoreOutOfRange {
                question_id: question_id.to_string(),
                score,
            });
        }

        match self
            .responses
            .iter_mut()
            .find(|response| response.question_id == question_id)
        {
            Some(existing) => existing.score = score,
            None => self.responses.push(AssessmentResponse {
                question_id: question_id.to_string(),
                score,
            }),
        }

        if !self.completed && self.missing_questions(catalog).is_empty() {
            self.completed = true;
        }
        Ok(())
    }

    pub fn missing_questions<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog
            .all()
            .iter()
            .filter(|question| self.score_for(&question.id).is_none())
            .map(|question| question.id.as_str())
            .collect()
    }

    /// Eligible for the external-rater average.
    pub fn counts_toward_average(&self) -> bool {
        self.completed && !self.responses.is_empty()
    }

    /// Number of responses repeating a question answered earlier in the list.
    pub fn duplicate_answers(&self) -> usize {
        let mut seen = HashSet::new();
        self.responses
            .iter()
            .filter(|response| !seen.insert(response.question_id.as_str()))
            .count()
    }

    /// Responses whose score falls outside the answer scale.
    pub fn out_of_range_answers(&self) -> usize {
        self.responses
            .iter()
            .filter(|response| !(MIN_ANSWER..=MAX_ANSWER).contains(&response.score))
            .count()
    }

    /// Collapses repeated answers to one per question, keeping the last score
    /// in the slot of the first. Returns how many entries were dropped.
    pub fn dedupe_responses(&mut self) -> usize {
        let before = self.responses.len();
        let mut kept: Vec<AssessmentResponse> = Vec::with_capacity(before);
        for response in self.responses.drain(..) {
            match kept
                .iter_mut()
                .find(|existing| existing.question_id == response.question_id)
            {
                Some(existing) => existing.score = response.score,
                None => kept.push(response),
            }
        }
        self.responses = kept;
        before - self.responses.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub code: String,
    pub self_rater_email: String,
    pub self_rater_name: String,
    #[serde(default)]
    pub raters: Vec<RaterResponses>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    /// Opens a new assessment with an empty SELF slot.
    pub fn start(email: &str, name: &str, now: DateTime<Utc>) -> Self {
        let digest = Sha256::digest(format!("{email}|{}", now.to_rfc3339()).as_bytes());
        let hex = format!("{digest:x}");
        Self {
            id: hex[..32].to_string(),
            code: hex[..8].to_ascii_uppercase(),
            self_rater_email: email.to_string(),
            self_rater_name: name.to_string(),
            raters: vec![RaterResponses::new(RaterType::SelfRater, email, name)],
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rater(&self, rater_type: RaterType) -> Option<&RaterResponses> {
        self.raters.iter().find(|rater| rater.rater_type == rater_type)
    }

    pub fn add_rater(
        &mut self,
        rater_type: RaterType,
        email: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if !rater_type.is_external() || self.rater(rater_type).is_some() {
            return Err(LeadscopeError::RaterSlotTaken(rater_type));
        }
        self.raters.push(RaterResponses::new(rater_type, email, name));
        self.completed = false;
        self.updated_at = now;
        Ok(())
    }

    pub fn record_response(
        &mut self,
        catalog: &Catalog,
        rater_type: RaterType,
        question_id: &str,
        score: u8,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let rater = self
            .raters
            .iter_mut()
            .find(|rater| rater.rater_type == rater_type)
            .ok_or(LeadscopeError::RaterMissing(rater_type))?;
        rater.record(catalog, question_id, score)?;
        self.refresh_completion();
        self.updated_at = now;
        Ok(())
    }

    /// Applies [`RaterResponses::dedupe_responses`] to every rater.
    pub fn dedupe_responses(&mut self) -> usize {
        self.raters
            .iter_mut()
            .map(RaterResponses::dedupe_responses)
            .sum()
    }

    fn refresh_completion(&mut self) {
        self.completed = !self.raters.is_empty() && self.raters.iter().all(|rater| rater.completed);
    }
}
