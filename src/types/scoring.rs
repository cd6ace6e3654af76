use crate::types::question::Section;
use serde::{Deserialize, Serialize};

pub type Score = i32;

/// Modeled bounds of an opposed-pair dimension score. Not enforced.
pub const DIMENSION_MIN: Score = -28;
pub const DIMENSION_MAX: Score = 28;

/// Upper end of the normalized display scale.
pub const DISPLAY_MAX: f64 = 5.0;

/// Raw scores for one rater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub esteem: Score,
    pub trust: Score,
    pub driver: Score,
    pub adaptability: Score,
    pub problem_resolution: Score,
    pub coachability: Score,
}

impl DimensionScores {
    pub fn get(&self, section: Section) -> Score {
        match section {
            Section::Esteem => self.esteem,
            Section::Trust => self.trust,
            Section::Driver => self.driver,
            Section::Adaptability => self.adaptability,
            Section::ProblemResolution => self.problem_resolution,
            Section::Coachability => self.coachability,
        }
    }

    pub fn set(&mut self, section: Section, score: Score) {
        match section {
            Section::Esteem => self.esteem = score,
            Section::Trust => self.trust = score,
            Section::Driver => self.driver = score,
            Section::Adaptability => self.adaptability = score,
            Section::ProblemResolution => self.problem_resolution = score,
            Section::Coachability => self.coachability = score,
        }
    }

    /// Esteem, trust, driver, adaptability, problem resolution, in that order.
    pub fn profile_tuple(&self) -> [Score; 5] {
        [
            self.esteem,
            self.trust,
            self.driver,
            self.adaptability,
            self.problem_resolution,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachabilityBand {
    Low,
    Medium,
    High,
}

/// Display entry for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionScore {
    #[serde(rename_all = "camelCase")]
    Individual {
        name: String,
        score: f64,
        min: f64,
        max: f64,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Aggregate {
        name: String,
        self_score: f64,
        rater1_score: Option<f64>,
        rater2_score: Option<f64>,
        avg_score: Option<f64>,
        min: f64,
        max: f64,
        color: String,
    },
}

impl DimensionScore {
    pub fn name(&self) -> &str {
        match self {
            DimensionScore::Individual { name, .. } | DimensionScore::Aggregate { name, .. } => {
                name
            }
        }
    }

    /// The subject's own value: `score` for individual entries, `selfScore` otherwise.
    pub fn primary(&self) -> f64 {
        match self {
            DimensionScore::Individual { score, .. } => *score,
            DimensionScore::Aggregate { self_score, .. } => *self_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub dimension_scores: Vec<DimensionScore>,
    pub self_awareness: f64,
    pub coachability_awareness: f64,
    pub coachability_band: CoachabilityBand,
    pub profile_type: Option<String>,
    pub self_raw: DimensionScores,
    pub catalog_fingerprint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_cover_every_section() {
        let mut scores = DimensionScores::default();
        for (index, section) in Section::ALL.into_iter().enumerate() {
            scores.set(section, index as Score + 10);
        }
        for (index, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(scores.get(section), index as Score + 10);
        }
        assert_eq!(scores.profile_tuple(), [10, 11, 12, 13, 14]);
    }

    #[test]
    fn dimension_score_is_tagged_explicitly() {
        let entry = DimensionScore::Aggregate {
            name: "Trust".to_string(),
            self_score: 2.5,
            rater1_score: Some(3.0),
            rater2_score: None,
            avg_score: Some(3.0),
            min: 0.0,
            max: 5.0,
            color: "#9BBB59".to_string(),
        };
        let json = serde_json::to_value(&entry).expect("entry should serialize");
        assert_eq!(json["kind"], "aggregate");
        assert_eq!(json["selfScore"], 2.5);
        assert!(json["rater2Score"].is_null());

        let back: DimensionScore = serde_json::from_value(json).expect("entry should parse");
        assert_eq!(back, entry);
        assert_eq!(back.primary(), 2.5);
    }
}
