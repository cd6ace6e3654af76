use crate::types::scoring::Score;
use std::fmt;

/// Inclusive `[min, max]` range on a raw dimension score.
pub type ScoreBand = (Score, Score);

const ANY: ScoreBand = (Score::MIN, Score::MAX);
const LOW: ScoreBand = (Score::MIN, 13);
const MID: ScoreBand = (14, 18);
const HIGH: ScoreBand = (19, Score::MAX);
const NOT_LOW: ScoreBand = (14, Score::MAX);
const NOT_HIGH: ScoreBand = (Score::MIN, 18);

/// One row of a classification table. Ranges are ordered esteem, trust,
/// driver, adaptability, problem resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRule {
    pub label: &'static str,
    pub ranges: [ScoreBand; 5],
}

impl ProfileRule {
    const fn new(label: &'static str, ranges: [ScoreBand; 5]) -> Self {
        Self { label, ranges }
    }

    pub fn matches(&self, scores: &[Score; 5]) -> bool {
        self.ranges
            .iter()
            .zip(scores.iter())
            .all(|((min, max), score)| (*min..=*max).contains(score))
    }
}

const ARCHETYPE_RULES: &[ProfileRule] = &[
    ProfileRule::new("The Trusting Driven Flexible", [ANY, HIGH, HIGH, HIGH, ANY]),
    ProfileRule::new("The Trusting Driven Precise", [ANY, HIGH, HIGH, LOW, ANY]),
    ProfileRule::new("The Trusting Reserved Flexible", [ANY, HIGH, LOW, HIGH, ANY]),
    ProfileRule::new("The Trusting Reserved Precise", [ANY, HIGH, LOW, LOW, ANY]),
    ProfileRule::new("The Cautious Driven Flexible", [ANY, LOW, HIGH, HIGH, ANY]),
    ProfileRule::new("The Cautious Driven Precise", [ANY, LOW, HIGH, LOW, ANY]),
    ProfileRule::new("The Cautious Reserved Flexible", [ANY, LOW, LOW, HIGH, ANY]),
    ProfileRule::new("The Cautious Reserved Precise", [ANY, LOW, LOW, LOW, ANY]),
    ProfileRule::new("The Confident Direct Leader", [HIGH, MID, MID, MID, HIGH]),
    ProfileRule::new("The Confident Diplomat", [HIGH, MID, MID, MID, LOW]),
    ProfileRule::new("The Humble Direct Leader", [LOW, MID, MID, MID, HIGH]),
    ProfileRule::new("The Humble Diplomat", [LOW, MID, MID, MID, LOW]),
    ProfileRule::new("The Steady Contributor", [MID, MID, MID, MID, MID]),
];

const ACHIEVER_RULES: &[ProfileRule] = &[
    ProfileRule::new("The Visionary Catalyst", [HIGH, HIGH, HIGH, HIGH, NOT_LOW]),
    ProfileRule::new("The Strategic Commander", [HIGH, LOW, HIGH, LOW, HIGH]),
    ProfileRule::new("The Bold Challenger", [HIGH, ANY, ANY, ANY, HIGH]),
    ProfileRule::new("The Relentless Builder", [ANY, ANY, HIGH, LOW, ANY]),
    ProfileRule::new("The Adaptive Navigator", [ANY, ANY, NOT_HIGH, HIGH, ANY]),
    ProfileRule::new("The Collaborative Harmonizer", [ANY, HIGH, NOT_HIGH, ANY, LOW]),
    ProfileRule::new("The Supportive Mentor", [LOW, HIGH, ANY, ANY, ANY]),
    ProfileRule::new("The Independent Operator", [ANY, LOW, HIGH, ANY, ANY]),
    ProfileRule::new("The Careful Analyst", [ANY, LOW, LOW, LOW, ANY]),
    ProfileRule::new("The Quiet Stabilizer", [LOW, ANY, LOW, NOT_HIGH, ANY]),
];

/// The two classification tables. They are kept separate and never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTable {
    /// Trust/drive/adaptability archetypes, falls back to "Profile Not Found".
    Archetype,
    /// Ten achiever archetypes, falls back to "The Balanced Achiever".
    Achiever,
}

impl ProfileTable {
    pub fn parse(value: &str) -> Option<ProfileTable> {
        match value.trim().to_ascii_lowercase().as_str() {
            "archetype" => Some(ProfileTable::Archetype),
            "achiever" => Some(ProfileTable::Achiever),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProfileTable::Archetype => "archetype",
            ProfileTable::Achiever => "achiever",
        }
    }

    pub fn rules(self) -> &'static [ProfileRule] {
        match self {
            ProfileTable::Archetype => ARCHETYPE_RULES,
            ProfileTable::Achiever => ACHIEVER_RULES,
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            ProfileTable::Archetype => "Profile Not Found",
            ProfileTable::Achiever => "The Balanced Achiever",
        }
    }

    /// First rule whose five ranges all contain `scores`, else the fallback.
    pub fn classify(self, scores: &[Score; 5]) -> &'static str {
        self.rules()
            .iter()
            .find(|rule| rule.matches(scores))
            .map(|rule| rule.label)
            .unwrap_or_else(|| self.fallback())
    }
}

impl fmt::Display for ProfileTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
