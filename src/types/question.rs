use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavioral dimension a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Esteem,
    Trust,
    Driver,
    Adaptability,
    ProblemResolution,
    Coachability,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Esteem,
        Section::Trust,
        Section::Driver,
        Section::Adaptability,
        Section::ProblemResolution,
        Section::Coachability,
    ];

    /// The five sections scored as a signed difference of two poles.
    pub const OPPOSED: [Section; 5] = [
        Section::Esteem,
        Section::Trust,
        Section::Driver,
        Section::Adaptability,
        Section::ProblemResolution,
    ];

    /// Opposing poles of this section. Coachability is self-opposed.
    pub fn poles(self) -> (SubSection, SubSection) {
        match self {
            Section::Esteem => (SubSection::Insecure, SubSection::Pride),
            Section::Trust => (SubSection::Trusting, SubSection::Cautious),
            Section::Driver => (SubSection::Hustle, SubSection::Reserved),
            Section::Adaptability => (SubSection::Flexible, SubSection::Precise),
            Section::ProblemResolution => (SubSection::Direct, SubSection::Avoidant),
            Section::Coachability => (SubSection::Coachability, SubSection::Coachability),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Section::Esteem => "Esteem",
            Section::Trust => "Trust",
            Section::Driver => "Business Drive",
            Section::Adaptability => "Adaptability",
            Section::ProblemResolution => "Problem Resolution",
            Section::Coachability => "Coachability",
        }
    }

    /// Chart color handed to the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            Section::Esteem => "#4F81BD",
            Section::Trust => "#9BBB59",
            Section::Driver => "#C0504D",
            Section::Adaptability => "#8064A2",
            Section::ProblemResolution => "#F79646",
            Section::Coachability => "#4BACC6",
        }
    }

    pub fn parse(value: &str) -> Option<Section> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "esteem" => Some(Section::Esteem),
            "trust" => Some(Section::Trust),
            "driver" | "business_drive" => Some(Section::Driver),
            "adaptability" => Some(Section::Adaptability),
            "problem_resolution" => Some(Section::ProblemResolution),
            "coachability" => Some(Section::Coachability),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One pole of a section's opposing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubSection {
    Insecure,
    Pride,
    Trusting,
    Cautious,
    Hustle,
    Reserved,
    Flexible,
    Precise,
    Direct,
    Avoidant,
    Coachability,
}

impl SubSection {
    pub fn section(self) -> Section {
        match self {
            SubSection::Insecure | SubSection::Pride => Section::Esteem,
            SubSection::Trusting | SubSection::Cautious => Section::Trust,
            SubSection::Hustle | SubSection::Reserved => Section::Driver,
            SubSection::Flexible | SubSection::Precise => Section::Adaptability,
            SubSection::Direct | SubSection::Avoidant => Section::ProblemResolution,
            SubSection::Coachability => Section::Coachability,
        }
    }
}

impl fmt::Display for SubSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubSection::Insecure => "Insecure",
            SubSection::Pride => "Pride",
            SubSection::Trusting => "Trusting",
            SubSection::Cautious => "Cautious",
            SubSection::Hustle => "Hustle",
            SubSection::Reserved => "Reserved",
            SubSection::Flexible => "Flexible",
            SubSection::Precise => "Precise",
            SubSection::Direct => "Direct",
            SubSection::Avoidant => "Avoidant",
            SubSection::Coachability => "Coachability",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub section: Section,
    pub sub_section: SubSection,
    // Carried for export; scoring never reads these.
    #[serde(default)]
    pub is_reversed: bool,
    #[serde(default)]
    pub negative_score: bool,
}
