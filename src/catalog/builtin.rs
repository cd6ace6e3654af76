use crate::types::question::{Question, SubSection};

pub const BUILTIN_VERSION: &str = "2024.1";

// (id, text, sub-section, reversed, negative)
const ENTRIES: &[(&str, &str, SubSection, bool, bool)] = &[
    (
        "esteem-insecure-1",
        "I worry that others will discover I am not as capable as they think.",
        SubSection::Insecure,
        false,
        true,
    ),
    (
        "esteem-insecure-2",
        "I need reassurance from others before I trust my own decisions.",
        SubSection::Insecure,
        false,
        true,
    ),
    (
        "esteem-pride-1",
        "I find it difficult to admit when I have made a mistake.",
        SubSection::Pride,
        false,
        true,
    ),
    (
        "esteem-pride-2",
        "I believe my way of doing things is usually the best way.",
        SubSection::Pride,
        true,
        false,
    ),
    (
        "trust-trusting-1",
        "I assume people will follow through on their commitments.",
        SubSection::Trusting,
        false,
        false,
    ),
    (
        "trust-trusting-2",
        "I hand over important work without checking on it.",
        SubSection::Trusting,
        true,
        false,
    ),
    (
        "trust-cautious-1",
        "I keep information to myself until I know how it will be used.",
        SubSection::Cautious,
        false,
        true,
    ),
    (
        "trust-cautious-2",
        "New team members have to earn my confidence before I rely on them.",
        SubSection::Cautious,
        false,
        false,
    ),
    (
        "driver-hustle-1",
        "I push myself and others to move faster than planned.",
        SubSection::Hustle,
        false,
        false,
    ),
    (
        "driver-hustle-2",
        "I feel restless when there is no clear target to chase.",
        SubSection::Hustle,
        true,
        false,
    ),
    (
        "driver-reserved-1",
        "I prefer to wait for direction before starting new initiatives.",
        SubSection::Reserved,
        false,
        true,
    ),
    (
        "driver-reserved-2",
        "I am comfortable letting others set the pace of the work.",
        SubSection::Reserved,
        false,
        false,
    ),
    (
        "adaptability-flexible-1",
        "I change my plans easily when circumstances shift.",
        SubSection::Flexible,
        false,
        false,
    ),
    (
        "adaptability-flexible-2",
        "I am comfortable starting work before every detail is settled.",
        SubSection::Flexible,
        true,
        false,
    ),
    (
        "adaptability-precise-1",
        "I follow established procedures even when a shortcut exists.",
        SubSection::Precise,
        false,
        false,
    ),
    (
        "adaptability-precise-2",
        "Unexpected changes to a schedule frustrate me.",
        SubSection::Precise,
        false,
        true,
    ),
    (
        "resolution-direct-1",
        "I raise problems with people as soon as I notice them.",
        SubSection::Direct,
        false,
        false,
    ),
    (
        "resolution-direct-2",
        "I say what I think in a disagreement even if it causes tension.",
        SubSection::Direct,
        true,
        false,
    ),
    (
        "resolution-avoidant-1",
        "I hope difficult issues will resolve themselves without my involvement.",
        SubSection::Avoidant,
        false,
        true,
    ),
    (
        "resolution-avoidant-2",
        "I soften bad news so much that the message gets lost.",
        SubSection::Avoidant,
        false,
        true,
    ),
    (
        "coachability-1",
        "I actively ask for feedback on my performance.",
        SubSection::Coachability,
        false,
        false,
    ),
    (
        "coachability-2",
        "I change my behavior after receiving critical feedback.",
        SubSection::Coachability,
        false,
        false,
    ),
    (
        "coachability-3",
        "I listen to feedback without defending myself.",
        SubSection::Coachability,
        false,
        false,
    ),
    (
        "coachability-4",
        "I seek out people who will challenge my thinking.",
        SubSection::Coachability,
        false,
        false,
    ),
];

pub fn questions() -> Vec<Question> {
    ENTRIES
        .iter()
        .map(|(id, text, sub_section, is_reversed, negative_score)| Question {
            id: (*id).to_string(),
            text: (*text).to_string(),
            section: sub_section.section(),
            sub_section: *sub_section,
            is_reversed: *is_reversed,
            negative_score: *negative_score,
        })
        .collect()
}

