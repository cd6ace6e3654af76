use super::dimension::{coachability_range, score_responses};
use crate::catalog::Catalog;
use crate::types::assessment::{RaterResponses, RaterType};
use crate::types::config::ScoringSettings;
use crate::types::question::Section;
use crate::types::scoring::{
    AssessmentResult, CoachabilityBand, DimensionScore, DimensionScores, Score, DIMENSION_MAX,
    DIMENSION_MIN, DISPLAY_MAX,
};

/// Maps a raw opposed-pair score onto the 0..5 display scale. Not clamped.
pub fn normalize(raw: f64) -> f64 {
    let min = f64::from(DIMENSION_MIN);
    let max = f64::from(DIMENSION_MAX);
    (raw - min) / (max - min) * DISPLAY_MAX
}

/// 100 minus the mean absolute self/others gap, scaled by the dimension span.
pub fn self_awareness(self_raw: &DimensionScores, others: &[DimensionScores]) -> f64 {
    if others.is_empty() {
        return 0.0;
    }
    let span = f64::from(DIMENSION_MAX - DIMENSION_MIN);
    let total_gap: f64 = Section::OPPOSED
        .iter()
        .map(|section| {
            let mine = f64::from(self_raw.get(*section));
            let theirs = mean(others, *section).unwrap_or(mine);
            (mine - theirs).abs()
        })
        .sum();
    let mean_gap = total_gap / Section::OPPOSED.len() as f64;
    to_percent(1.0 - mean_gap / span)
}

pub fn coachability_awareness(
    self_raw: &DimensionScores,
    others: &[DimensionScores],
    range: (Score, Score),
) -> f64 {
    let Some(theirs) = mean(others, Section::Coachability) else {
        return 0.0;
    };
    let span = f64::from(range.1 - range.0);
    if span <= 0.0 {
        return 0.0;
    }
    let gap = (f64::from(self_raw.coachability) - theirs).abs();
    to_percent(1.0 - gap / span)
}

/// Equal thirds of the catalog's coachability range. An empty range is `Low`.
pub fn coachability_band(score: Score, range: (Score, Score)) -> CoachabilityBand {
    let (low, high) = (f64::from(range.0), f64::from(range.1));
    if high <= low {
        return CoachabilityBand::Low;
    }
    let third = (high - low) / 3.0;
    let score = f64::from(score);
    if score < low + third {
        CoachabilityBand::Low
    } else if score < low + 2.0 * third {
        CoachabilityBand::Medium
    } else {
        CoachabilityBand::High
    }
}

/// Scores every rater on an assessment and compares SELF with the external
/// raters that finished.
pub fn calculate_all_results(
    raters: &[RaterResponses],
    catalog: &Catalog,
    settings: &ScoringSettings,
) -> AssessmentResult {
    let self_rater = raters
        .iter()
        .find(|rater| rater.rater_type == RaterType::SelfRater);
    let self_responses = self_rater
        .map(|rater| rater.responses.as_slice())
        .unwrap_or(&[]);
    let self_raw = score_responses(self_responses, catalog, settings.item_ceiling);

    let rater1 = eligible_scores(raters, RaterType::Rater1, catalog, settings);
    let rater2 = eligible_scores(raters, RaterType::Rater2, catalog, settings);
    let others: Vec<DimensionScores> = rater1.iter().chain(rater2.iter()).copied().collect();

    let range = coachability_range(catalog);
    let mut dimension_scores: Vec<DimensionScore> = Section::OPPOSED
        .iter()
        .map(|section| DimensionScore::Aggregate {
            name: section.display_name().to_string(),
            self_score: normalize(f64::from(self_raw.get(*section))),
            rater1_score: rater1.map(|scores| normalize(f64::from(scores.get(*section)))),
            rater2_score: rater2.map(|scores| normalize(f64::from(scores.get(*section)))),
            avg_score: mean(&others, *section).map(normalize),
            min: 0.0,
            max: DISPLAY_MAX,
            color: section.color().to_string(),
        })
        .collect();
    dimension_scores.push(DimensionScore::Aggregate {
        name: Section::Coachability.display_name().to_string(),
        self_score: f64::from(self_raw.coachability),
        rater1_score: rater1.map(|scores| f64::from(scores.coachability)),
        rater2_score: rater2.map(|scores| f64::from(scores.coachability)),
        avg_score: mean(&others, Section::Coachability),
        min: f64::from(range.0),
        max: f64::from(range.1),
        color: Section::Coachability.color().to_string(),
    });

    let result = AssessmentResult {
        dimension_scores,
        self_awareness: self_awareness(&self_raw, &others),
        coachability_awareness: coachability_awareness(&self_raw, &others, range),
        coachability_band: coachability_band(self_raw.coachability, range),
        profile_type: Some(match self_rater {
            Some(_) => settings
                .profile_table
                .classify(&self_raw.profile_tuple())
                .to_string(),
            None => settings.profile_table.fallback().to_string(),
        }),
        self_raw,
        catalog_fingerprint: catalog.fingerprint().to_string(),
    };
    tracing::info!(
        external_raters = others.len(),
        self_awareness = result.self_awareness,
        profile = result.profile_type.as_deref().unwrap_or_default(),
        "scored assessment"
    );
    result
}

/// Scores a single rater in isolation, e.g. while their answers are still
/// coming in. Awareness metrics need a comparison and stay at 0.
pub fn calculate_individual_results(
    rater: &RaterResponses,
    catalog: &Catalog,
    settings: &ScoringSettings,
) -> AssessmentResult {
    let raw = score_responses(&rater.responses, catalog, settings.item_ceiling);
    tracing::debug!(rater = %rater.rater_type, answers = rater.responses.len(), "scored rater");

    let range = coachability_range(catalog);
    let mut dimension_scores: Vec<DimensionScore> = Section::OPPOSED
        .iter()
        .map(|section| DimensionScore::Individual {
            name: section.display_name().to_string(),
            score: normalize(f64::from(raw.get(*section))),
            min: 0.0,
            max: DISPLAY_MAX,
            color: section.color().to_string(),
        })
        .collect();
    dimension_scores.push(DimensionScore::Individual {
        name: Section::Coachability.display_name().to_string(),
        score: f64::from(raw.coachability),
        min: f64::from(range.0),
        max: f64::from(range.1),
        color: Section::Coachability.color().to_string(),
    });

    let profile_type = (rater.rater_type == RaterType::SelfRater).then(|| {
        settings
            .profile_table
            .classify(&raw.profile_tuple())
            .to_string()
    });

    AssessmentResult {
        dimension_scores,
        self_awareness: 0.0,
        coachability_awareness: 0.0,
        coachability_band: coachability_band(raw.coachability, range),
        profile_type,
        self_raw: raw,
        catalog_fingerprint: catalog.fingerprint().to_string(),
    }
}

fn eligible_scores(
    raters: &[RaterResponses],
    rater_type: RaterType,
    catalog: &Catalog,
    settings: &ScoringSettings,
) -> Option<DimensionScores> {
    let rater = raters
        .iter()
        .find(|rater| rater.rater_type == rater_type)?;
    if !rater.counts_toward_average() {
        tracing::debug!(rater = %rater_type, "skipping unfinished rater");
        return None;
    }
    let scores = score_responses(&rater.responses, catalog, settings.item_ceiling);
    tracing::debug!(rater = %rater_type, answers = rater.responses.len(), "scored rater");
    Some(scores)
}

fn mean(scores: &[DimensionScores], section: Section) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: f64 = scores.iter().map(|s| f64::from(s.get(section))).sum();
    Some(total / scores.len() as f64)
}

fn to_percent(ratio: f64) -> f64 {
    let percent = (ratio * 100.0).clamp(0.0, 100.0);
    (percent * 10.0).round() / 10.0
}
