pub mod aggregate;
pub mod dimension;
pub mod profile;

use crate::catalog::Catalog;
use crate::types::assessment::{Assessment, RaterResponses, MAX_ANSWER, MIN_ANSWER};
use crate::types::config::ScoringSettings;
use crate::types::report::{Notice, ScoreReport};
use crate::types::scoring::AssessmentResult;
use chrono::Utc;

pub use aggregate::{calculate_all_results, calculate_individual_results};

pub fn score_assessment(
    assessment: &Assessment,
    catalog: &Catalog,
    settings: &ScoringSettings,
) -> ScoreReport {
    let result = calculate_all_results(&assessment.raters, catalog, settings);
    build_report(assessment, catalog, settings, result)
}

pub fn score_rater(
    assessment: &Assessment,
    rater: &RaterResponses,
    catalog: &Catalog,
    settings: &ScoringSettings,
) -> ScoreReport {
    let result = calculate_individual_results(rater, catalog, settings);
    build_report(assessment, catalog, settings, result)
}

fn build_report(
    assessment: &Assessment,
    catalog: &Catalog,
    settings: &ScoringSettings,
    result: AssessmentResult,
) -> ScoreReport {
    ScoreReport {
        assessment_code: assessment.code.clone(),
        subject: assessment.self_rater_name.clone(),
        profile_table: settings.profile_table.name().to_string(),
        catalog_version: catalog.version().to_string(),
        generated_at: Utc::now().to_rfc3339(),
        result,
        notices: notices(assessment, catalog),
    }
}

/// Input gaps worth flagging. None of them stop scoring.
pub fn notices(assessment: &Assessment, catalog: &Catalog) -> Vec<Notice> {
    let mut notices = Vec::new();

    if !assessment
        .raters
        .iter()
        .any(|rater| !rater.rater_type.is_external())
    {
        notices.push(Notice {
            id: "self.missing".to_string(),
            message: "No SELF responses; profile reflects an unanswered baseline.".to_string(),
        });
    }

    for rater in &assessment.raters {
        let key = rater.rater_type.to_string().to_ascii_lowercase();
        let missing = rater.missing_questions(catalog).len();
        if missing > 0 {
            notices.push(Notice {
                id: format!("{key}.incomplete"),
                message: format!(
                    "{} ({}) has {} of {} questions unanswered.",
                    rater.rater_type,
                    rater.name,
                    missing,
                    catalog.all().len()
                ),
            });
        }
        let unknown = rater
            .responses
            .iter()
            .filter(|response| catalog.by_id(&response.question_id).is_none())
            .count();
        if unknown > 0 {
            notices.push(Notice {
                id: format!("{key}.unknown_questions"),
                message: format!(
                    "{} answered {} question(s) not in catalog {}; they were skipped.",
                    rater.rater_type,
                    unknown,
                    catalog.version()
                ),
            });
        }
        let repeated = rater.duplicate_answers();
        if repeated > 0 {
            notices.push(Notice {
                id: format!("{key}.duplicate_answers"),
                message: format!(
                    "{} has {} repeated answer(s); only the last answer per question counts.",
                    rater.rater_type, repeated
                ),
            });
        }
        let out_of_range = rater.out_of_range_answers();
        if out_of_range > 0 {
            notices.push(Notice {
                id: format!("{key}.score_out_of_range"),
                message: format!(
                    "{} has {} answer(s) outside {}..={}.",
                    rater.rater_type, out_of_range, MIN_ANSWER, MAX_ANSWER
                ),
            });
        }
    }

    if !assessment
        .raters
        .iter()
        .any(|rater| rater.rater_type.is_external() && rater.counts_toward_average())
    {
        notices.push(Notice {
            id: "raters.none_complete".to_string(),
            message: "No external rater has finished; awareness metrics are reported as 0."
                .to_string(),
        });
    }

    notices
}
