use crate::catalog::Catalog;
use crate::types::assessment::{AssessmentResponse, MAX_ANSWER, MIN_ANSWER};
use crate::types::question::{Section, SubSection};
use crate::types::scoring::{DimensionScores, Score};

/// Sum of the rater's answers to one sub-section. Unknown ids are skipped and
/// a question answered more than once counts with its last answer.
pub fn raw_sub_total(
    responses: &[AssessmentResponse],
    catalog: &Catalog,
    sub_section: SubSection,
) -> Score {
    catalog
        .by_sub_section(sub_section)
        .iter()
        .filter_map(|question| {
            responses
                .iter()
                .rev()
                .find(|response| response.question_id == question.id)
        })
        .map(|response| Score::from(response.score))
        .sum()
}

/// `question count * item_ceiling - raw total`. Applied to both poles alike,
/// independent of the per-question reversed flags.
pub fn adjusted_sub_score(
    responses: &[AssessmentResponse],
    catalog: &Catalog,
    sub_section: SubSection,
    item_ceiling: Score,
) -> Score {
    let max_possible = catalog.by_sub_section(sub_section).len() as Score * item_ceiling;
    max_possible - raw_sub_total(responses, catalog, sub_section)
}

/// Signed score of an opposed-pair section. Coachability falls through to
/// its raw total.
pub fn dimension_score(
    responses: &[AssessmentResponse],
    catalog: &Catalog,
    section: Section,
    item_ceiling: Score,
) -> Score {
    if section == Section::Coachability {
        return coachability_score(responses, catalog);
    }
    let (first, second) = section.poles();
    adjusted_sub_score(responses, catalog, first, item_ceiling)
        + adjusted_sub_score(responses, catalog, second, item_ceiling)
}

pub fn coachability_score(responses: &[AssessmentResponse], catalog: &Catalog) -> Score {
    raw_sub_total(responses, catalog, SubSection::Coachability)
}

/// Lowest and highest coachability totals a complete answer set can reach.
pub fn coachability_range(catalog: &Catalog) -> (Score, Score) {
    let count = catalog.by_sub_section(SubSection::Coachability).len() as Score;
    (
        count * Score::from(MIN_ANSWER),
        count * Score::from(MAX_ANSWER),
    )
}

pub fn score_responses(
    responses: &[AssessmentResponse],
    catalog: &Catalog,
    item_ceiling: Score,
) -> DimensionScores {
    let mut scores = DimensionScores::default();
    for section in Section::ALL {
        scores.set(
            section,
            dimension_score(responses, catalog, section, item_ceiling),
        );
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_ITEM_CEILING;

    fn answer_sub_section(
        catalog: &Catalog,
        sub_section: SubSection,
        score: u8,
    ) -> Vec<AssessmentResponse> {
        catalog
            .by_sub_section(sub_section)
            .into_iter()
            .map(|question| AssessmentResponse {
                question_id: question.id.clone(),
                score,
            })
            .collect()
    }

    fn answer_all(catalog: &Catalog, score: u8) -> Vec<AssessmentResponse> {
        catalog
            .all()
            .iter()
            .map(|question| AssessmentResponse {
                question_id: question.id.clone(),
                score,
            })
            .collect()
    }

    #[test]
    fn default_ceiling_is_the_literal_seven() {
        assert_eq!(DEFAULT_ITEM_CEILING, 7);
        let catalog = Catalog::builtin();
        // Two questions, nothing answered: 2 * 7.
        assert_eq!(
            adjusted_sub_score(&[], &catalog, SubSection::Pride, DEFAULT_ITEM_CEILING),
            14
        );
    }

    #[test]
    fn esteem_scenario_insecure_fives_pride_ones() {
        let catalog = Catalog::builtin();
        let mut responses = answer_sub_section(&catalog, SubSection::Insecure, 5);
        responses.extend(answer_sub_section(&catalog, SubSection::Pride, 1));

        assert_eq!(
            adjusted_sub_score(&responses, &catalog, SubSection::Insecure, 7),
            4
        );
        assert_eq!(
            adjusted_sub_score(&responses, &catalog, SubSection::Pride, 7),
            12
        );
        assert_eq!(
            dimension_score(&responses, &catalog, Section::Esteem, 7),
            16
        );
    }

    #[test]
    fn complete_answers_follow_the_closed_form() {
        let catalog = Catalog::builtin();
        for score in 1..=5u8 {
            let responses = answer_all(&catalog, score);
            let scores = score_responses(&responses, &catalog, 7);
            // 2 * 7 * 2 - 2 * score - 2 * score
            let expected = 28 - 4 * Score::from(score);
            for section in Section::OPPOSED {
                assert_eq!(scores.get(section), expected, "{section} at {score}");
            }
        }
    }

    #[test]
    fn zero_responses_yield_fully_inverted_baseline() {
        let catalog = Catalog::builtin();
        let scores = score_responses(&[], &catalog, 7);
        assert_eq!(scores.profile_tuple(), [28; 5]);
        assert_eq!(scores.coachability, 0);
    }

    #[test]
    fn raising_one_answer_lowers_adjusted_sub_score() {
        let catalog = Catalog::builtin();
        let mut responses = answer_all(&catalog, 2);
        let target = catalog.by_sub_section(SubSection::Hustle)[0].id.clone();
        let before = adjusted_sub_score(&responses, &catalog, SubSection::Hustle, 7);

        for response in responses.iter_mut() {
            if response.question_id == target {
                response.score = 3;
            }
        }
        let after = adjusted_sub_score(&responses, &catalog, SubSection::Hustle, 7);
        assert_eq!(after, before - 1);
        assert!(dimension_score(&responses, &catalog, Section::Driver, 7) < 20);
    }

    #[test]
    fn coachability_is_a_raw_sum_in_four_to_twenty() {
        let catalog = Catalog::builtin();
        assert_eq!(coachability_range(&catalog), (4, 20));
        assert_eq!(coachability_score(&answer_all(&catalog, 1), &catalog), 4);
        assert_eq!(coachability_score(&answer_all(&catalog, 5), &catalog), 20);
        assert_eq!(
            dimension_score(&answer_all(&catalog, 3), &catalog, Section::Coachability, 7),
            12
        );
    }

    #[test]
    fn repeated_answers_count_once_with_last_score() {
        let catalog = Catalog::builtin();
        let id = catalog.by_sub_section(SubSection::Insecure)[0].id.clone();
        let repeated: Vec<_> = std::iter::repeat(AssessmentResponse {
            question_id: id.clone(),
            score: 5,
        })
        .take(8)
        .chain(std::iter::once(AssessmentResponse {
            question_id: id,
            score: 2,
        }))
        .collect();

        assert_eq!(raw_sub_total(&repeated, &catalog, SubSection::Insecure), 2);
        // 2 * 7 - 2 for insecure plus the unanswered 14 for pride
        assert_eq!(dimension_score(&repeated, &catalog, Section::Esteem, 7), 26);
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let catalog = Catalog::builtin();
        let responses = vec![AssessmentResponse {
            question_id: "retired-question".to_string(),
            score: 5,
        }];
        assert_eq!(score_responses(&responses, &catalog, 7), score_responses(&[], &catalog, 7));
    }

    #[test]
    fn reversed_flags_do_not_change_scores() {
        let catalog = Catalog::builtin();
        let flipped: Vec<_> = catalog
            .all()
            .iter()
            .cloned()
            .map(|mut question| {
                question.is_reversed = !question.is_reversed;
                question.negative_score = !question.negative_score;
                question
            })
            .collect();
        let flipped = Catalog::new("flipped", flipped).expect("catalog should validate");
        let responses = answer_all(&catalog, 4);
        assert_eq!(
            score_responses(&responses, &catalog, 7),
            score_responses(&responses, &flipped, 7)
        );
    }

    #[test]
    fn ceiling_of_five_rederives_scale() {
        let catalog = Catalog::builtin();
        let responses = answer_all(&catalog, 5);
        assert_eq!(
            dimension_score(&responses, &catalog, Section::Trust, 5),
            0
        );
    }
}
