use crate::types::report::ScoreReport;
use crate::types::scoring::{CoachabilityBand, DimensionScore};

pub fn to_markdown(report: &ScoreReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str("# Leadership Assessment Report\n\n");
    output.push_str(&format!(
        "Subject: {} (code {})\n\n",
        report.subject, report.assessment_code
    ));
    output.push_str(&format!(
        "Profile: {}\n\n",
        result.profile_type.as_deref().unwrap_or("n/a")
    ));
    output.push_str(&format!(
        "Self-awareness: {:.1}\nCoachability awareness: {:.1}\nCoachability band: {}\n\n",
        result.self_awareness,
        result.coachability_awareness,
        band_label(result.coachability_band)
    ));

    output.push_str("## Dimensions\n\n");
    for entry in &result.dimension_scores {
        match entry {
            DimensionScore::Individual {
                name,
                score,
                min,
                max,
                ..
            } => {
                output.push_str(&format!("- {name}: {score:.2} ({min}-{max})\n"));
            }
            DimensionScore::Aggregate {
                name,
                self_score,
                rater1_score,
                rater2_score,
                avg_score,
                min,
                max,
                ..
            } => {
                output.push_str(&format!(
                    "- {name}: self {self_score:.2}, rater1 {}, rater2 {}, others {} ({min}-{max})\n",
                    optional(*rater1_score),
                    optional(*rater2_score),
                    optional(*avg_score)
                ));
            }
        }
    }
    output.push('\n');

    output.push_str("## Notices\n\n");
    if report.notices.is_empty() {
        output.push_str("- none\n");
    } else {
        for notice in &report.notices {
            output.push_str(&format!("- [{}] {}\n", notice.id, notice.message));
        }
    }

    output.push_str(&format!(
        "\nProfile table: {}. Catalog: {}.\n",
        report.profile_table, report.catalog_version
    ));
    output
}

fn optional(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "-".to_string())
}

fn band_label(band: CoachabilityBand) -> &'static str {
    match band {
        CoachabilityBand::Low => "low",
        CoachabilityBand::Medium => "medium",
        CoachabilityBand::High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring::{score_assessment, score_rater};
    use crate::types::assessment::Assessment;
    use crate::types::config::ScoringSettings;
    use chrono::Utc;

    #[test]
    fn markdown_report_contains_sections() {
        let catalog = Catalog::builtin();
        let assessment = Assessment::start("lee@example.com", "Lee", Utc::now());
        let report = score_assessment(&assessment, &catalog, &ScoringSettings::default());

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Leadership Assessment Report"));
        assert!(rendered.contains("## Dimensions"));
        assert!(rendered.contains("- Business Drive: self 5.00, rater1 -, rater2 -, others -"));
        assert!(rendered.contains("[raters.none_complete]"));
    }

    #[test]
    fn markdown_renders_individual_entries() {
        let catalog = Catalog::builtin();
        let assessment = Assessment::start("lee@example.com", "Lee", Utc::now());
        let report = score_rater(
            &assessment,
            &assessment.raters[0],
            &catalog,
            &ScoringSettings::default(),
        );

        let rendered = to_markdown(&report);
        assert!(rendered.contains("- Coachability: 0.00 (4-20)"));
        assert!(rendered.contains("Profile: The Trusting Driven Flexible"));
    }
}
