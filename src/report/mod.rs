pub mod json;
pub mod md;

use crate::error::LeadscopeError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, LeadscopeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LeadscopeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
