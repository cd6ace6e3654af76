//! Reading and writing assessment snapshots handed over by the data layer.

pub mod filesystem;

use crate::error::{LeadscopeError, Result};
use crate::types::assessment::Assessment;
use std::fs;
use std::path::{Path, PathBuf};

/// A single file, or every `*.json` file below a directory.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(LeadscopeError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let files = filesystem::list_json_files(path);
    tracing::debug!(root = %path.display(), files = files.len(), "discovered assessments");
    Ok(files)
}

pub fn load_assessment(path: &Path) -> Result<Assessment> {
    if !path.exists() {
        return Err(LeadscopeError::PathNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let mut assessment: Assessment =
        serde_json::from_str(&content).map_err(|e| LeadscopeError::AssessmentParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    // One answer per question; the last one written wins.
    let dropped = assessment.dedupe_responses();
    if dropped > 0 {
        tracing::warn!(
            path = %path.display(),
            dropped,
            "collapsed repeated answers to one per question"
        );
    }
    Ok(assessment)
}

pub fn save_assessment(path: &Path, assessment: &Assessment) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(assessment)?;
    fs::write(path, json)?;
    Ok(())
}
