use crate::error::LeadscopeError;
use crate::scoring::profile::ProfileTable;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_ITEM_CEILING: i32 = 7;
pub const MAX_ITEM_CEILING: i32 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadscopeConfig {
    pub scoring: Option<ScoringConfig>,
    pub catalog: Option<CatalogConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub item_ceiling: Option<i32>,
    pub profile_table: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Resolved knobs the scoring engine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringSettings {
    /// Per-question ceiling used to invert sub-section totals.
    pub item_ceiling: i32,
    pub profile_table: ProfileTable,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            item_ceiling: DEFAULT_ITEM_CEILING,
            profile_table: ProfileTable::Archetype,
        }
    }
}

impl LeadscopeConfig {
    pub fn settings(&self) -> ScoringSettings {
        let defaults = ScoringSettings::default();
        match &self.scoring {
            Some(scoring) => ScoringSettings {
                item_ceiling: scoring.item_ceiling.unwrap_or(defaults.item_ceiling),
                profile_table: scoring
                    .profile_table
                    .as_deref()
                    .and_then(ProfileTable::parse)
                    .unwrap_or(defaults.profile_table),
            },
            None => defaults,
        }
    }

    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog.as_ref().and_then(|catalog| catalog.path.as_ref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), LeadscopeError> {
        if let Some(scoring) = &self.scoring {
            if let Some(item_ceiling) = scoring.item_ceiling {
                if !(1..=MAX_ITEM_CEILING).contains(&item_ceiling) {
                    return Err(LeadscopeError::ConfigParse(format!(
                        "scoring.item_ceiling must be between 1 and {MAX_ITEM_CEILING} (found {item_ceiling})"
                    )));
                }
            }
            if let Some(table) = &scoring.profile_table {
                if ProfileTable::parse(table).is_none() {
                    return Err(LeadscopeError::ConfigParse(format!(
                        "unsupported scoring.profile_table: {table}"
                    )));
                }
            }
        }

        if let Some(level) = self.log_level() {
            if !matches!(
                level.to_ascii_lowercase().as_str(),
                "error" | "warn" | "info" | "debug" | "trace" | "off"
            ) {
                return Err(LeadscopeError::ConfigParse(format!(
                    "unsupported logging.level: {level}"
                )));
            }
        }

        Ok(())
    }
}
