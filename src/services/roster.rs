use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::core::split_full_name;
use crate::models::PersonRecord;

/// Errors that can occur when loading a roster file
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON roster: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML roster: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid roster record #{index}: {reason}")]
    Invalid { index: usize, reason: String },
}

/// Accepted roster document shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    List(Vec<PersonRecord>),
    Table {
        #[serde(default)]
        persons: Vec<PersonRecord>,
    },
}

impl RosterDocument {
    fn into_records(self) -> Vec<PersonRecord> {
        match self {
            RosterDocument::List(records) => records,
            RosterDocument::Table { persons } => persons,
        }
    }
}

/// Load and validate a roster from a JSON or TOML file
///
/// `.toml` files are parsed as TOML with a `[[persons]]` array; anything
/// else is parsed as JSON, either a bare array or `{"persons": [...]}`.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<PersonRecord>, RosterError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let roster = if is_toml {
        parse_toml_roster(&contents)?
    } else {
        parse_json_roster(&contents)?
    };

    tracing::info!("Loaded {} roster records from {}", roster.len(), path.display());
    Ok(roster)
}

pub fn parse_json_roster(contents: &str) -> Result<Vec<PersonRecord>, RosterError> {
    let document: RosterDocument = serde_json::from_str(contents)?;
    validate_records(document.into_records())
}

pub fn parse_toml_roster(contents: &str) -> Result<Vec<PersonRecord>, RosterError> {
    let document: RosterDocument = toml::from_str(contents)?;
    validate_records(document.into_records())
}

fn validate_records(records: Vec<PersonRecord>) -> Result<Vec<PersonRecord>, RosterError> {
    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|e| RosterError::Invalid {
            index,
            reason: e.to_string(),
        })?;
        split_full_name(&record.full_name).map_err(|e| RosterError::Invalid {
            index,
            reason: e.to_string(),
        })?;
    }

    Ok(records)
}
