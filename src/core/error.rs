use thiserror::Error;

/// Errors produced by the name toolkit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("Malformed full name {name:?}: expected 3 whitespace-separated parts, found {tokens}")]
    MalformedName { name: String, tokens: usize },

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("No compatible partner found after {attempts} attempts")]
    NoCompatiblePartner { attempts: usize },
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
