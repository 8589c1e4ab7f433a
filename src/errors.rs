use thiserror::Error;

use crate::config::ConfigError;

/// Error type for the fallible edges around the wizard: configuration,
/// JSON documents, terminal prompts and command parsing.
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Unknown {field} option `{value}`")]
    UnknownOption {
        field: &'static str,
        value: String,
        suggestion: Option<String>,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CourseError {
    /// Closest known value for an unrecognized option, when one exists.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            CourseError::UnknownOption { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}
