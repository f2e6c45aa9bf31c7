//! Error type for the CLI.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load study {path}: {source}")]
    StudyLoad {
        path: PathBuf,
        source: ss_case::CaseError,
    },

    #[error("Case evaluation failed: {0}")]
    Evaluation(#[from] ss_case::CaseError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ss_case::ValidationError),

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
