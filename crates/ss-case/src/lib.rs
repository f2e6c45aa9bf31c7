//! ss-case: seal selection case file format and validation.

pub mod convert;
pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_case, validate_study};

use ss_rules::Recommendation;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> CaseResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_yaml::from_str(&content)?;
    validate_study(&study)?;
    tracing::debug!(path = %path.display(), cases = study.cases.len(), "loaded study");
    Ok(study)
}

pub fn save_yaml(path: &std::path::Path, study: &Study) -> CaseResult<()> {
    validate_study(study)?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CaseResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_json::from_str(&content)?;
    validate_study(&study)?;
    tracing::debug!(path = %path.display(), cases = study.cases.len(), "loaded study");
    Ok(study)
}

pub fn save_json(path: &std::path::Path, study: &Study) -> CaseResult<()> {
    validate_study(study)?;
    let content = serde_json::to_string_pretty(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> CaseResult<Study> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Evaluate every case in file order.
pub fn evaluate_study(study: &Study) -> CaseResult<Vec<(&CaseDef, Recommendation)>> {
    let mut results = Vec::with_capacity(study.cases.len());
    for case in &study.cases {
        let input = case.to_input()?;
        results.push((case, ss_rules::evaluate(&input)));
    }
    Ok(results)
}
