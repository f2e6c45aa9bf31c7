//! Errors raised when parsing rule-table keys from text or numbers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown {kind}: '{value}'")]
    UnknownName { kind: &'static str, value: String },

    #[error("{kind} out of range: {value} (expected 1, 2 or 3)")]
    OutOfRange { kind: &'static str, value: u8 },
}
