use thiserror::Error;

pub type SsResult<T> = Result<T, SsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
