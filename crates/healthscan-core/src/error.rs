use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown symptom category: {0}")]
    UnknownCategory(String),

    #[error("invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: String },
}
