use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("condition '{condition_id}' has no required symptoms")]
    EmptyRequiredSymptoms { condition_id: String },

    #[error("condition '{condition_id}' references unknown symptom '{symptom_id}'")]
    UnknownSymptomReference {
        condition_id: String,
        symptom_id: String,
    },

    #[error("symptom '{symptom_id}' has an empty keyword")]
    EmptyKeyword { symptom_id: String },

    #[error("unknown symptom id: {0}")]
    UnknownSymptomId(String),
}
