use thiserror::Error;

use healthscan_taxonomy::error::TaxonomyError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Nothing to analyze: no text, no ids, or nothing recognized in them.
    #[error("no symptoms supplied or recognized")]
    EmptyInput,

    /// Malformed reference data. Not recoverable by retrying.
    #[error("invalid taxonomy: {0}")]
    InvalidTaxonomy(#[from] TaxonomyError),

    #[error("unknown symptom id: {0}")]
    UnknownSymptomId(String),

    #[error("invalid analysis config: {0}")]
    InvalidConfig(String),
}
