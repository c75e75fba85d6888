use reelseed_catalog::CatalogError;
use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("not enough {kind} to sample {requested} (have {available})")]
    InsufficientData {
        kind: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
