use thiserror::Error;

/// Errors raised while reading the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog returned status {status} for genre {genre}")]
    Status { genre: u32, status: u16 },
    #[error("malformed catalog data for genre {genre}: {reason}")]
    Malformed { genre: u32, reason: String },
    #[error("missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] reelseed_core::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
