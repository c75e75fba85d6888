use thiserror::Error;

/// Core error type shared across reelseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog id does not belong to any configured genre.
    #[error("unknown genre catalog id: {0}")]
    UnknownGenre(u32),
}

/// Convenience alias for results returned by reelseed crates.
pub type Result<T> = std::result::Result<T, Error>;
