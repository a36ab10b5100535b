use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// Failure reported by an external workshop, registration or attendance
    /// source.
    #[error("source error: {0}")]
    Source(String),
}
