use algo_utils::LoggingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}
