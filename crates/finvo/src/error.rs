use thiserror::Error;

/// Errors returned by Finvo operations.
#[derive(Debug, Error)]
pub enum FinvoError {
    /// Malformed payload shape (unsupported nesting depth, invalid array
    /// element). A programmer error: raised before any network call and
    /// never worth retrying.
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("http error: {0}")]
    Http(String),

    /// Non-2xx response from the Finvo API.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
