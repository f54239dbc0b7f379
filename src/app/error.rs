use thiserror::Error;

/// All failure modes of a page load.
///
/// The UI does not distinguish between these: any error during a fetch or
/// an assembly is logged and the affected view slot is cleared, which the
/// presentation layer renders as the loading placeholder.
#[derive(Error, Debug)]
pub enum CorkboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CorkboardError>;
