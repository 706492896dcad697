use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetcherError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("Request to {url} failed with status {status}")]
    RemoteRequest { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Failed to decode article metadata: {0}")]
    Decode(String),

    // Storage errors
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FetcherError {
    fn from(err: serde_json::Error) -> Self {
        FetcherError::Decode(err.to_string())
    }
}

pub type FetcherResult<T> = Result<T, FetcherError>;
