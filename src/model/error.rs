use thiserror::Error;

/// Failures along the client -> server -> upstream -> database chain.
///
/// Every variant is terminal for the request that produced it.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("unable to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Upstream answered with a non-success status and this message.
    #[error("{0}")]
    Upstream(String),

    #[error("unable to parse upstream error payload: {0}")]
    UpstreamPayload(#[source] serde_json::Error),

    #[error("unable to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("unable to decode quote: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("expected exactly one quote, got {0}")]
    UnexpectedQuoteCount(usize),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("storage deadline of {0:?} exceeded")]
    StorageTimeout(std::time::Duration),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The quote server answered with a non-success status.
    #[error("server responded with {status}: {body}")]
    Server { status: u16, body: String },
}

impl QuoteError {
    /// Sorts a transport error into timeout, construction or network failure.
    pub fn from_transport(e: reqwest::Error) -> QuoteError {
        if e.is_timeout() {
            QuoteError::Timeout(e)
        } else if e.is_builder() {
            QuoteError::Request(e)
        } else {
            QuoteError::Network(e)
        }
    }

    /// Same as [`QuoteError::from_transport`] for failures while reading a body.
    pub fn from_body(e: reqwest::Error) -> QuoteError {
        if e.is_timeout() {
            QuoteError::Timeout(e)
        } else {
            QuoteError::Body(e)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout(_) | QuoteError::StorageTimeout(_))
    }
}
