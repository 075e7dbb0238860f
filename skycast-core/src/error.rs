use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the fetch clients.
///
/// Both fetch operations propagate these unchanged: no retry, no fallback
/// value. Callers decide recovery policy.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote service answered with a non-success status. The response
    /// body is not read in this case.
    #[error("request failed: {0}")]
    RequestFailed(StatusCode),

    /// The response body could not be decoded into the expected shape.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not be sent, or the body could not be read.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_carries_the_reason_phrase() {
        let err = Error::RequestFailed(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("Internal Server Error"));

        let err = Error::RequestFailed(StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("Not Found"));
    }
}
