use thiserror::Error;

/// Errors from [`crate::enrichment::ExplanationEnricher::generate_explanations`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    /// The enricher is not configured.
    #[error("explanation enrichment is disabled")]
    Disabled,
    /// The request did not complete before the deadline.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was requested.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service returned a non-success status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Endpoint that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },
    /// The request failed before a response was received.
    #[error("network error calling {url}: {message}")]
    Network {
        /// Endpoint that was requested.
        url: String,
        /// Underlying error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse enrichment response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
    /// The response contained no usable text.
    #[error("enrichment response contained no text")]
    EmptyResponse,
}
