use thiserror::Error;

/// Errors returned by request builders and request invocation.
///
/// A non-success envelope `code` and undecodable response bytes are *not*
/// errors at this level: both are represented as envelope state, so callers
/// check [`crate::Envelope::is_ok`] after a successful invocation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Builder input that can never produce a routable request.
    #[error("invalid request argument: {0}")]
    InvalidArgument(String),

    /// HTTP transport-layer failure (network, DNS, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
