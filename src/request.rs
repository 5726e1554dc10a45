use reqwest::Url;

use crate::ClientError;

/// An immutable, finalized API request.
///
/// Created by [`crate::UriBuilder::build`]; invoking it repeatedly simply
/// repeats the HTTP GET, so requests are safe to reuse and to invoke from
/// several threads at once.
#[derive(Clone, Debug)]
pub struct Request {
    url: Url,
    http: reqwest::blocking::Client,
}

impl Request {
    pub(crate) fn new(url: Url, http: reqwest::blocking::Client) -> Self {
        Self { url, http }
    }

    /// The finalized request URI, including the appended default parameters.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Performs exactly one blocking GET and returns the raw response body.
    ///
    /// The HTTP status is deliberately not checked here: the server returns a
    /// machine-readable error envelope on non-2xx responses, and the envelope
    /// decode surfaces it through `code`/`text`. Only transport failures
    /// (network, DNS, TLS) produce an error. No retries.
    pub fn invoke(&self) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        Ok(response.bytes()?.to_vec())
    }
}
