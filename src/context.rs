use reqwest::Url;

use crate::ClientError;

/// Protocol version appended to every request as the `version` parameter.
pub const API_VERSION: &str = "2";

/// Region configuration and shared transport for a OneBusAway server.
///
/// A context is passed explicitly into every builder rather than living in
/// process-wide state, so one program can talk to several regions at once.
/// Transport policy (timeouts, TLS, proxies) belongs to the injected
/// [`reqwest::blocking::Client`], not to this crate.
#[derive(Clone, Debug)]
pub struct ObaContext {
    base_url: Url,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl ObaContext {
    /// Creates a context for the given region base URL and API key.
    ///
    /// The URL is normalized to include a trailing slash, so relative endpoint
    /// paths join correctly.
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| ClientError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            api_key: api_key.into(),
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Returns a new context using the given HTTP client for all requests.
    ///
    /// Use this to configure timeouts or other transport concerns.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = http;
        self
    }

    /// The region base URL, always ending in a slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Query parameters appended to every request unless already set:
    /// the API key and the protocol version.
    pub fn default_params(&self) -> [(&str, &str); 2] {
        [("key", self.api_key.as_str()), ("version", API_VERSION)]
    }

    pub(crate) fn http(&self) -> &reqwest::blocking::Client {
        &self.http
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::ObaContext;
    use crate::ClientError;

    #[test]
    fn normalizes_base_url_with_trailing_slash() {
        let ctx = ObaContext::new("https://api.pugetsound.onebusaway.org", "TEST").expect("valid url");
        assert_eq!(ctx.base_url().as_str(), "https://api.pugetsound.onebusaway.org/");
    }

    #[test]
    fn rejects_relative_base_url() {
        let error = ObaContext::new("api.example.org/where", "TEST").expect_err("should reject");
        assert!(matches!(error, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn default_params_carry_key_and_version() {
        let ctx = ObaContext::new("https://example.org/", "my-key").expect("valid url");
        assert_eq!(ctx.default_params(), [("key", "my-key"), ("version", "2")]);
    }
}
