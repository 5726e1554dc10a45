use url::form_urlencoded::byte_serialize;

use crate::{ClientError, ObaContext, Request};

/// Accumulates an endpoint path and query parameters into a finalized
/// [`Request`].
///
/// Parameters keep their insertion order; setting the same name twice
/// overwrites the earlier value in place. The context's default parameters
/// (`key`, `version`) are appended at [`Self::build`] time unless the caller
/// already set them.
#[derive(Clone, Debug)]
pub struct UriBuilder {
    path: String,
    params: Vec<(String, String)>,
}

impl UriBuilder {
    /// Creates a builder for an endpoint path relative to the region base URL,
    /// for example `api/where/trip-details/1_18196913.json`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Sets a query parameter, overwriting any earlier value for the same
    /// name. Empty values are kept, not dropped.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Sets a boolean parameter as the literal string `true` or `false`.
    #[must_use]
    pub fn param_bool(self, name: impl Into<String>, value: bool) -> Self {
        self.param(name, if value { "true" } else { "false" })
    }

    /// Sets a numeric parameter in plain decimal form.
    #[must_use]
    pub fn param_f64(self, name: impl Into<String>, value: f64) -> Self {
        self.param(name, value.to_string())
    }

    /// Sets an integer parameter, typically a millisecond timestamp.
    #[must_use]
    pub fn param_i64(self, name: impl Into<String>, value: i64) -> Self {
        self.param(name, value.to_string())
    }

    /// Finalizes the URI against the context and returns an immutable
    /// [`Request`].
    ///
    /// Fails with [`ClientError::InvalidArgument`] if the path is empty or
    /// smuggles query/fragment syntax that would change routing.
    pub fn build(self, context: &ObaContext) -> Result<Request, ClientError> {
        if self.path.is_empty() {
            return Err(ClientError::InvalidArgument("empty endpoint path".to_owned()));
        }
        if self.path.contains(['?', '#']) {
            return Err(ClientError::InvalidArgument(format!(
                "endpoint path '{}' must not contain '?' or '#'",
                self.path
            )));
        }

        let relative = self.path.trim_start_matches('/');
        let mut url = context
            .base_url()
            .join(relative)
            .map_err(|_| ClientError::InvalidArgument(format!("unroutable endpoint path '{}'", self.path)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.params {
                pairs.append_pair(name, value);
            }
            for (name, value) in context.default_params() {
                if !self.params.iter().any(|(existing, _)| existing == name) {
                    pairs.append_pair(name, value);
                }
            }
        }

        Ok(Request::new(url, context.http().clone()))
    }
}

/// Percent-encodes a value for use as a single path segment, such as a trip
/// ID interpolated into `trip-details/{id}.json`.
pub(crate) fn encode_path_segment(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::{UriBuilder, encode_path_segment};
    use crate::{ClientError, ObaContext};
    use std::collections::HashMap;

    fn context() -> ObaContext {
        ObaContext::new("https://api.example.org/", "TEST").expect("valid url")
    }

    fn query_map(url: &url::Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn build_recovers_set_params_plus_defaults() {
        let request = UriBuilder::new("api/where/stop/1_75403.json")
            .param("minutesAfter", "65")
            .param_bool("includeTrip", true)
            .param_f64("lat", 47.653_435)
            .build(&context())
            .expect("request builds");

        let query = query_map(request.url());
        assert_eq!(query.len(), 5);
        assert_eq!(query["minutesAfter"], "65");
        assert_eq!(query["includeTrip"], "true");
        assert_eq!(query["lat"], "47.653435");
        assert_eq!(query["key"], "TEST");
        assert_eq!(query["version"], "2");
    }

    #[test]
    fn later_param_overwrites_earlier_value() {
        let request = UriBuilder::new("api/where/agency/1.json")
            .param("maxCount", "10")
            .param("maxCount", "25")
            .build(&context())
            .expect("request builds");

        assert_eq!(query_map(request.url())["maxCount"], "25");
        assert_eq!(request.url().query_pairs().count(), 3);
    }

    #[test]
    fn caller_set_key_is_not_duplicated() {
        let request = UriBuilder::new("api/where/agency/1.json")
            .param("key", "override")
            .build(&context())
            .expect("request builds");

        let query = query_map(request.url());
        assert_eq!(query["key"], "override");
        assert_eq!(request.url().query_pairs().count(), 2);
    }

    #[test]
    fn empty_value_is_preserved() {
        let request = UriBuilder::new("api/where/agency/1.json")
            .param("query", "")
            .build(&context())
            .expect("request builds");

        assert!(request.url().query().expect("has query").contains("query="));
    }

    #[test]
    fn values_are_percent_encoded() {
        let request = UriBuilder::new("api/where/stops-for-route/1_100.json")
            .param("query", "3rd & pike")
            .build(&context())
            .expect("request builds");

        assert!(request.url().query().expect("has query").contains("query=3rd+%26+pike"));
        assert_eq!(query_map(request.url())["query"], "3rd & pike");
    }

    #[test]
    fn empty_path_is_rejected_before_any_network_call() {
        let error = UriBuilder::new("").build(&context()).expect_err("should reject");
        assert!(matches!(error, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn path_with_query_syntax_is_rejected() {
        let error = UriBuilder::new("api/where/stop.json?key=smuggled")
            .build(&context())
            .expect_err("should reject");
        assert!(matches!(error, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn path_segment_encoding_escapes_reserved_characters() {
        assert_eq!(encode_path_segment("1_18196913"), "1_18196913");
        assert_eq!(encode_path_segment("a/b c"), "a%2Fb+c");
    }
}
