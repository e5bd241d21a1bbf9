use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Authenticated handle on the Radium API.
///
/// One `reqwest::Client` (and its connection pool) is built per instance and
/// reused by every call. Calls are independent request/response pairs with no
/// retries.
#[derive(Debug, Clone)]
pub struct RadiumClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RadiumClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|_| ApiError::Config("API key contains invalid header characters".to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { http, config })
    }

    /// Shorthand for `ClientConfig::new(api_key)` followed by `new`.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends `method {base_url}{path}` and returns the decoded JSON body as is.
    ///
    /// Status >= 400 becomes an [`ApiError`]; the `data` envelope is left for
    /// callers to unwrap. An empty success body decodes to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url(), path);
        debug!(%method, path, "Sending Radium API request");

        let mut builder = self.http.request(method.clone(), &url);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query.pairs());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() >= 400 {
            warn!(%method, path, status = status.as_u16(), "Radium API returned an error");
            return Err(ApiError::from_response(status, text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Ordered query parameters. Absent and empty values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.set(key, v),
            _ => self,
        }
    }

    /// Booleans go on the wire as lowercase `true` / `false`.
    pub fn flag(self, key: &'static str, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.set(key, if v { "true" } else { "false" }),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Payload of a list endpoint: `data` as an array, `[]` when absent or null.
pub(crate) fn data_list(envelope: Value, path: &str) -> Result<Vec<Value>> {
    match take_data(envelope) {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items),
        other => Err(ApiError::Decode {
            path: path.to_string(),
            reason: format!("expected an array under `data`, got {}", json_kind(&other)),
        }),
    }
}

/// Payload of a single-object endpoint: `data`, `{}` when absent or null.
pub(crate) fn data_object(envelope: Value) -> Value {
    match take_data(envelope) {
        Value::Null => Value::Object(Default::default()),
        other => other,
    }
}

fn take_data(envelope: Value) -> Value {
    match envelope {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_skips_missing_values() {
        let query = Query::new()
            .opt("category", None)
            .opt("provider", Some("meta"))
            .flag("featured", None);
        assert_eq!(query.pairs(), &[("provider", "meta".to_string())]);
    }

    #[test]
    fn query_skips_empty_strings() {
        let query = Query::new()
            .opt("category", Some(""))
            .opt("status", Some("active"));
        assert_eq!(query.pairs(), &[("status", "active".to_string())]);
    }

    #[test]
    fn query_renders_booleans_lowercase() {
        let query = Query::new().flag("featured", Some(true)).flag("archived", Some(false));
        assert_eq!(
            query.pairs(),
            &[("featured", "true".to_string()), ("archived", "false".to_string())]
        );
    }

    #[test]
    fn list_defaults_to_empty() {
        assert!(data_list(json!({}), "/models").unwrap().is_empty());
        assert!(data_list(json!({"data": null}), "/models").unwrap().is_empty());
        let items = data_list(json!({"data": [{"id": "m1"}]}), "/models").unwrap();
        assert_eq!(items, vec![json!({"id": "m1"})]);
    }

    #[test]
    fn list_rejects_non_array_payload() {
        let err = data_list(json!({"data": {"id": "m1"}}), "/models").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn object_defaults_to_empty_map() {
        assert_eq!(data_object(json!({"message": "ok"})), json!({}));
        assert_eq!(data_object(Value::Null), json!({}));
        assert_eq!(data_object(json!({"data": {"id": "d1"}})), json!({"id": "d1"}));
    }

    #[test]
    fn client_rejects_key_that_is_not_a_header_value() {
        let config = ClientConfig::new("bad\nkey").unwrap();
        assert!(matches!(RadiumClient::new(config), Err(ApiError::Config(_))));
    }
}
