use reqwest::StatusCode;
use thiserror::Error;

/// Every failure a `RadiumClient` call can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The platform answered with an error status and a JSON body.
    #[error("API Error: {message}")]
    Api { status: StatusCode, message: String },

    /// The platform answered with an error status and a body that is not JSON.
    #[error("HTTP {}: {body}", .status.as_u16())]
    Http { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Builds the error for a response with status >= 400.
    ///
    /// A JSON object with a non-null `error` field yields `Api`; every other
    /// body yields `Http` with the raw text.
    pub fn from_response(status: StatusCode, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| match json.get("error") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(other) if !other.is_null() => Some(other.to_string()),
                _ => None,
            });

        match message {
            Some(message) => ApiError::Api { status, message },
            None => ApiError::Http { status, body },
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } | ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_field_becomes_message() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#.into());
        assert_eq!(err.to_string(), "API Error: not found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn non_json_body_falls_back_to_status_and_text() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "oops".into());
        assert_eq!(err.to_string(), "HTTP 500: oops");
    }

    #[test]
    fn json_without_error_field_falls_back_to_status_and_text() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"message":"bad"}"#.into());
        assert!(matches!(err, ApiError::Http { .. }));
        assert_eq!(err.to_string(), r#"HTTP 400: {"message":"bad"}"#);
    }

    #[test]
    fn non_object_json_and_null_error_fall_back_to_status_and_text() {
        for body in ["[1]", "123", "null", r#"{"error":null}"#] {
            let err = ApiError::from_response(StatusCode::BAD_REQUEST, body.to_string());
            assert_eq!(err.to_string(), format!("HTTP 400: {}", body));
        }
    }

    #[test]
    fn structured_error_field_is_rendered_as_json() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error":{"field":"name"}}"#.into(),
        );
        assert_eq!(err.to_string(), r#"API Error: {"field":"name"}"#);
    }
}
