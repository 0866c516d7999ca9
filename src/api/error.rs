use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jotter_core::FieldError;
use serde::Serialize;

/// Unified failure type for the HTTP surface.
///
/// Every error a handler can produce maps onto one of these variants, and
/// all of them render through the same tagged `{kind, message, details?}`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request was well-formed HTTP but the payload failed validation.
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    /// The addressed note does not exist.
    #[error("Note not found")]
    NotFound,

    /// Unexpected fault. The cause is logged, never sent to the client.
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Field-level validation failure; the envelope message is taken from
    /// the first detail.
    pub fn validation(details: Vec<FieldError>) -> Self {
        let message = details
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "invalid request".to_string());
        Self::Validation { message, details }
    }

    /// Validation failure with no per-field detail, e.g. a body that never
    /// deserialized.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::NotFound => "not_found",
            Self::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            tracing::error!(error = %cause, "request failed");
        }
        let status = self.status();
        let body = ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
            details: match self {
                Self::Validation { details, .. } => details,
                _ => Vec::new(),
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Panic hook for `CatchPanicLayer`: a handler panic becomes the standard
/// 500 envelope instead of tearing down the connection.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_takes_message_from_first_detail() {
        let err = ApiError::validation(vec![
            FieldError::new("title", "title is required"),
            FieldError::new("content", "content is required"),
        ]);
        assert_eq!(err.to_string(), "title is required");
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_without_details_falls_back_to_generic_message() {
        let err = ApiError::validation(Vec::new());
        assert_eq!(err.to_string(), "invalid request");
    }

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            ApiError::bad_request("nope").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_message_never_leaks_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("db exploded"));
        assert_eq!(err.to_string(), "internal server error");
        assert_eq!(err.kind(), "internal");
    }

    #[test]
    fn error_body_omits_empty_details() {
        let body = ErrorBody {
            kind: "not_found",
            message: "Note not found".to_string(),
            details: Vec::new(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"kind": "not_found", "message": "Note not found"})
        );
    }

    #[test]
    fn error_body_includes_details_when_present() {
        let body = ErrorBody {
            kind: "validation",
            message: "title is required".to_string(),
            details: vec![FieldError::new("title", "title is required")],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "validation",
                "message": "title is required",
                "details": [{"field": "title", "message": "title is required"}],
            })
        );
    }

    #[test]
    fn not_found_renders_the_envelope_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
