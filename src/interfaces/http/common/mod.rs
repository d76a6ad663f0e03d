//! Common API types

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

/// Standard API response wrapper
///
/// Every REST endpoint returns its data in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a domain error onto an HTTP status + envelope.
///
/// Used by every handler so the error taxonomy translates uniformly.
pub fn domain_error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::RecommendationUnavailable(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let resp = ApiResponse::success(42);
        assert!(resp.success);
        assert_eq!(resp.data, Some(42));
        assert!(resp.error.is_none());
    }

    #[test]
    fn error_envelope_omits_error_field_when_serialized_successfully() {
        let ok = serde_json::to_value(ApiResponse::success("x")).unwrap();
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(err["error"], "boom");
        assert_eq!(err["success"], false);
    }

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let cases = vec![
            (
                DomainError::not_found("Station", "id", "x"),
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::Validation("v".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::Conflict("c".into()), StatusCode::CONFLICT),
            (
                DomainError::Unauthorized("u".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (DomainError::Forbidden("f".into()), StatusCode::FORBIDDEN),
            (
                DomainError::RecommendationUnavailable("r".into()),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, expected) in cases {
            let (status, _) = domain_error_response(err);
            assert_eq!(status, expected);
        }
    }
}
