use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use kiosk_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Domain(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::Domain(e) => e.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = self.kind();
        let message = match &self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Domain(e) => e.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("{}: {}", error_type, message);
        } else {
            tracing::warn!("{}: {}", error_type, message);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(DomainError::EmptyOption), StatusCode::BAD_REQUEST),
            (ApiError::from(DomainError::NoFieldsProvided), StatusCode::BAD_REQUEST),
            (
                ApiError::from(DomainError::UnknownModifierCategory("syrup".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(DomainError::menu_item_not_found(Uuid::nil())),
                StatusCode::NOT_FOUND,
            ),
            (ApiError::from(DomainError::Store("down".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::BadRequest("Item ID required".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_kind_passes_through_domain_kind() {
        let err = ApiError::from(DomainError::Duplicate {
            category: "milk".into(),
            option: "oat".into(),
        });
        assert_eq!(err.kind(), "Duplicate");
        assert_eq!(err.to_string(), "This option already exists in milk");
    }
}
