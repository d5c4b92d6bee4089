use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Request-level failures, each mapped to one HTTP status
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Body could not be parsed or violates a field constraint
    #[error("Invalid product data: {details}")]
    BadInput { details: String },
    #[error("Product not found: {id}")]
    NotFound { id: String },
    #[error("Product with this ID already exists: {id}")]
    Conflict { id: String },
}

impl ApiError {
    pub fn bad_input(details: impl Into<String>) -> Self {
        ApiError::BadInput {
            details: details.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        ApiError::NotFound { id: id.into() }
    }

    pub fn conflict(id: impl Into<String>) -> Self {
        ApiError::Conflict { id: id.into() }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    /// JSON body sent to the client
    pub fn body(&self) -> serde_json::Value {
        match self {
            ApiError::BadInput { details } => json!({
                "error": "Invalid product data",
                "details": details,
            }),
            ApiError::NotFound { id } => json!({
                "error": "Product not found",
                "id": id,
            }),
            ApiError::Conflict { id } => json!({
                "error": "Product with this ID already exists",
                "id": id,
            }),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_input(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::bad_input("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("9").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("1").status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_bodies() {
        assert_eq!(
            ApiError::not_found("999").body(),
            json!({ "error": "Product not found", "id": "999" })
        );
        assert_eq!(
            ApiError::conflict("4").body(),
            json!({ "error": "Product with this ID already exists", "id": "4" })
        );
        assert_eq!(
            ApiError::bad_input("price must be greater than 0").body(),
            json!({ "error": "Invalid product data", "details": "price must be greater than 0" })
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::conflict("4").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
