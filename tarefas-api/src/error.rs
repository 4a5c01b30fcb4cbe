/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>`, which converts automatically
/// to the right status code with a JSON body.
///
/// # Taxonomy
///
/// | Variant | Status | Meaning |
/// |---|---|---|
/// | `BadRequest` | 400 | missing/empty required fields |
/// | `Unauthorized` | 401 | bad credentials or missing/bad/expired token |
/// | `NotFound` | 404 | unknown task id |
/// | `Conflict` | 409 | username already registered |
/// | `InternalError` | 500 | storage or hashing failure (detail logged) |
///
/// Every error is terminal for its request; nothing is retried internally.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Unauthorized (401)
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Conflict (409) - e.g., duplicate username
    Conflict(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "unauthorized")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Ocorreu um erro interno".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("registro não encontrado".to_string()),
            sqlx::Error::Database(db_err) => {
                // The only unique constraint in the schema is users.username
                if db_err.is_unique_violation() {
                    return ApiError::Conflict("usuário já existe".to_string());
                }

                ApiError::InternalError(format!("Database error: {}", db_err))
            }
            _ => ApiError::InternalError(format!("Database error: {}", err)),
        }
    }
}

/// Convert token errors to API errors
///
/// Every token failure is a 401: the gate does not distinguish a bad
/// signature from an expired token to the client.
impl From<tarefas_shared::auth::jwt::JwtError> for ApiError {
    fn from(err: tarefas_shared::auth::jwt::JwtError) -> Self {
        match err {
            tarefas_shared::auth::jwt::JwtError::Expired => {
                ApiError::Unauthorized("token expirado".to_string())
            }
            _ => ApiError::Unauthorized("token inválido".to_string()),
        }
    }
}

/// Convert password errors to API errors
impl From<tarefas_shared::auth::password::PasswordError> for ApiError {
    fn from(err: tarefas_shared::auth::password::PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarefas_shared::auth::jwt::JwtError;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("campos obrigatórios".to_string());
        assert_eq!(err.to_string(), "Bad request: campos obrigatórios");

        let err = ApiError::NotFound("tarefa não encontrada".to_string());
        assert_eq!(err.to_string(), "Not found: tarefa não encontrada");
    }

    #[test]
    fn test_jwt_error_maps_to_unauthorized() {
        let expired: ApiError = JwtError::Expired.into();
        assert!(matches!(expired, ApiError::Unauthorized(_)));

        let invalid: ApiError = JwtError::Invalid("bad".to_string()).into();
        assert!(matches!(invalid, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
