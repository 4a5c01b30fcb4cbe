/// Registration and login endpoints
///
/// These routes bypass the auth gate and talk to the credential store and
/// token issuer directly.
///
/// # Endpoints
///
/// - `POST /register` - Create a new account
/// - `POST /login` - Authenticate and receive a bearer token
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tarefas_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use validator::Validate;

/// Register/login request body
///
/// Both fields default to empty when absent so a missing field fails the
/// same non-empty validation as an empty one (400, not a deserialize
/// rejection).
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Username
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,

    /// Password (plaintext in transit, hashed before storage)
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Simple confirmation message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub msg: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token, valid for one hour
    pub access_token: String,
}

fn validate_credentials(req: &CredentialsRequest) -> Result<(), ApiError> {
    req.validate().map_err(|_| {
        ApiError::BadRequest("username e password são obrigatórios".to_string())
    })
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// {"username": "alice", "password": "p1"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: username or password missing/empty
/// - `409 Conflict`: username already exists
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    validate_credentials(&req)?;

    if User::find_by_username(&state.db, &req.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("usuário já existe".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            msg: "usuário criado".to_string(),
        }),
    ))
}

/// Login and obtain a bearer token
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// {"username": "alice", "password": "p1"}
/// ```
///
/// # Response
///
/// ```json
/// {"access_token": "eyJ..."}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: username or password missing/empty
/// - `401 Unauthorized`: unknown user or wrong password (indistinguishable)
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    validate_credentials(&req)?;

    let user = User::find_by_username(&state.db, &req.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("credenciais inválidas".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized("credenciais inválidas".to_string()));
    }

    let access_token = jwt::create_token(&jwt::Claims::new(user.id), state.jwt_secret())?;

    tracing::debug!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse { access_token }))
}
