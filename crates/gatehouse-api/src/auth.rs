//! Auth API routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use gatehouse_core::{AuthService, CredentialStore};
use serde::Deserialize;

/// Auth routes
pub fn routes<S>() -> Router<AuthService<S>>
where
    S: CredentialStore + Clone + 'static,
{
    Router::new()
        .route("/register", post(register::<S>))
        .route("/login", post(login::<S>))
}

/// Registration body. Missing fields are treated as empty so the service
/// reports them with its own validation message.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

type ApiResult = Result<(StatusCode, String), (StatusCode, String)>;

/// Register a new user
pub async fn register<S: CredentialStore>(
    State(auth): State<AuthService<S>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    match auth.register(&username, &password).await {
        Ok(_) => Ok((StatusCode::OK, "Registration successful".to_string())),
        Err(e) if e.is_client_error() => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => {
            log::error!("Registration failed for '{}': {}", username, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}

/// Login with query parameters
pub async fn login<S: CredentialStore>(
    State(auth): State<AuthService<S>>,
    Query(params): Query<LoginParams>,
) -> ApiResult {
    match auth.login(&params.username, &params.password).await {
        Ok(_) => Ok((StatusCode::OK, "Login successful".to_string())),
        Err(e) => {
            if !e.is_client_error() {
                log::error!("Login failed for '{}': {}", params.username, e);
            }
            Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()))
        }
    }
}
