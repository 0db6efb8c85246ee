// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{IssueTokenCommand, SignupCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created.", body = UserDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 409, description = "Username or email taken.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SignupRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = SignupCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .signup(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Bearer token issued.", body = AuthTokenDto),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn token(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TokenRequest>,
) -> HttpResult<Json<AuthTokenDto>> {
    let command = IssueTokenCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .issue_token(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Current user profile.", body = UserDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}
