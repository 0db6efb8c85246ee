// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Requires a valid bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

async fn authenticate<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<Option<AuthenticatedUser>, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    let user = app_state
        .services
        .token_manager()
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)?;
    Ok(Some(user))
}

impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
    }
}
