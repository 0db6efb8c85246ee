// src/presentation/http/controllers/titles.rs
use crate::application::{
    commands::titles::{DeleteTitleCommand, UpdateTitleCommand},
    dto::{TitlePatchDto, TitleReadDto, TitleWriteDto},
    queries::titles::{GetTitleQuery, ListTitlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TitleListParams {
    /// Category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// Genre slug.
    #[serde(default)]
    pub genre: Option<String>,
    /// Case-insensitive substring of the title name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/titles",
    params(TitleListParams),
    responses((status = 200, description = "Matching titles.", body = [TitleReadDto])),
    security(()),
    tag = "Titles"
)]
pub async fn list_titles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TitleListParams>,
) -> HttpResult<Json<Vec<TitleReadDto>>> {
    let query = ListTitlesQuery {
        category: params.category,
        genre: params.genre,
        name: params.name,
        year: params.year,
    };

    state
        .services
        .title_queries
        .list_titles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/titles",
    request_body = TitleWriteDto,
    responses(
        (status = 201, description = "Title created.", body = TitleReadDto),
        (status = 400, description = "Invalid payload or unknown slug.", body = ErrorResponse),
        (status = 403, description = "Not an administrator.", body = ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn create_title(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<TitleWriteDto>,
) -> HttpResult<(StatusCode, Json<TitleReadDto>)> {
    let created = state
        .services
        .title_commands
        .create_title(&user, payload)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/titles/{title_id}",
    params(("title_id" = i64, Path, description = "Title id")),
    responses(
        (status = 200, description = "The title.", body = TitleReadDto),
        (status = 404, description = "Unknown title.", body = ErrorResponse)
    ),
    security(()),
    tag = "Titles"
)]
pub async fn get_title(
    Extension(state): Extension<HttpState>,
    Path(title_id): Path<i64>,
) -> HttpResult<Json<TitleReadDto>> {
    state
        .services
        .title_queries
        .get_title(GetTitleQuery { id: title_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/titles/{title_id}",
    params(("title_id" = i64, Path, description = "Title id")),
    request_body = TitlePatchDto,
    responses(
        (status = 200, description = "Updated title.", body = TitleReadDto),
        (status = 400, description = "Invalid payload or unknown slug.", body = ErrorResponse),
        (status = 404, description = "Unknown title.", body = ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn update_title(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(title_id): Path<i64>,
    Json(patch): Json<TitlePatchDto>,
) -> HttpResult<Json<TitleReadDto>> {
    state
        .services
        .title_commands
        .update_title(&user, UpdateTitleCommand { id: title_id, patch })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/titles/{title_id}",
    params(("title_id" = i64, Path, description = "Title id")),
    responses(
        (status = 204, description = "Title deleted."),
        (status = 404, description = "Unknown title.", body = ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn delete_title(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(title_id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .title_commands
        .delete_title(&user, DeleteTitleCommand { id: title_id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
