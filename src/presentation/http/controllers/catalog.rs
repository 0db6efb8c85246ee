// src/presentation/http/controllers/catalog.rs
use crate::application::{
    commands::catalog::{CreateCatalogEntryCommand, DeleteCatalogEntryCommand},
    dto::{CatalogEntryWriteDto, CategoryDto, GenreDto, ReferenceDto},
    queries::catalog::ListCatalogQuery,
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
pub struct CatalogListParams {
    /// Case-insensitive substring of the name.
    #[serde(default)]
    pub search: Option<String>,
}

impl From<CatalogListParams> for ListCatalogQuery {
    fn from(params: CatalogListParams) -> Self {
        Self {
            search: params.search,
        }
    }
}

impl From<CatalogEntryWriteDto> for CreateCatalogEntryCommand {
    fn from(payload: CatalogEntryWriteDto) -> Self {
        Self {
            name: payload.name,
            slug: payload.slug,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CatalogListParams),
    responses((status = 200, description = "All categories.", body = [ReferenceDto])),
    security(()),
    tag = "Catalog"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogListParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .catalog_queries
        .list_categories(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CatalogEntryWriteDto,
    responses(
        (status = 201, description = "Category created.", body = ReferenceDto),
        (status = 403, description = "Not an administrator.", body = ErrorResponse),
        (status = 409, description = "Slug already used.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CatalogEntryWriteDto>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let created = state
        .services
        .catalog_commands
        .create_category(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 204, description = "Category deleted."),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .catalog_commands
        .delete_category(&user, DeleteCatalogEntryCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/genres",
    params(CatalogListParams),
    responses((status = 200, description = "All genres.", body = [ReferenceDto])),
    security(()),
    tag = "Catalog"
)]
pub async fn list_genres(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogListParams>,
) -> HttpResult<Json<Vec<GenreDto>>> {
    state
        .services
        .catalog_queries
        .list_genres(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/genres",
    request_body = CatalogEntryWriteDto,
    responses(
        (status = 201, description = "Genre created.", body = ReferenceDto),
        (status = 403, description = "Not an administrator.", body = ErrorResponse),
        (status = 409, description = "Slug already used.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn create_genre(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CatalogEntryWriteDto>,
) -> HttpResult<(StatusCode, Json<GenreDto>)> {
    let created = state
        .services
        .catalog_commands
        .create_genre(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/genres/{slug}",
    params(("slug" = String, Path, description = "Genre slug")),
    responses(
        (status = 204, description = "Genre deleted."),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn delete_genre(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .catalog_commands
        .delete_genre(&user, DeleteCatalogEntryCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
