// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        super::controllers::auth::signup,
        super::controllers::auth::token,
        super::controllers::auth::me,
        super::controllers::catalog::list_categories,
        super::controllers::catalog::create_category,
        super::controllers::catalog::delete_category,
        super::controllers::catalog::list_genres,
        super::controllers::catalog::create_genre,
        super::controllers::catalog::delete_genre,
        super::controllers::titles::list_titles,
        super::controllers::titles::create_title,
        super::controllers::titles::get_title,
        super::controllers::titles::update_title,
        super::controllers::titles::delete_title,
        super::controllers::reviews::list_reviews,
        super::controllers::reviews::create_review,
        super::controllers::reviews::get_review,
        super::controllers::reviews::update_review,
        super::controllers::reviews::delete_review,
        super::controllers::comments::list_comments,
        super::controllers::comments::create_comment,
        super::controllers::comments::get_comment,
        super::controllers::comments::update_comment,
        super::controllers::comments::delete_comment
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::SignupRequest,
            crate::presentation::http::controllers::auth::TokenRequest,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ReferenceDto,
            crate::application::dto::CatalogEntryWriteDto,
            crate::application::dto::TitleReadDto,
            crate::application::dto::TitleWriteDto,
            crate::application::dto::TitlePatchDto,
            crate::application::dto::ReviewDto,
            crate::application::dto::ReviewWriteDto,
            crate::application::dto::ReviewPatchDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentWriteDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Signup and token issuance"),
        (name = "Users", description = "Current user"),
        (name = "Catalog", description = "Categories and genres"),
        (name = "Titles", description = "Reviewable works"),
        (name = "Reviews", description = "One review per user per title"),
        (name = "Comments", description = "Comments on reviews"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "YaMDb API",
        description = "Reviews and ratings of titles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document as pretty JSON, creating parent directories.
pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
