// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, catalog, comments, reviews, titles},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router-level knobs taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if parsed.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

fn api_routes() -> Router {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/token", post(auth::token))
        .route("/users/me", get(auth::me))
        .route(
            "/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route("/categories/{slug}", delete(catalog::delete_category))
        .route(
            "/genres",
            get(catalog::list_genres).post(catalog::create_genre),
        )
        .route("/genres/{slug}", delete(catalog::delete_genre))
        .route(
            "/titles",
            get(titles::list_titles).post(titles::create_title),
        )
        .route(
            "/titles/{title_id}",
            get(titles::get_title)
                .patch(titles::update_title)
                .delete(titles::delete_title),
        )
        .route(
            "/titles/{title_id}/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}",
            get(reviews::get_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let mut api = api_routes();
    if options.rate_limit {
        match rate_limit_layer() {
            Some(layer) => api = api.layer(layer),
            None => tracing::warn!("rate limiter misconfigured; continuing without it"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&options.allowed_origins))
                .layer(Extension(state)),
        )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
