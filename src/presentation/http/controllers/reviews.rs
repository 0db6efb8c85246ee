// src/presentation/http/controllers/reviews.rs
use crate::application::{
    commands::reviews::{CreateReviewCommand, DeleteReviewCommand, UpdateReviewCommand},
    dto::{ReviewDto, ReviewPatchDto, ReviewWriteDto},
    queries::reviews::{GetReviewQuery, ListReviewsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/titles/{title_id}/reviews",
    params(("title_id" = i64, Path, description = "Title id")),
    responses(
        (status = 200, description = "Reviews of the title.", body = [ReviewDto]),
        (status = 404, description = "Unknown title.", body = ErrorResponse)
    ),
    security(()),
    tag = "Reviews"
)]
pub async fn list_reviews(
    Extension(state): Extension<HttpState>,
    Path(title_id): Path<i64>,
) -> HttpResult<Json<Vec<ReviewDto>>> {
    state
        .services
        .review_queries
        .list_reviews(ListReviewsQuery { title_id })
        .await
        .into_http()
        .map(Json)
}

/// The author and title are taken from the token and the path; any
/// `author`/`title` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/v1/titles/{title_id}/reviews",
    params(("title_id" = i64, Path, description = "Title id")),
    request_body = ReviewWriteDto,
    responses(
        (status = 201, description = "Review created.", body = ReviewDto),
        (status = 400, description = "Invalid payload or repeat review.", body = ErrorResponse),
        (status = 404, description = "Unknown title.", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(title_id): Path<i64>,
    Json(payload): Json<ReviewWriteDto>,
) -> HttpResult<(StatusCode, Json<ReviewDto>)> {
    let created = state
        .services
        .review_commands
        .create_review(&user, CreateReviewCommand { title_id, payload })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "The review.", body = ReviewDto),
        (status = 404, description = "Unknown review.", body = ErrorResponse)
    ),
    security(()),
    tag = "Reviews"
)]
pub async fn get_review(
    Extension(state): Extension<HttpState>,
    Path((title_id, review_id)): Path<(i64, i64)>,
) -> HttpResult<Json<ReviewDto>> {
    state
        .services
        .review_queries
        .get_review(GetReviewQuery {
            title_id,
            review_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    request_body = ReviewPatchDto,
    responses(
        (status = 200, description = "Updated review.", body = ReviewDto),
        (status = 403, description = "Neither author nor moderator.", body = ErrorResponse),
        (status = 404, description = "Unknown review.", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn update_review(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((title_id, review_id)): Path<(i64, i64)>,
    Json(patch): Json<ReviewPatchDto>,
) -> HttpResult<Json<ReviewDto>> {
    let command = UpdateReviewCommand {
        title_id,
        review_id,
        patch,
    };

    state
        .services
        .review_commands
        .update_review(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    responses(
        (status = 204, description = "Review deleted."),
        (status = 403, description = "Neither author nor moderator.", body = ErrorResponse),
        (status = 404, description = "Unknown review.", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn delete_review(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((title_id, review_id)): Path<(i64, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .review_commands
        .delete_review(
            &user,
            DeleteReviewCommand {
                title_id,
                review_id,
            },
        )
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
