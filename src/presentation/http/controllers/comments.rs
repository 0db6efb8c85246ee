// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::{CommentDto, CommentWriteDto},
    queries::comments::{GetCommentQuery, ListCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}/comments",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Comments on the review.", body = [CommentDto]),
        (status = 404, description = "Unknown review.", body = ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path((title_id, review_id)): Path<(i64, i64)>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            title_id,
            review_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}/comments",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    request_body = CommentWriteDto,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 404, description = "Unknown review.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((title_id, review_id)): Path<(i64, i64)>,
    Json(payload): Json<CommentWriteDto>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        title_id,
        review_id,
        payload,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "The comment.", body = CommentDto),
        (status = 404, description = "Unknown comment.", body = ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path((title_id, review_id, comment_id)): Path<(i64, i64, i64)>,
) -> HttpResult<Json<CommentDto>> {
    let query = GetCommentQuery {
        title_id,
        review_id,
        comment_id,
    };

    state
        .services
        .comment_queries
        .get_comment(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    request_body = CommentWriteDto,
    responses(
        (status = 200, description = "Updated comment.", body = CommentDto),
        (status = 403, description = "Neither author nor moderator.", body = ErrorResponse),
        (status = 404, description = "Unknown comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((title_id, review_id, comment_id)): Path<(i64, i64, i64)>,
    Json(payload): Json<CommentWriteDto>,
) -> HttpResult<Json<CommentDto>> {
    let command = UpdateCommentCommand {
        title_id,
        review_id,
        comment_id,
        payload,
    };

    state
        .services
        .comment_commands
        .update_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
    params(
        ("title_id" = i64, Path, description = "Title id"),
        ("review_id" = i64, Path, description = "Review id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 403, description = "Neither author nor moderator.", body = ErrorResponse),
        (status = 404, description = "Unknown comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((title_id, review_id, comment_id)): Path<(i64, i64, i64)>,
) -> HttpResult<StatusCode> {
    let command = DeleteCommentCommand {
        title_id,
        review_id,
        comment_id,
    };

    state
        .services
        .comment_commands
        .delete_comment(&user, command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
