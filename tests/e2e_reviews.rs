// tests/e2e_reviews.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{
    ADMIN_TOKEN, EXPIRED_TOKEN, MODERATOR_TOKEN, OTHER_TOKEN, USER_TOKEN, assert_error_response,
    create_title, post_review, send, test_app,
};

const DUPLICATE: &str = "User can leave only one review for a title.";

async fn app_with_title() -> (axum::Router, i64) {
    let (app, _) = test_app();
    let id = create_title(
        &app,
        json!({ "name": "Dune", "year": 1965, "genre": ["fantasy"], "category": "books" }),
    )
    .await;
    (app, id)
}

/// Author and title come from the request context, not the body.
#[tokio::test]
async fn create_review_assigns_author_and_title_from_context() {
    let (app, title_id) = app_with_title().await;

    let (status, body) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "Spice!", "score": 9, "author": "bob", "title": 999 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["author"], "alice");
    assert_eq!(body["title"], title_id);
    assert_eq!(body["score"], 9);
    assert!(
        body["pub_date"]
            .as_str()
            .unwrap()
            .starts_with("2024-06-01T12:00:00")
    );
}

#[tokio::test]
async fn second_review_by_same_user_is_rejected() {
    let (app, title_id) = app_with_title().await;

    let (status, _) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "one", "score": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "two", "score": 3 }),
    )
    .await;
    let message = assert_error_response(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(message, DUPLICATE);
    assert!(body.get("field").is_none());
}

#[tokio::test]
async fn other_users_and_other_titles_are_unaffected() {
    let (app, title_id) = app_with_title().await;
    let other_title = create_title(
        &app,
        json!({ "name": "Emma", "year": 1815, "genre": ["drama"], "category": "books" }),
    )
    .await;

    let payload = json!({ "text": "fine", "score": 6 });
    for (token, title) in [
        (USER_TOKEN, title_id),
        (OTHER_TOKEN, title_id),
        (USER_TOKEN, other_title),
    ] {
        let (status, body) = post_review(&app, title, token, payload.clone()).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
    }
}

/// Editing an existing review never trips the one-review rule.
#[tokio::test]
async fn updating_own_review_is_not_a_duplicate() {
    let (app, title_id) = app_with_title().await;
    let (_, created) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "meh", "score": 4 }),
    )
    .await;
    let review_id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/titles/{title_id}/reviews/{review_id}"),
        Some(USER_TOKEN),
        Some(json!({ "score": 8 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["score"], 8);
    assert_eq!(body["text"], "meh");
    assert_eq!(body["author"], "alice");
}

#[tokio::test]
async fn only_author_or_moderator_may_modify_review() {
    let (app, title_id) = app_with_title().await;
    let (_, created) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "ok", "score": 5 }),
    )
    .await;
    let uri = format!(
        "/api/v1/titles/{title_id}/reviews/{}",
        created["id"].as_i64().unwrap()
    );

    let (status, body) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(OTHER_TOKEN),
        Some(json!({ "text": "hijack" })),
    )
    .await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN, "Forbidden");

    let (status, body) = send(&app, Method::DELETE, &uri, Some(OTHER_TOKEN), None).await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN, "Forbidden");

    let (status, _) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(MODERATOR_TOKEN),
        Some(json!({ "text": "edited" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(ADMIN_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn anonymous_and_expired_callers_cannot_post() {
    let (app, title_id) = app_with_title().await;
    let payload = json!({ "text": "hi", "score": 5 });

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/titles/{title_id}/reviews"),
        None,
        Some(payload.clone()),
    )
    .await;
    assert_error_response(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");

    let (status, body) = post_review(&app, title_id, EXPIRED_TOKEN, payload).await;
    assert_error_response(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn score_outside_range_is_rejected() {
    let (app, title_id) = app_with_title().await;

    for score in [0, 11] {
        let (status, body) = post_review(
            &app,
            title_id,
            USER_TOKEN,
            json!({ "text": "x", "score": score }),
        )
        .await;
        assert_error_response(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
    }
}

#[tokio::test]
async fn reviewing_missing_title_is_not_found() {
    let (app, _) = app_with_title().await;
    let (status, body) = post_review(
        &app,
        4242,
        USER_TOKEN,
        json!({ "text": "x", "score": 5 }),
    )
    .await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

/// Rating is the rounded mean of review scores.
#[tokio::test]
async fn title_rating_follows_reviews() {
    let (app, title_id) = app_with_title().await;
    post_review(&app, title_id, USER_TOKEN, json!({ "text": "a", "score": 7 })).await;
    post_review(&app, title_id, OTHER_TOKEN, json!({ "text": "b", "score": 10 })).await;

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/titles/{title_id}"),
        None,
        None,
    )
    .await;
    // (7 + 10) / 2 = 8.5
    assert_eq!(body["rating"], 9);

    let (_, list) = send(
        &app,
        Method::GET,
        &format!("/api/v1/titles/{title_id}/reviews"),
        None,
        None,
    )
    .await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn review_is_only_reachable_under_its_title() {
    let (app, title_id) = app_with_title().await;
    let other_title = create_title(
        &app,
        json!({ "name": "Emma", "year": 1815, "genre": [], "category": "books" }),
    )
    .await;
    let (_, created) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "a", "score": 7 }),
    )
    .await;
    let review_id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/titles/{other_title}/reviews/{review_id}"),
        None,
        None,
    )
    .await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn comments_take_review_and_author_from_context() {
    let (app, title_id) = app_with_title().await;
    let (_, review) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "a", "score": 7 }),
    )
    .await;
    let review_id = review["id"].as_i64().unwrap();
    let base = format!("/api/v1/titles/{title_id}/reviews/{review_id}/comments");

    let (status, comment) = send(
        &app,
        Method::POST,
        &base,
        Some(OTHER_TOKEN),
        Some(json!({ "text": "agreed", "review": 999, "author": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{comment}");
    assert_eq!(comment["review"], review_id);
    assert_eq!(comment["author"], "bob");
    assert_eq!(comment["text"], "agreed");

    let comment_uri = format!("{base}/{}", comment["id"].as_i64().unwrap());

    let (status, body) = send(
        &app,
        Method::PATCH,
        &comment_uri,
        Some(USER_TOKEN),
        Some(json!({ "text": "nope" })),
    )
    .await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN, "Forbidden");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &comment_uri,
        Some(OTHER_TOKEN),
        Some(json!({ "text": "still agreed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "still agreed");

    let (_, list) = send(&app, Method::GET, &base, None, None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &comment_uri, Some(MODERATOR_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &comment_uri, None, None).await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn deleting_title_cascades_to_reviews() {
    let (app, title_id) = app_with_title().await;
    let (_, review) = post_review(
        &app,
        title_id,
        USER_TOKEN,
        json!({ "text": "a", "score": 7 }),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/titles/{title_id}"),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/titles/{title_id}/reviews/{}", review["id"]),
        None,
        None,
    )
    .await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND, "Not Found");
}
