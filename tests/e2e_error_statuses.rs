use axum::http::StatusCode;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn read_without_article_no_is_bad_request() {
    let app = support::make_test_app();
    let resp = app
        .router
        .oneshot(support::get("/article/read"))
        .await
        .unwrap();
    let html = support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
    assert!(html.contains("articleNo is required"), "{html}");
}

#[tokio::test]
async fn read_with_non_numeric_article_no_is_bad_request() {
    let app = support::make_test_app();
    let resp = app
        .router
        .oneshot(support::get("/article/read?articleNo=abc"))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn read_of_unknown_article_is_not_found() {
    let app = support::make_test_app();
    support::seed_articles(&app.services, 1).await;
    let resp = app
        .router
        .oneshot(support::get("/article/read?articleNo=42"))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn modify_form_of_unknown_article_is_not_found() {
    let app = support::make_test_app();
    let resp = app
        .router
        .oneshot(support::get("/article/modify?articleNo=5"))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn write_with_missing_field_is_bad_request() {
    let app = support::make_test_app();
    let body = support::form_body(&[("title", "t"), ("content", "c")]);
    let resp = app
        .router
        .oneshot(support::post_form("/article/write", body))
        .await
        .unwrap();
    let html = support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
    assert!(html.contains("writer is required"), "{html}");
    assert_eq!(app.repo.len(), 0);
}

#[tokio::test]
async fn write_with_blank_title_is_bad_request() {
    let app = support::make_test_app();
    let body = support::form_body(&[("title", "   "), ("content", "c"), ("writer", "w")]);
    let resp = app
        .router
        .oneshot(support::post_form("/article/write", body))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(app.repo.len(), 0);
}

#[tokio::test]
async fn modify_of_unknown_article_is_not_found() {
    let app = support::make_test_app();
    let body = support::form_body(&[
        ("articleNo", "9"),
        ("title", "t"),
        ("content", "c"),
        ("writer", "w"),
    ]);
    let resp = app
        .router
        .oneshot(support::post_form("/article/modify", body))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn modify_without_article_no_is_bad_request() {
    let app = support::make_test_app();
    let body = support::form_body(&[("title", "t"), ("content", "c"), ("writer", "w")]);
    let resp = app
        .router
        .oneshot(support::post_form("/article/modify", body))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn remove_without_article_no_is_bad_request() {
    let app = support::make_test_app();
    let resp = app
        .router
        .oneshot(support::post_form("/article/remove", ""))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn storage_failure_renders_generic_server_error() {
    let router = support::make_failing_router();
    let resp = router
        .oneshot(support::get("/article/listCriteria"))
        .await
        .unwrap();
    let html = support::assert_error_page(resp, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert!(!html.contains("connection refused"), "{html}");
}

#[tokio::test]
async fn storage_failure_on_write_is_server_error() {
    let router = support::make_failing_router();
    let body = support::form_body(&[("title", "t"), ("content", "c"), ("writer", "w")]);
    let resp = router
        .oneshot(support::post_form("/article/write", body))
        .await
        .unwrap();
    support::assert_error_page(resp, StatusCode::INTERNAL_SERVER_ERROR).await;
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = support::make_test_app();
    let resp = app
        .router
        .oneshot(support::get("/article/nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn modify_without_any_field_is_bad_request() {
    let app = support::make_test_app();
    let seeded = support::seed_articles(&app.services, 1).await;
    let body = support::form_body(&[("articleNo", seeded[0].id.to_string().as_str())]);
    let resp = app
        .router
        .oneshot(support::post_form("/article/modify", body))
        .await
        .unwrap();
    let html = support::assert_error_page(resp, StatusCode::BAD_REQUEST).await;
    assert!(html.contains("nothing to update"), "{html}");
}
