// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use mvc_board::application::services::ApplicationServices;
use mvc_board::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use mvc_board::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{FailingArticleRepo, InMemoryArticleRepo};

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryArticleRepo>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_services(
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(write_repo, read_repo))
}

pub fn make_test_app() -> TestApp {
    let repo = Arc::new(InMemoryArticleRepo::new());
    let services = build_services(repo.clone(), repo.clone());
    let router = build_router(HttpState {
        services: Arc::clone(&services),
    });
    TestApp {
        router,
        repo,
        services,
    }
}

/// Router whose storage is down.
pub fn make_failing_router() -> Router {
    let repo = Arc::new(FailingArticleRepo);
    let services = build_services(repo.clone(), repo);
    build_router(HttpState { services })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn set_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// `name=value` part of a `Set-Cookie` header, ready for a `Cookie` header.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Assert a redirect to the article list that leaves the given flash key.
pub fn assert_flash_redirect(resp: &Response, expected_msg: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/article/list");
    let cookie = set_cookie(resp).expect("flash cookie");
    assert_eq!(cookie_pair(&cookie), format!("board.flash={expected_msg}"));
}

/// Assert an HTML error page with the expected status.
pub async fn assert_error_page(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
    let html = body_text(resp).await;
    assert!(
        html.contains(&expected_status.as_u16().to_string()),
        "status missing from error page: {html}"
    );
    html
}
