// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/article", article_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

fn article_routes() -> Router {
    Router::new()
        .route("/write", get(articles::write_form).post(articles::write))
        .route("/list", get(articles::list))
        .route("/listCriteria", get(articles::list_criteria))
        .route("/read", get(articles::read))
        .route("/modify", get(articles::modify_form).post(articles::modify))
        .route("/remove", post(articles::remove))
}

async fn index() -> Redirect {
    Redirect::to("/article/listCriteria")
}

pub async fn health() -> &'static str {
    "ok"
}
