// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand,
    queries::articles::{GetArticleByIdQuery, ListArticlesByCriteriaQuery, ReadArticleQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticleForm, ArticleNoForm, BoardForm, CriteriaParams};
use crate::presentation::http::flash::{FlashMessage, FlashRedirect, IncomingFlash};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    ListCriteriaPage, ListPage, ModifyPage, ReadPage, WritePage, render,
};
use axum::{
    Extension,
    response::{Html, Response},
};

pub const LIST_PATH: &str = "/article/list";

pub async fn write_form() -> HttpResult<Html<String>> {
    tracing::debug!("write form requested");
    render(&WritePage {
        action: "/article/write",
    })
}

pub async fn write(
    Extension(state): Extension<HttpState>,
    BoardForm(form): BoardForm<ArticleForm>,
) -> HttpResult<FlashRedirect> {
    let command = form.into_create_command().into_http()?;

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok(FlashRedirect::to(LIST_PATH, FlashMessage::RegSuccess))
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    let page = render(&ListPage {
        articles,
        msg: flash.msg(),
        notice: flash.notice(),
    })?;
    Ok(flash.consume(page))
}

pub async fn list_criteria(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    BoardForm(params): BoardForm<CriteriaParams>,
) -> HttpResult<Response> {
    let query = ListArticlesByCriteriaQuery {
        page: params.page(),
        per_page_num: params.per_page_num(),
    };

    let result = state
        .services
        .article_queries
        .list_articles_by_criteria(query)
        .await
        .into_http()?;

    let page = render(&ListCriteriaPage::new(result, flash.msg(), flash.notice()))?;
    Ok(flash.consume(page))
}

pub async fn read(
    Extension(state): Extension<HttpState>,
    BoardForm(params): BoardForm<ArticleNoForm>,
) -> HttpResult<Html<String>> {
    let id = params.article_no().into_http()?;

    let article = state
        .services
        .article_queries
        .read_article(ReadArticleQuery { id })
        .await
        .into_http()?;

    render(&ReadPage { article })
}

pub async fn modify_form(
    Extension(state): Extension<HttpState>,
    BoardForm(params): BoardForm<ArticleNoForm>,
) -> HttpResult<Html<String>> {
    let id = params.article_no().into_http()?;

    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    render(&ModifyPage { article })
}

pub async fn modify(
    Extension(state): Extension<HttpState>,
    BoardForm(form): BoardForm<ArticleForm>,
) -> HttpResult<FlashRedirect> {
    let command = form.into_update_command().into_http()?;

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(FlashRedirect::to(LIST_PATH, FlashMessage::ModSuccess))
}

pub async fn remove(
    Extension(state): Extension<HttpState>,
    BoardForm(params): BoardForm<ArticleNoForm>,
) -> HttpResult<FlashRedirect> {
    let id = params.article_no().into_http()?;

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(LIST_PATH, FlashMessage::DelSuccess))
}
