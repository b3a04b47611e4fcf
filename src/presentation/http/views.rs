// src/presentation/http/views.rs
use crate::application::dto::{ArticleDto, OffsetPage};
use askama::Template;
use axum::response::Html;

use super::error::{HttpError, HttpResult};

pub fn render(template: &impl Template) -> HttpResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|err| HttpError::internal(format!("template rendering failed: {err}")))
}

#[derive(Template)]
#[template(path = "article/write.html")]
pub struct WritePage {
    pub action: &'static str,
}

#[derive(Template)]
#[template(path = "article/list.html")]
pub struct ListPage {
    pub articles: Vec<ArticleDto>,
    pub msg: &'static str,
    pub notice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub query: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "article/list_criteria.html")]
pub struct ListCriteriaPage {
    pub articles: Vec<ArticleDto>,
    pub links: Vec<PageLink>,
    pub prev_query: Option<String>,
    pub next_query: Option<String>,
    pub total_count: u64,
    pub msg: &'static str,
    pub notice: &'static str,
}

impl ListCriteriaPage {
    pub fn new(page: OffsetPage<ArticleDto>, msg: &'static str, notice: &'static str) -> Self {
        let OffsetPage { items, page_maker } = page;
        let current = page_maker.criteria().page();

        let links = page_maker
            .pages()
            .into_iter()
            .map(|number| PageLink {
                number,
                query: page_maker.make_query(number),
                active: number == current,
            })
            .collect();

        let prev_query = page_maker
            .prev()
            .then(|| page_maker.make_query(page_maker.start_page() - 1));
        let next_query = page_maker
            .next()
            .then(|| page_maker.make_query(page_maker.end_page() + 1));

        Self {
            articles: items,
            links,
            prev_query,
            next_query,
            total_count: page_maker.total_count(),
            msg,
            notice,
        }
    }
}

#[derive(Template)]
#[template(path = "article/read.html")]
pub struct ReadPage {
    pub article: ArticleDto,
}

#[derive(Template)]
#[template(path = "article/modify.html")]
pub struct ModifyPage {
    pub article: ArticleDto,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: &'static str,
    pub message: String,
}
