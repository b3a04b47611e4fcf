// src/presentation/http/extractors.rs
use crate::{
    application::{
        commands::articles::{CreateArticleCommand, UpdateArticleCommand},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use mime::Mime;
use serde::{Deserialize, de::DeserializeOwned};

use super::error::HttpError;

/// Request parameters from the query string and, for form posts, the body.
///
/// A field present in both places takes its value from the body.
#[derive(Debug, Clone)]
pub struct BoardForm<T>(pub T);

impl<T, S> FromRequest<S> for BoardForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().unwrap_or_default().to_owned();
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_form_content_type);

        let body = if is_form {
            Bytes::from_request(req, state)
                .await
                .map_err(|err| HttpError::bad_request(err.body_text()))?
        } else {
            Bytes::new()
        };

        parse_params(&query, &body).map(Self)
    }
}

fn is_form_content_type(content_type: &str) -> bool {
    content_type.parse::<Mime>().is_ok_and(|ct| {
        ct.type_() == mime::APPLICATION && ct.subtype() == mime::WWW_FORM_URLENCODED
    })
}

fn invalid_params(err: impl std::fmt::Display) -> HttpError {
    HttpError::bad_request(format!("invalid request parameters: {err}"))
}

fn parse_params<T: DeserializeOwned>(query: &str, body: &[u8]) -> Result<T, HttpError> {
    let mut pairs: Vec<(String, String)> =
        serde_urlencoded::from_bytes(body).map_err(invalid_params)?;
    let query_pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(invalid_params)?;

    for (key, value) in query_pairs {
        if !pairs.iter().any(|(existing, _)| *existing == key) {
            pairs.push((key, value));
        }
    }

    let merged = serde_urlencoded::to_string(&pairs).map_err(invalid_params)?;
    serde_urlencoded::from_str(&merged).map_err(invalid_params)
}

fn parse_article_no(raw: Option<&str>) -> ApplicationResult<i64> {
    let raw = raw
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApplicationError::validation("articleNo is required"))?;
    let id: ArticleId = raw.parse()?;
    Ok(id.into())
}

fn required(value: Option<String>, field: &str) -> ApplicationResult<String> {
    value.ok_or_else(|| ApplicationError::validation(format!("{field} is required")))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleNoForm {
    #[serde(rename = "articleNo")]
    pub article_no: Option<String>,
}

impl ArticleNoForm {
    pub fn article_no(&self) -> ApplicationResult<i64> {
        parse_article_no(self.article_no.as_deref())
    }
}

/// Fields posted by the write and modify forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(rename = "articleNo")]
    pub article_no: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub writer: Option<String>,
}

impl ArticleForm {
    pub fn into_create_command(self) -> ApplicationResult<CreateArticleCommand> {
        CreateArticleCommand::builder()
            .title(required(self.title, "title")?)
            .content(required(self.content, "content")?)
            .writer(required(self.writer, "writer")?)
            .build()
    }

    /// Fields left out of the form keep their stored value.
    pub fn into_update_command(self) -> ApplicationResult<UpdateArticleCommand> {
        let id = parse_article_no(self.article_no.as_deref())?;
        Ok(UpdateArticleCommand {
            id,
            title: self.title,
            content: self.content,
            writer: self.writer,
        })
    }
}

/// Raw `listCriteria` parameters; anything unparsable falls back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaParams {
    pub page: Option<String>,
    #[serde(rename = "perPageNum")]
    pub per_page_num: Option<String>,
}

impl CriteriaParams {
    pub fn page(&self) -> Option<i64> {
        self.page.as_deref().and_then(|v| v.trim().parse().ok())
    }

    pub fn per_page_num(&self) -> Option<i64> {
        self.per_page_num
            .as_deref()
            .and_then(|v| v.trim().parse().ok())
    }
}
