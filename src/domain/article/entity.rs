// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleTitle, ArticleWriter,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub writer: ArticleWriter,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i64,
}

impl Article {
    /// Applies the fields present in `update` the way the store does.
    pub fn apply(&mut self, update: ArticleUpdate, now: DateTime<Utc>) {
        let ArticleUpdate {
            id: _,
            title,
            content,
            writer,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(writer) = writer {
            self.writer = writer;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub writer: ArticleWriter,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub writer: Option<ArticleWriter>,
}

impl ArticleUpdate {
    pub const fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            content: None,
            writer: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_writer(mut self, writer: ArticleWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.writer.is_none()
    }
}
