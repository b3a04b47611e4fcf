use crate::domain::article::Article;
use chrono::{DateTime, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i64,
}

impl ArticleDto {
    pub fn registered_date(&self) -> String {
        self.registered_at.format(DISPLAY_FORMAT).to_string()
    }

    pub fn updated_date(&self) -> String {
        self.updated_at.format(DISPLAY_FORMAT).to_string()
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            writer: article.writer.into_inner(),
            registered_at: article.registered_at,
            updated_at: article.updated_at,
            view_count: article.view_count,
        }
    }
}
