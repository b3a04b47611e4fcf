// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use mvc_board::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, Criteria,
    NewArticle,
};
use mvc_board::domain::errors::{DomainError, DomainResult};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Article>,
}

/// Behaves like the `articles` table: ids from a sequence, newest first.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Inner>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let now = Utc::now();
        let stored = Article {
            id: ArticleId::new(inner.last_id)?,
            title: article.title,
            content: article.content,
            writer: article.writer,
            registered_at: now,
            updated_at: now,
            view_count: 0,
        };
        let id = inner.last_id;
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let article = inner
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(update, Utc::now());
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        Ok(u64::from(inner.rows.remove(&i64::from(id)).is_some()))
    }

    async fn increase_view_count(&self, id: ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let article = inner
            .rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.view_count += 1;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn list_paging(&self, criteria: &Criteria) -> DomainResult<Vec<Article>> {
        let inner = self.inner.lock().unwrap();
        let offset = usize::try_from(criteria.page_start()).unwrap_or(usize::MAX);
        let limit = usize::try_from(criteria.limit()).unwrap_or(usize::MAX);
        Ok(inner
            .rows
            .values()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().rows.len() as u64)
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// Every call fails the way a lost database connection would.
pub struct FailingArticleRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unavailable()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<u64> {
        unavailable()
    }

    async fn increase_view_count(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn list_paging(&self, _criteria: &Criteria) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn count(&self) -> DomainResult<u64> {
        unavailable()
    }
}
