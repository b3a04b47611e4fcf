// src/domain/article/repository.rs
use crate::domain::article::criteria::Criteria;
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Stores a new article and returns it with the id and timestamps assigned
    /// by the store.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Overwrites the fields present in `update`. Fails with `NotFound` when
    /// no row has the given id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Returns the number of rows removed; zero when the id is unknown.
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
    async fn increase_view_count(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles, newest first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    /// One page of articles, newest first.
    async fn list_paging(&self, criteria: &Criteria) -> DomainResult<Vec<Article>>;
    async fn count(&self) -> DomainResult<u64>;
}
