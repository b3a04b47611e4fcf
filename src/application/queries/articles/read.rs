use super::{ArticleQueryService, GetArticleByIdQuery};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

#[derive(Debug, Clone, Copy)]
pub struct ReadArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Fetches an article for display and counts the view.
    #[tracing::instrument(skip(self), fields(article_id = query.id))]
    pub async fn read_article(&self, query: ReadArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        self.write_repo.increase_view_count(id).await?;

        self.get_article_by_id(GetArticleByIdQuery { id: query.id })
            .await
    }
}
