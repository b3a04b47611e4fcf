use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, OffsetPage},
        error::ApplicationResult,
    },
    domain::article::{Criteria, PageMaker},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesByCriteriaQuery {
    pub page: Option<i64>,
    pub per_page_num: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_articles_by_criteria(
        &self,
        query: ListArticlesByCriteriaQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let criteria = Criteria::new(query.page, query.per_page_num);

        let records = self.read_repo.list_paging(&criteria).await?;
        let total_count = self.read_repo.count().await?;
        tracing::debug!(
            page = criteria.page(),
            returned = records.len(),
            total_count,
            "listed article page"
        );

        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, PageMaker::new(criteria, total_count)))
    }
}
