// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deleting an id that does not exist is a no-op.
    #[tracing::instrument(skip(self), fields(article_id = command.id))]
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let removed = self.write_repo.delete(id).await?;

        if removed == 0 {
            tracing::debug!("no article to delete");
        } else {
            tracing::info!("article deleted");
        }
        Ok(())
    }
}
