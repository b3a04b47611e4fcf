// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, ArticleWriter},
};

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub writer: Option<String>,
}

impl ArticleCommandService {
    #[tracing::instrument(skip(self, command), fields(article_id = command.id))]
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            writer,
        } = command;

        let mut update = ArticleUpdate::new(ArticleId::new(id)?);
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(writer) = writer {
            update = update.with_writer(ArticleWriter::new(writer)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!("article updated");
        Ok(updated.into())
    }
}
