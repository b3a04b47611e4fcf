// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleTitle, ArticleWriter, NewArticle},
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub writer: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    writer: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn writer(mut self, writer: impl Into<String>) -> Self {
        self.writer = Some(writer.into());
        self
    }

    pub fn build(self) -> ApplicationResult<CreateArticleCommand> {
        Ok(CreateArticleCommand {
            title: self
                .title
                .ok_or_else(|| ApplicationError::validation("title is required"))?,
            content: self
                .content
                .ok_or_else(|| ApplicationError::validation("content is required"))?,
            writer: self
                .writer
                .ok_or_else(|| ApplicationError::validation("writer is required"))?,
        })
    }
}

impl ArticleCommandService {
    #[tracing::instrument(skip(self, command), fields(writer = %command.writer))]
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            title: ArticleTitle::new(command.title)?,
            content: ArticleContent::new(command.content)?,
            writer: ArticleWriter::new(command.writer)?,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
