// tests/support/builders.rs
use mvc_board::application::commands::articles::CreateArticleCommand;
use mvc_board::application::dto::ArticleDto;
use mvc_board::application::services::ApplicationServices;

/// The `i`-th article of a bulk load: distinct title and content, ten
/// rotating writers.
pub fn numbered_article(i: usize) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(format!("Title of article {i}"))
        .content(format!("Content of article {i}"))
        .writer(format!("user0{}", i % 10))
        .build()
        .expect("all fields set")
}

pub async fn seed_articles(services: &ApplicationServices, count: usize) -> Vec<ArticleDto> {
    let mut created = Vec::with_capacity(count);
    for i in 1..=count {
        let article = services
            .article_commands
            .create_article(numbered_article(i))
            .await
            .expect("create article");
        created.push(article);
    }
    created
}

/// Urlencoded form body from key/value pairs.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("encode form")
}
