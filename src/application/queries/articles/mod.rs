mod get_by_id;
mod list;
mod read;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesByCriteriaQuery;
pub use read::ReadArticleQuery;
pub use service::ArticleQueryService;
