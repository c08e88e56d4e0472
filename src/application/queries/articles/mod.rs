mod list;
mod service;

pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
