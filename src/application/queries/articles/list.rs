use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, BlogPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleView,
};

pub struct ListArticlesQuery {
    pub publishable_only: bool,
}

impl ArticleQueryService {
    /// Published articles wrapped as views, newest first.
    ///
    /// The repository only hands back published articles, so a wrap
    /// failure means the store broke its own filter. That is surfaced
    /// as a consistency error rather than dropped.
    pub async fn article_views(&self) -> ApplicationResult<Vec<ArticleView>> {
        let items = self.repository.get_all().await?;
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            match ArticleView::new(item) {
                Ok(view) => views.push(view),
                Err(err) => {
                    tracing::error!(error = %err, "published listing returned a non-article item");
                    return Err(ApplicationError::consistency(format!(
                        "published listing returned a non-article item: {err}"
                    )));
                }
            }
        }
        Ok(views)
    }

    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<BlogPageDto> {
        let mut views = self.article_views().await?;
        let now = self.clock.now();
        if query.publishable_only {
            views.retain(|view| view.is_publishable(now));
        }
        let items = views
            .into_iter()
            .map(|view| ArticleDto::from_view(view, now))
            .collect();
        Ok(BlogPageDto::new(items))
    }
}
