// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, queries::articles::ArticleQueryService},
    domain::{article::ArticleRepository, content::ContentStore},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(content_store: Arc<dyn ContentStore>, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(ArticleRepository::new(content_store));
        let article_queries = Arc::new(ArticleQueryService::new(repository, clock));

        Self { article_queries }
    }
}
