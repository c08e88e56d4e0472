// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::domain::content::{ContentItem, ContentKind, ContentStore, PublicationStatus};
use crate::domain::errors::DomainResult;

/// Domain service that reads published articles out of the content store.
pub struct ArticleRepository {
    store: Arc<dyn ContentStore>,
}

impl ArticleRepository {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// All published articles, newest first.
    ///
    /// The sort is stable: items sharing a creation instant keep the
    /// order the store returned them in.
    pub async fn get_all(&self) -> DomainResult<Vec<ContentItem>> {
        let mut items = self
            .store
            .query_by_kind_and_status(&ContentKind::article(), PublicationStatus::Published)
            .await?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }
}
