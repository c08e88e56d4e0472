use crate::domain::article::specifications::PublishableArticleSpec;
use crate::domain::content::{ContentItem, ContentItemId, ContentKind, ContentTitle};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Article-shaped lens over a content item.
///
/// Construction is the only gate: once built, the wrapped item is
/// guaranteed to carry the article kind.
#[derive(Debug, Clone)]
pub struct ArticleView {
    item: ContentItem,
}

impl ArticleView {
    pub fn new(item: ContentItem) -> DomainResult<Self> {
        if !item.kind.is_article() {
            return Err(DomainError::NotAnArticle(item.kind.as_str().to_owned()));
        }
        Ok(Self { item })
    }

    pub fn id(&self) -> ContentItemId {
        self.item.id
    }

    pub fn kind(&self) -> &ContentKind {
        &self.item.kind
    }

    pub fn title(&self) -> &ContentTitle {
        &self.item.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.item.created_at
    }

    pub fn into_item(self) -> ContentItem {
        self.item
    }

    /// Evaluated against the supplied instant on every call, never cached.
    pub fn is_publishable(&self, now: DateTime<Utc>) -> bool {
        PublishableArticleSpec::new(self.item.created_at, now).is_satisfied()
    }
}
