// src/infrastructure/repositories/memory_content.rs
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::content::{ContentItem, ContentKind, ContentStore, PublicationStatus};
use crate::domain::errors::{DomainError, DomainResult};

/// Content store backed by a process-local vector.
///
/// Queries return items in insertion order, which is the order the
/// stable listing sort preserves for equal timestamps.
#[derive(Default)]
pub struct InMemoryContentStore {
    items: RwLock<Vec<ContentItem>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ContentItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn insert(&self, item: ContentItem) -> DomainResult<()> {
        let mut guard = self.items.write().map_err(|_| lock_poisoned())?;
        guard.push(item);
        Ok(())
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::Persistence("content store lock poisoned".into())
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn query_by_kind_and_status(
        &self,
        kind: &ContentKind,
        status: PublicationStatus,
    ) -> DomainResult<Vec<ContentItem>> {
        let guard = self.items.read().map_err(|_| lock_poisoned())?;
        Ok(guard
            .iter()
            .filter(|item| item.kind == *kind && item.status == status)
            .cloned()
            .collect())
    }
}
