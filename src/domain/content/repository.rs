use crate::domain::content::entity::ContentItem;
use crate::domain::content::value_objects::{ContentKind, PublicationStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read access to the backing content store.
///
/// Implementations return matching items in their own storage order;
/// callers that need a particular ordering sort on top of this.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn query_by_kind_and_status(
        &self,
        kind: &ContentKind,
        status: PublicationStatus,
    ) -> DomainResult<Vec<ContentItem>>;
}
