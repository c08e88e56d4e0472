use crate::domain::content::value_objects::{
    ContentItemId, ContentKind, ContentTitle, PublicationStatus,
};
use chrono::{DateTime, Utc};

/// A single item held by the content store. Items are immutable once
/// created; listings never mutate them.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentItemId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
}
