// tests/support/builders.rs
use chrono::{DateTime, Utc};

use kawaraban_core::domain::content::{
    ContentItem, ContentItemId, ContentKind, ContentTitle, PublicationStatus,
};

use super::mocks::fixed_now;

pub struct ContentItemBuilder {
    id: i64,
    kind: String,
    title: String,
    status: PublicationStatus,
    created_at: DateTime<Utc>,
}

impl ContentItemBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            kind: "article".into(),
            title: "Test Article".into(),
            status: PublicationStatus::Published,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.status = PublicationStatus::Unpublished;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> ContentItem {
        ContentItem {
            id: ContentItemId::new(self.id).unwrap(),
            kind: ContentKind::new(self.kind).unwrap(),
            title: ContentTitle::new(self.title).unwrap(),
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// 公開済み記事を一行で作るためのショートカット
pub fn published_article(id: i64, created_at: DateTime<Utc>) -> ContentItem {
    ContentItemBuilder::new()
        .id(id)
        .title(format!("Article {id}"))
        .created_at(created_at)
        .build()
}

/// 記事以外のコンテンツを一行で作るためのショートカット
pub fn page(id: i64, created_at: DateTime<Utc>) -> ContentItem {
    ContentItemBuilder::new()
        .id(id)
        .kind("page")
        .title(format!("Page {id}"))
        .created_at(created_at)
        .build()
}
