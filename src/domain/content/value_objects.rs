use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentItemId(pub i64);

impl ContentItemId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "content item id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentItemId> for i64 {
    fn from(value: ContentItemId) -> Self {
        value.0
    }
}

/// Category tag of a content item, e.g. "article" or "page".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentKind(String);

impl ContentKind {
    pub const ARTICLE: &'static str = "article";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("kind cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn article() -> Self {
        Self(Self::ARTICLE.into())
    }

    pub fn is_article(&self) -> bool {
        self.0 == Self::ARTICLE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentKind> for String {
    fn from(value: ContentKind) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTitle(String);

impl ContentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentTitle> for String {
    fn from(value: ContentTitle) -> Self {
        value.0
    }
}

/// Publication state of a content item in the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationStatus {
    Published,
    Unpublished,
}
