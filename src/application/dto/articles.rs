use crate::domain::article::ArticleView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub kind: String,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub publishable: bool,
}

impl ArticleDto {
    /// Publishability is evaluated against the instant supplied here;
    /// the flag is a snapshot, not a stored attribute.
    pub fn from_view(view: ArticleView, now: DateTime<Utc>) -> Self {
        let publishable = view.is_publishable(now);
        let item = view.into_item();
        Self {
            id: item.id.into(),
            kind: item.kind.into(),
            title: item.title.into(),
            created_at: item.created_at,
            publishable,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPageDto {
    pub title: String,
    pub items: Vec<ArticleDto>,
}

impl BlogPageDto {
    pub const TITLE: &'static str = "Blog";

    pub fn new(items: Vec<ArticleDto>) -> Self {
        Self {
            title: Self::TITLE.to_owned(),
            items,
        }
    }
}
