use chrono::{DateTime, Utc};

/// Minimum age before a published article counts as publishable: three days.
pub const MIN_PUBLISHABLE_AGE_SECS: i64 = 60 * 60 * 24 * 3;

pub struct PublishableArticleSpec {
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
}

impl PublishableArticleSpec {
    pub fn new(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self { created_at, now }
    }

    pub fn is_satisfied(&self) -> bool {
        (self.now - self.created_at).num_seconds() >= MIN_PUBLISHABLE_AGE_SECS
    }
}
