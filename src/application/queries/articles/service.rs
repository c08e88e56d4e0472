use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repository: Arc<ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(repository: Arc<ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}
