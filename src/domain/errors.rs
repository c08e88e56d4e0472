// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} is not an article")]
    NotAnArticle(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
