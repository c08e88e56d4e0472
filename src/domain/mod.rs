pub mod article;
pub mod content;
pub mod errors;
