pub mod services;
pub mod specifications;
pub mod view;

pub use services::ArticleRepository;
pub use view::ArticleView;
