pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::ContentItem;
pub use repository::ContentStore;
pub use value_objects::{ContentItemId, ContentKind, ContentTitle, PublicationStatus};
