// src/infrastructure/repositories/mod.rs
mod memory_content;

pub use memory_content::InMemoryContentStore;
