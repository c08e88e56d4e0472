// src/lib.rs
//! Blog listing core: published-article queries over a pluggable content store.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
