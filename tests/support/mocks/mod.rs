// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// コンテンツストア関連
pub use content_store::{FailingContentStore, MisfilingContentStore};
