// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;

// 時刻関連
pub use time::{MockClock, fixed_now};

// セキュリティ関連
pub use security::{
    AUTHOR_TOKEN, DummyTokenManager, EDITOR_TOKEN, EXPIRED_TOKEN, OTHER_AUTHOR_TOKEN, author,
    editor, other_author,
};

// ストア関連
pub use store::ConflictingStore;
