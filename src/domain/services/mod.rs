//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! ## サービス
//!
//! - **MessageCleanupService**: コミットメッセージの整形

pub mod message_cleanup;
