//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **TimeEntry**: 1暦日分のタイムシートエントリ
//! - **CommitRecord**: コミットログ1行分のパース済みレコード

pub mod commit_record;
pub mod time_entry;
