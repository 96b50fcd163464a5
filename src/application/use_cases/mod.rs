//! # Use Cases
//!
//! アプリケーションのビジネスフロー
//!
//! ## ユースケース
//!
//! - **ExtractHistoryUseCase**: コミット履歴から日単位のエントリを組み立てる
//! - **SubmitEntriesUseCase**: エントリをリモートAPIへ逐次送信する

pub mod extract_history;
pub mod submit_entries;
