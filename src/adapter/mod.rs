//! Adapter Layer
//!
//! 外部システム（gitコマンド, リモートHTTP API, 環境変数）との統合

pub mod config;
pub mod repositories;
