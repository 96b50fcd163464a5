//! # Time Entry Repository Trait
//!
//! タイムシートエントリの送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::time_entry::TimeEntry;

/// 1エントリの送信結果
///
/// トランスポート自体の失敗（接続エラー等）は `Err` で表現し、
/// HTTPレスポンスが返った場合はステータスに応じてこの列挙型になる
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// リモートAPIがエントリを作成した（HTTP 201）
    Created,
    /// リモートAPIが201以外のステータスを返した
    Rejected { status: u16 },
}

/// タイムシートエントリリポジトリ
///
/// エントリのリモートAPIへの送信を担当するリポジトリ
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// エントリを1件送信する
    ///
    /// # Arguments
    ///
    /// * `entry` - 送信するエントリ
    ///
    /// # Returns
    ///
    /// 送信結果
    ///
    /// # Errors
    ///
    /// リクエスト自体が完了しなかった場合にエラーを返す
    async fn submit(&self, entry: &TimeEntry) -> Result<SubmitOutcome>;
}
