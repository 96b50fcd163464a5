//! # Commit Log Repository Trait
//!
//! コミット履歴の取得を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// コミットログリポジトリ
///
/// バージョン管理ツールからコミット履歴を1コミット1行の生テキストで
/// 取得するリポジトリ。本番実装は外部の `git` コマンドを呼び出し、
/// テストでは固定のテキストを返す
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommitLogRepository: Send + Sync {
    /// 期間内のコミットログ行を取得する
    ///
    /// # Arguments
    ///
    /// * `since` - 期間の開始日（ログクエリの since 境界）
    /// * `until` - 期間の終了日（ログクエリの until 境界）
    ///
    /// # Returns
    ///
    /// `<short-hash> - <author-name>, <author-date ISO> : <subject>`
    /// 形式の行のリスト
    ///
    /// # Errors
    ///
    /// ログクエリの実行に失敗した場合にエラーを返す
    async fn fetch_log(&self, since: &str, until: &str) -> Result<Vec<String>>;
}
