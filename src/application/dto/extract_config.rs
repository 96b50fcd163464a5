//! # Extract Configuration DTO
//!
//! 履歴抽出設定のData Transfer Object

/// 履歴抽出設定
///
/// コミット履歴からタイムシートエントリを組み立てるのに必要な設定情報
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// 期間の開始日（ログクエリの since 境界）
    pub since: String,
    /// 期間の終了日（ログクエリの until 境界）
    pub until: String,
    /// 全エントリに付与する送信先プロジェクトID
    pub project_id: String,
}

impl ExtractConfig {
    /// 新しい履歴抽出設定を作成する
    pub fn new(since: String, until: String, project_id: String) -> Self {
        Self {
            since,
            until,
            project_id,
        }
    }
}
