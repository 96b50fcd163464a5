//! # Message Cleanup Service
//!
//! コミットメッセージの整形サービス

use regex::Regex;
use std::sync::LazyLock;

/// PRやIssueの参照番号サフィックス（例: " (#42)"）にマッチするパターン。
/// 直前の空白1つも一緒に除去する
static REFERENCE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?\(#\d+\)").expect("reference suffix pattern is valid"));

/// コミットメッセージの整形サービス
///
/// タイムシートの説明文に不要な参照番号を取り除くビジネスロジック
pub struct MessageCleanupService;

impl MessageCleanupService {
    /// メッセージから参照番号サフィックスを除去し、前後の空白をトリムする
    ///
    /// 出現位置を問わず全ての `(#<digits>)` を除去する。冪等であり、
    /// 2回適用しても結果は変わらない
    ///
    /// # Arguments
    ///
    /// * `message` - 生のコミットメッセージ
    ///
    /// # Returns
    ///
    /// 整形済みのメッセージ
    pub fn clean(message: &str) -> String {
        REFERENCE_SUFFIX.replace_all(message, "").trim().to_string()
    }
}
