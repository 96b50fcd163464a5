//! # CommitRecord Entity
//!
//! コミットログ1行分のパース済みレコード

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::services::message_cleanup::MessageCleanupService;

/// ログ行のパースエラー
///
/// 1行単位で発生し、その行をスキップするだけで処理は継続する
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitParseError {
    /// メタデータとメッセージを区切る " : " が見つからない
    #[error("missing \" : \" separator")]
    MissingSeparator,
    /// author名の後の日付フィールドが見つからない
    #[error("missing author date field")]
    MissingDateField,
    /// 日付トークンが YYYY-MM-DD として解釈できない
    #[error("invalid author date: {0}")]
    InvalidDate(String),
}

/// コミットログ1行分のパース済みレコード
///
/// `git log --pretty=format:"%h - %an, %ad : %s" --date=iso` の出力
/// 1行に対応する。日単位の集約に使う暦日と、整形済みメッセージのみを
/// 保持し、ハッシュやauthor名は捨てる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// author日時の暦日部分
    pub day: NaiveDate,
    /// 参照番号サフィックスを除去したコミットメッセージ
    pub message: String,
}

impl CommitRecord {
    /// 生のログ行をパースする
    ///
    /// 期待する形式: `<short-hash> - <author-name>, <author-date ISO> : <subject>`
    ///
    /// # Errors
    ///
    /// 形式に合わない行は [`CommitParseError`] を返す
    pub fn parse(line: &str) -> Result<Self, CommitParseError> {
        let (info, message) = line
            .split_once(" : ")
            .ok_or(CommitParseError::MissingSeparator)?;

        // `%an, %ad` の ", " 区切りから日付フィールドを取り出す
        let (_, date_field) = info
            .split_once(", ")
            .ok_or(CommitParseError::MissingDateField)?;

        // --date=iso の出力は "YYYY-MM-DD HH:MM:SS +ZZZZ"。
        // 先頭の日付トークンだけを使う
        let date_token = date_field
            .split_whitespace()
            .next()
            .ok_or(CommitParseError::MissingDateField)?;

        let day = NaiveDate::parse_from_str(date_token, "%Y-%m-%d")
            .map_err(|_| CommitParseError::InvalidDate(date_token.to_string()))?;

        Ok(Self {
            day,
            message: MessageCleanupService::clean(message),
        })
    }
}
