//! # TimeEntry Entity
//!
//! タイムシートエントリのドメインエンティティ

use chrono::NaiveDate;
use serde::Serialize;

/// 1営業日の作業開始時刻（固定枠）
const WORKDAY_START: &str = "08:00:00";
/// 1営業日の作業終了時刻（固定枠）
const WORKDAY_END: &str = "16:00:00";

/// タイムシートエントリのドメインエンティティ
///
/// 1暦日分のコミットメッセージを集約した作業記録。
/// リモートAPIへ送信されるJSONの形（camelCase）をそのまま表現する
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub billable: bool,
    /// 予約フィールド（現状は常に空）
    pub custom_attributes: Vec<serde_json::Value>,
    /// その日のコミットメッセージを " / " で連結したもの
    pub description: String,
    pub end: String,
    pub project_id: String,
    pub start: String,
    /// 予約フィールド（現状は常に空）
    pub tag_ids: Vec<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl TimeEntry {
    /// 1暦日分のエントリを作成する
    ///
    /// `start` / `end` はその日の 08:00Z / 16:00Z の固定枠に
    /// ピン留めされる
    ///
    /// # Arguments
    ///
    /// * `day` - 対象の暦日
    /// * `description` - その日の作業内容
    /// * `project_id` - 送信先プロジェクトID
    pub fn for_day(day: NaiveDate, description: String, project_id: String) -> Self {
        Self {
            billable: true,
            custom_attributes: Vec::new(),
            description,
            end: format!("{}T{}Z", day, WORKDAY_END),
            project_id,
            start: format!("{}T{}Z", day, WORKDAY_START),
            tag_ids: Vec::new(),
            entry_type: "REGULAR".to_string(),
        }
    }
}
