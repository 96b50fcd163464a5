//! # Extract History Use Case
//!
//! 履歴抽出ユースケース

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::{error, warn};

use crate::application::dto::extract_config::ExtractConfig;
use crate::domain::entities::commit_record::CommitRecord;
use crate::domain::entities::time_entry::TimeEntry;
use crate::domain::repositories::commit_log_repository::CommitLogRepository;

/// その日のメッセージを連結する区切り文字列
const MESSAGE_SEPARATOR: &str = " / ";

/// 履歴抽出ユースケース
///
/// コミットログを取得し、暦日ごとにメッセージを集約して
/// タイムシートエントリを組み立てる
pub struct ExtractHistoryUseCase<R: CommitLogRepository> {
    commit_log_repository: Arc<R>,
}

impl<R: CommitLogRepository> ExtractHistoryUseCase<R> {
    /// 新しいユースケースを作成する
    ///
    /// # Arguments
    ///
    /// * `commit_log_repository` - コミットログリポジトリ
    pub fn new(commit_log_repository: Arc<R>) -> Self {
        Self {
            commit_log_repository,
        }
    }

    /// 履歴を抽出してエントリを組み立てる
    ///
    /// コミットのある暦日1日につきエントリを1件だけ作る。エントリは
    /// 日付の昇順で返し、同じ日のメッセージは出現順のまま
    /// `" / "` で連結する。
    ///
    /// ログクエリの失敗は呼び出し側を落とさず、エラーログを出して
    /// 空のリストを返す。パースできない行は1行単位でスキップする
    ///
    /// # Arguments
    ///
    /// * `config` - 履歴抽出設定
    ///
    /// # Returns
    ///
    /// 日単位のタイムシートエントリのリスト
    pub async fn execute(&self, config: &ExtractConfig) -> Vec<TimeEntry> {
        let lines = match self
            .commit_log_repository
            .fetch_log(&config.since, &config.until)
            .await
        {
            Ok(lines) => lines,
            Err(e) => {
                error!("Failed to fetch commit log: {:#}", e);
                return Vec::new();
            }
        };

        // BTreeMapで日付昇順を保証しつつ、日の中では出現順を保つ
        let mut messages_by_day: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for line in &lines {
            if line.trim().is_empty() {
                continue;
            }

            match CommitRecord::parse(line) {
                Ok(record) => {
                    messages_by_day
                        .entry(record.day)
                        .or_default()
                        .push(record.message);
                }
                Err(e) => {
                    warn!("Skipping unparsable log line ({}): {}", e, line);
                }
            }
        }

        messages_by_day
            .into_iter()
            .map(|(day, messages)| {
                TimeEntry::for_day(
                    day,
                    messages.join(MESSAGE_SEPARATOR),
                    config.project_id.clone(),
                )
            })
            .collect()
    }
}
