//! # Submit Entries Use Case
//!
//! エントリ送信ユースケース

use std::sync::Arc;

use log::{error, info};

use crate::domain::entities::time_entry::TimeEntry;
use crate::domain::repositories::time_entry_repository::{SubmitOutcome, TimeEntryRepository};

/// 送信結果のサマリー
#[derive(Debug, Clone)]
pub struct SubmitSummary {
    /// 送信に成功したエントリの数
    pub submitted_count: usize,
    /// 失敗したエントリの数
    pub failed_count: usize,
}

impl SubmitSummary {
    /// 全エントリの送信に成功したかチェックする
    pub fn is_success(&self) -> bool {
        self.failed_count == 0
    }
}

/// エントリ送信ユースケース
///
/// タイムシートエントリをリモートAPIへ1件ずつ逐次送信する
pub struct SubmitEntriesUseCase<T: TimeEntryRepository> {
    time_entry_repository: Arc<T>,
}

impl<T: TimeEntryRepository> SubmitEntriesUseCase<T> {
    /// 新しいユースケースを作成する
    ///
    /// # Arguments
    ///
    /// * `time_entry_repository` - タイムシートエントリリポジトリ
    pub fn new(time_entry_repository: Arc<T>) -> Self {
        Self {
            time_entry_repository,
        }
    }

    /// エントリを逐次送信する
    ///
    /// 前のエントリの送信完了（成否を問わず）を待ってから次を送る。
    /// 1件の失敗はログに残すだけで、後続エントリの送信は継続する
    ///
    /// # Arguments
    ///
    /// * `entries` - 送信するエントリのリスト
    ///
    /// # Returns
    ///
    /// 送信結果のサマリー
    pub async fn execute(&self, entries: &[TimeEntry]) -> SubmitSummary {
        let mut submitted_count = 0;
        let mut failed_count = 0;

        for entry in entries {
            match self.time_entry_repository.submit(entry).await {
                Ok(SubmitOutcome::Created) => {
                    info!("Successfully pushed data for day {}", entry.start);
                    submitted_count += 1;
                }
                Ok(SubmitOutcome::Rejected { status }) => {
                    error!(
                        "Failed to push data for day {}. Status Code: {}",
                        entry.start, status
                    );
                    failed_count += 1;
                }
                Err(e) => {
                    error!("Error pushing data for day {}: {:#}", entry.start, e);
                    failed_count += 1;
                }
            }
        }

        SubmitSummary {
            submitted_count,
            failed_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// 呼び出しを記録し、指定した結果を順番に返すモック
    struct RecordingTimeEntryRepository {
        outcomes: Mutex<Vec<Result<SubmitOutcome>>>,
        submitted_days: Mutex<Vec<String>>,
    }

    impl RecordingTimeEntryRepository {
        fn new(outcomes: Vec<Result<SubmitOutcome>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                submitted_days: Mutex::new(Vec::new()),
            }
        }

        fn submitted_days(&self) -> Vec<String> {
            self.submitted_days.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TimeEntryRepository for RecordingTimeEntryRepository {
        async fn submit(&self, entry: &TimeEntry) -> Result<SubmitOutcome> {
            self.submitted_days
                .lock()
                .unwrap()
                .push(entry.start.clone());
            self.outcomes.lock().unwrap().remove(0)
        }
    }

    fn entry_for(year: i32, month: u32, day: u32) -> TimeEntry {
        TimeEntry::for_day(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            "Work".to_string(),
            "proj-1".to_string(),
        )
    }

    #[tokio::test]
    async fn test_submit_all_success() {
        let repo = Arc::new(RecordingTimeEntryRepository::new(vec![
            Ok(SubmitOutcome::Created),
            Ok(SubmitOutcome::Created),
        ]));
        let use_case = SubmitEntriesUseCase::new(repo.clone());

        let entries = vec![entry_for(2024, 5, 1), entry_for(2024, 5, 2)];
        let summary = use_case.execute(&entries).await;

        assert_eq!(summary.submitted_count, 2);
        assert_eq!(summary.failed_count, 0);
        assert!(summary.is_success());
    }

    #[tokio::test]
    async fn test_submit_continues_after_rejection() {
        let repo = Arc::new(RecordingTimeEntryRepository::new(vec![
            Ok(SubmitOutcome::Rejected { status: 500 }),
            Ok(SubmitOutcome::Created),
        ]));
        let use_case = SubmitEntriesUseCase::new(repo.clone());

        let entries = vec![entry_for(2024, 5, 1), entry_for(2024, 5, 2)];
        let summary = use_case.execute(&entries).await;

        // 500で拒否されても次のエントリは送信される
        assert_eq!(summary.submitted_count, 1);
        assert_eq!(summary.failed_count, 1);
        assert_eq!(
            repo.submitted_days(),
            vec!["2024-05-01T08:00:00Z", "2024-05-02T08:00:00Z"]
        );
    }

    #[tokio::test]
    async fn test_submit_continues_after_transport_error() {
        let repo = Arc::new(RecordingTimeEntryRepository::new(vec![
            Err(anyhow::anyhow!("connection refused")),
            Ok(SubmitOutcome::Created),
        ]));
        let use_case = SubmitEntriesUseCase::new(repo.clone());

        let entries = vec![entry_for(2024, 5, 1), entry_for(2024, 5, 2)];
        let summary = use_case.execute(&entries).await;

        assert_eq!(summary.submitted_count, 1);
        assert_eq!(summary.failed_count, 1);
        assert_eq!(repo.submitted_days().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_preserves_entry_order() {
        let repo = Arc::new(RecordingTimeEntryRepository::new(vec![
            Ok(SubmitOutcome::Created),
            Ok(SubmitOutcome::Created),
            Ok(SubmitOutcome::Created),
        ]));
        let use_case = SubmitEntriesUseCase::new(repo.clone());

        let entries = vec![
            entry_for(2024, 5, 3),
            entry_for(2024, 5, 1),
            entry_for(2024, 5, 2),
        ];
        use_case.execute(&entries).await;

        // リストの順序どおりに逐次送信される
        assert_eq!(
            repo.submitted_days(),
            vec![
                "2024-05-03T08:00:00Z",
                "2024-05-01T08:00:00Z",
                "2024-05-02T08:00:00Z"
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_empty_list() {
        let repo = Arc::new(RecordingTimeEntryRepository::new(vec![]));
        let use_case = SubmitEntriesUseCase::new(repo.clone());

        let summary = use_case.execute(&[]).await;

        assert_eq!(summary.submitted_count, 0);
        assert_eq!(summary.failed_count, 0);
        assert!(repo.submitted_days().is_empty());
    }
}
