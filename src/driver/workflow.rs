//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Result};
use log::{error, info};

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::git_commit_log_repository::GitCommitLogRepository;
use crate::adapter::repositories::http_time_entry_repository::HttpTimeEntryRepository;
use crate::application::dto::extract_config::ExtractConfig;
use crate::application::use_cases::extract_history::ExtractHistoryUseCase;
use crate::application::use_cases::submit_entries::SubmitEntriesUseCase;
use crate::domain::entities::time_entry::TimeEntry;

use super::cli::Args;

/// 日付範囲を解決する
/// CLI引数が環境変数より優先される
pub fn resolve_date_window(args: &Args, config: &Config) -> Option<(String, String)> {
    let since = args.since.clone().or_else(|| config.start_date.clone())?;
    let until = args.until.clone().or_else(|| config.end_date.clone())?;
    Some((since, until))
}

/// Timesheet Sync Workflow
pub struct TimesheetSyncWorkflow {
    config: Config,
}

impl TimesheetSyncWorkflow {
    /// Create a new workflow instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the sync workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting timesheet sync...");
        info!("Dry run: {}", args.dry_run);

        // 日付範囲が無ければ両ステージとも実行せずに終了する
        let Some((since, until)) = resolve_date_window(&args, &self.config) else {
            error!("START_DATE or END_DATE is missing in the environment");
            bail!("START_DATE or END_DATE is not set");
        };

        println!("✓ Syncing commits from {} to {}", since, until);

        // Extract commit history, one entry per calendar day
        let entries = self.extract_entries(&since, &until).await;
        println!("✓ Built {} time entries", entries.len());

        if entries.is_empty() {
            println!("No time entries to submit. Exiting.");
            return Ok(());
        }

        if args.dry_run {
            println!("✓ Dry-run mode (not actually submitting)");
            println!("  Would submit {} entries:", entries.len());
            for entry in &entries {
                println!("    - {} | {}", entry.start, entry.description);
            }
            return Ok(());
        }

        // Submit entries sequentially
        // API設定が不完全な場合は何も送信しない
        let submit_config = match self.config.submit_config() {
            Ok(c) => c,
            Err(e) => {
                error!("{:#}", e);
                return Ok(());
            }
        };

        let time_entry_repo = Arc::new(HttpTimeEntryRepository::new(submit_config));
        let submit_use_case = SubmitEntriesUseCase::new(time_entry_repo);
        let summary = submit_use_case.execute(&entries).await;

        println!(
            "✓ Submitted {} entries ({} failed)",
            summary.submitted_count, summary.failed_count
        );
        if summary.is_success() {
            println!("✓ Sync complete!");
        } else {
            println!("⚠ Sync finished with failures");
        }

        Ok(())
    }

    /// 履歴抽出ステージを実行する
    ///
    /// リポジトリパスまたはプロジェクトIDが未設定の場合はエラーログを
    /// 出して空のリストを返す（送信ステージは「エントリなし」として進む）
    async fn extract_entries(&self, since: &str, until: &str) -> Vec<TimeEntry> {
        let (repo_path, project_id) = match (&self.config.git_repo_path, &self.config.project_id) {
            (Some(repo_path), Some(project_id)) => (repo_path.clone(), project_id.clone()),
            _ => {
                error!("PROJECT_ID or GIT_REPO_PATH is missing in the environment");
                return Vec::new();
            }
        };

        let commit_log_repo = Arc::new(GitCommitLogRepository::new(repo_path));
        let extract_use_case = ExtractHistoryUseCase::new(commit_log_repo);

        let extract_config =
            ExtractConfig::new(since.to_string(), until.to_string(), project_id);

        extract_use_case.execute(&extract_config).await
    }
}
