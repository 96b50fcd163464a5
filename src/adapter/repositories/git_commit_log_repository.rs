//! Git Commit Log Repository Implementation
//!
//! CommitLogRepositoryの外部gitコマンド実装

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::info;
use tokio::process::Command;

use crate::domain::repositories::commit_log_repository::CommitLogRepository;

/// 1コミット1行の出力フォーマット
/// `<short-hash> - <author-name>, <author-date> : <subject>`
const LOG_FORMAT: &str = "%h - %an, %ad : %s";

/// 外部gitコマンドベースのコミットログリポジトリ
///
/// `git log` をリポジトリのディレクトリをカレントとして実行し、
/// 生の出力行を返す
pub struct GitCommitLogRepository {
    repo_path: String,
}

impl GitCommitLogRepository {
    /// 新しいリポジトリを作成する
    ///
    /// # Arguments
    ///
    /// * `repo_path` - gitリポジトリのパス（チルダ展開に対応）
    pub fn new(repo_path: String) -> Self {
        Self { repo_path }
    }

    /// `git log` に渡す引数を組み立てる
    fn log_args(since: &str, until: &str) -> Vec<String> {
        vec![
            "log".to_string(),
            format!("--since={}", since),
            format!("--until={}", until),
            format!("--pretty=format:{}", LOG_FORMAT),
            "--date=iso".to_string(),
        ]
    }
}

#[async_trait]
impl CommitLogRepository for GitCommitLogRepository {
    async fn fetch_log(&self, since: &str, until: &str) -> Result<Vec<String>> {
        let repo_path = shellexpand::tilde(&self.repo_path);

        let output = Command::new("git")
            .args(Self::log_args(since, until))
            .current_dir(repo_path.as_ref())
            .output()
            .await
            .context(format!("Failed to run git log in {}", repo_path))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git log exited with {}: {}", output.status, stderr.trim());
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        info!(
            "Fetched {} commit log lines from {}",
            lines.len(),
            repo_path
        );

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_args_date_window() {
        let args = GitCommitLogRepository::log_args("2024-05-01", "2024-05-31");

        assert_eq!(
            args,
            vec![
                "log",
                "--since=2024-05-01",
                "--until=2024-05-31",
                "--pretty=format:%h - %an, %ad : %s",
                "--date=iso",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_log_nonexistent_repo_is_error() {
        let repo = GitCommitLogRepository::new("/nonexistent/path/to/repo".to_string());

        let result = repo.fetch_log("2024-05-01", "2024-05-31").await;

        assert!(result.is_err());
    }
}
