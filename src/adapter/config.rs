//! # Configuration
//!
//! 環境変数からの設定読み込み

use anyhow::{bail, Result};
use std::env;

use crate::application::dto::submit_config::SubmitConfig;

/// 実行時設定
///
/// プロセスの環境変数から一度だけ読み込み、実行中は読み取り専用。
/// 各値の必須チェックは消費する側の境界で行うため、読み込み時点では
/// 全て任意とする
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// コミット履歴を読むgitリポジトリのパス
    pub git_repo_path: Option<String>,
    /// 全エントリに付与するプロジェクトID
    pub project_id: Option<String>,
    /// 期間の開始日
    pub start_date: Option<String>,
    /// 期間の終了日
    pub end_date: Option<String>,
    /// リモートAPIのベースURL
    pub api_url: Option<String>,
    /// APIキー
    pub api_key: Option<String>,
    /// ワークスペースID
    pub workspace_id: Option<String>,
}

impl Config {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            git_repo_path: read_var("GIT_REPO_PATH"),
            project_id: read_var("PROJECT_ID"),
            start_date: read_var("START_DATE"),
            end_date: read_var("END_DATE"),
            api_url: read_var("API_URL"),
            api_key: read_var("API_KEY"),
            workspace_id: read_var("WORK_SPACE_ID"),
        }
    }

    /// エントリ送信設定を取り出す
    ///
    /// # Errors
    ///
    /// `API_URL`, `API_KEY`, `WORK_SPACE_ID` のいずれかが未設定の
    /// 場合にエラーを返す
    pub fn submit_config(&self) -> Result<SubmitConfig> {
        match (&self.api_url, &self.api_key, &self.workspace_id) {
            (Some(api_url), Some(api_key), Some(workspace_id)) => Ok(SubmitConfig::new(
                api_url.clone(),
                api_key.clone(),
                workspace_id.clone(),
            )),
            _ => bail!("API_URL, API_KEY or WORK_SPACE_ID is missing in the environment"),
        }
    }
}

/// 環境変数を読み、空文字列は未設定として扱う
fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
