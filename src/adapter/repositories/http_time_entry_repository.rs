//! HTTP Time Entry Repository Implementation
//!
//! TimeEntryRepositoryのリモートHTTP API実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::application::dto::submit_config::SubmitConfig;
use crate::domain::entities::time_entry::TimeEntry;
use crate::domain::repositories::time_entry_repository::{SubmitOutcome, TimeEntryRepository};

/// リモートHTTP APIベースのタイムシートエントリリポジトリ
///
/// `POST {api_url}/{workspace_id}/time-entries` へエントリをJSONで
/// 送信する。成功は HTTP 201 のみ
pub struct HttpTimeEntryRepository {
    client: reqwest::Client,
    config: SubmitConfig,
}

impl HttpTimeEntryRepository {
    /// 新しいリポジトリを作成する
    ///
    /// # Arguments
    ///
    /// * `config` - エントリ送信設定
    pub fn new(config: SubmitConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// 送信先エンドポイントのURLを組み立てる
    fn time_entries_url(&self) -> String {
        format!(
            "{}/{}/time-entries",
            self.config.api_url, self.config.workspace_id
        )
    }
}

#[async_trait]
impl TimeEntryRepository for HttpTimeEntryRepository {
    async fn submit(&self, entry: &TimeEntry) -> Result<SubmitOutcome> {
        let response = self
            .client
            .post(self.time_entries_url())
            .header("X-Api-Key", &self.config.api_key)
            .json(entry)
            .send()
            .await
            .context("Time entry request failed")?;

        match response.status() {
            StatusCode::CREATED => Ok(SubmitOutcome::Created),
            status => Ok(SubmitOutcome::Rejected {
                status: status.as_u16(),
            }),
        }
    }
}
