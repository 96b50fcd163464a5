//! # Submit Configuration DTO
//!
//! エントリ送信設定のData Transfer Object

/// エントリ送信設定
///
/// リモートAPIへの送信に必要な設定情報
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// APIのベースURL（例: "https://api.clockify.me/api/v1/workspaces"）
    pub api_url: String,
    /// `X-Api-Key` ヘッダに渡す静的APIキー
    pub api_key: String,
    /// リクエストパスに埋め込むワークスペースID
    pub workspace_id: String,
}

impl SubmitConfig {
    /// 新しいエントリ送信設定を作成する
    pub fn new(api_url: String, api_key: String, workspace_id: String) -> Self {
        Self {
            api_url,
            api_key,
            workspace_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_config_new() {
        let config = SubmitConfig::new(
            "https://api.example.com/v1/workspaces".to_string(),
            "secret-key".to_string(),
            "ws-1".to_string(),
        );

        assert_eq!(config.api_url, "https://api.example.com/v1/workspaces");
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.workspace_id, "ws-1");
    }
}
