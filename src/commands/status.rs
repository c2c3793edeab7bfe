/// ステータスコマンド
///
/// 保存されている認証情報でVideo Indexer APIからアクセストークンを
/// 取得できるか（ログイン状態か）を確認します。
use crate::api::client::VideoIndexerClient;
use crate::commands::result::{CommandResult, StatusResult};
use crate::config::UserConfig;
use anyhow::{Context, Result};

/// ステータスコマンドを実行
///
/// # Returns
/// 成功時はOk(CommandResult)、失敗時はエラー
pub async fn execute() -> Result<CommandResult> {
    eprintln!("Checking authentication status...");
    eprintln!();

    let config = UserConfig::load().context("Failed to load configuration file")?;

    // 認証情報の存在を確認
    if !config.has_account() {
        return Ok(CommandResult::Status(StatusResult {
            is_authenticated: false,
            account_id: None,
            access_token: None,
        }));
    }

    let account = config
        .get_account()
        .context("Failed to retrieve account credentials")?;

    let client = VideoIndexerClient::production().context("Failed to create API client")?;

    // トークンが取得できれば認証は有効
    match client.access_token(account).await {
        Ok(token) => Ok(CommandResult::Status(StatusResult {
            is_authenticated: true,
            account_id: Some(account.account_id.clone()),
            access_token: Some(token.masked()),
        })),
        Err(e) => {
            eprintln!("Token request failed: {}", e);
            eprintln!();

            Ok(CommandResult::Status(StatusResult {
                is_authenticated: false,
                account_id: Some(account.account_id.clone()),
                access_token: None,
            }))
        }
    }
}
