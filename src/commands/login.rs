/// ログインコマンド
///
/// Video Indexerのアカウント認証情報（アカウントID・サブスクリプションキー・
/// リージョン）を受け取り、検証した上でconfig.tomlに保存します。
use crate::api::client::VideoIndexerClient;
use crate::commands::result::{CommandResult, LoginResult};
use crate::config::{AccountConfig, UserConfig};
use crate::presentation::input;
use anyhow::{Context, Result};

/// ログイン時に入力される認証情報
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub account_id: String,
    pub api_key: String,
    pub location: String,
}

/// ログインコマンドを実行
///
/// # Arguments
/// * `from_stdin` - trueの場合、対話入力の代わりにstdinから3行形式で読み込む
///
/// # Returns
/// 成功時はOk(CommandResult)、失敗時はエラー
pub async fn execute(from_stdin: bool) -> Result<CommandResult> {
    let credentials = if from_stdin {
        input::read_credentials_from_stdin()?
    } else {
        input::read_credentials_interactive()?
    };

    let account = AccountConfig {
        account_id: credentials.account_id,
        api_key: credentials.api_key,
        location: credentials.location,
    };

    // 認証情報を検証（アクセストークンが取得できるか）
    eprintln!();
    eprintln!("Verifying credentials...");
    let client = VideoIndexerClient::production().context("Failed to create API client")?;
    client
        .access_token(&account)
        .await
        .context("Authentication failed. Please verify your account id, subscription key and location.")?;

    // UserConfigをロードして認証情報を保存
    let mut config = UserConfig::load().context("Failed to load configuration file")?;
    let was_logged_in = config.has_account();

    config.set_account(account.account_id, account.api_key, account.location);
    config.save().context("Failed to save configuration file")?;

    Ok(CommandResult::Login(LoginResult { was_logged_in }))
}
