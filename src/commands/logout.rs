/// ログアウトコマンド
///
/// 保存されているアカウント認証情報を削除します。
use crate::commands::result::{CommandResult, LogoutResult};
use crate::config::UserConfig;
use anyhow::{Context, Result};

/// ログアウトコマンドを実行
///
/// # Returns
/// 成功時はOk(CommandResult)、失敗時はエラー
pub async fn execute() -> Result<CommandResult> {
    let mut config = UserConfig::load().context("Failed to load configuration file")?;

    // 認証情報が存在するか確認
    let was_logged_in = config.has_account();

    if !was_logged_in {
        return Ok(CommandResult::Logout(LogoutResult {
            was_logged_in: false,
        }));
    }

    config.clear_account();
    config.save().context("Failed to save configuration file")?;

    Ok(CommandResult::Logout(LogoutResult { was_logged_in: true }))
}
